use serde::Serialize;
use sqlx::FromRow;

/// A pet owner (`propietarios`).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Owner {
    pub id: i32,
    pub nombre: String,
    pub direccion: String,
    pub ciudad: String,
    pub provincia: String,
    pub cedula: String,
    pub celular: String,
}

#[derive(Debug, Clone)]
pub struct NewOwner {
    pub nombre: String,
    pub direccion: String,
    pub ciudad: String,
    pub provincia: String,
    pub cedula: String,
    pub celular: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OwnerSummary {
    pub id: i32,
    pub nombre: String,
}

/// Owner row for the appointment form.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OwnerContact {
    pub id: i32,
    pub nombre: String,
    pub celular: String,
}
