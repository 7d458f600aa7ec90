use serde::Serialize;
use sqlx::FromRow;

/// A staff account (`usuarios`): veterinarians and administrators.
/// The bcrypt digest never leaves the server; it is skipped on serialize.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Staff {
    pub id: i32,
    pub nombre: String,
    pub correo: String,
    #[serde(skip_serializing)]
    pub contrasena: String,
    pub celular: Option<String>,
    pub rol: String,
}

/// Fields for a new account; the digest is produced by the credential
/// service before this struct is built.
#[derive(Debug, Clone)]
pub struct NewStaff {
    pub nombre: String,
    pub correo: String,
    pub contrasena: String,
    pub celular: Option<String>,
    pub rol: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StaffSummary {
    pub id: i32,
    pub nombre: String,
}

/// Veterinarian row for the appointment form; `celular` is coalesced to a
/// placeholder in SQL so it is always present.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VetContact {
    pub id: i32,
    pub nombre: String,
    pub celular: String,
}
