use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A pet (`mascotas`). The owner link is optional: pets can be registered
/// before their owner is.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Pet {
    pub id: i32,
    pub nombre: String,
    pub especie: String,
    pub raza: String,
    pub sexo: String,
    pub color: Option<String>,
    pub fecha_nacimiento: NaiveDate,
    pub edad: i32,
    pub procedencia: String,
    pub chip: Option<String>,
    pub propietario_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewPet {
    pub nombre: String,
    pub especie: String,
    pub raza: String,
    pub sexo: String,
    pub color: Option<String>,
    pub fecha_nacimiento: NaiveDate,
    pub edad: i32,
    pub procedencia: String,
    pub chip: Option<String>,
    pub propietario_id: Option<i32>,
}

/// Replacement fields for an edit; the name is fixed at registration.
#[derive(Debug, Clone)]
pub struct PetUpdate {
    pub especie: String,
    pub raza: String,
    pub sexo: String,
    pub color: Option<String>,
    pub fecha_nacimiento: NaiveDate,
    pub edad: i32,
    pub propietario_id: Option<i32>,
}

/// List row: pet columns plus the owner's name via LEFT JOIN, so pets
/// without a registered owner still appear.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PetWithOwner {
    pub id: i32,
    pub nombre: String,
    pub especie: String,
    pub raza: String,
    pub sexo: String,
    pub color: Option<String>,
    pub fecha_nacimiento: NaiveDate,
    pub edad: i32,
    pub procedencia: String,
    pub chip: Option<String>,
    pub propietario_nombre: Option<String>,
}

/// Detail row joined against the owner (inner join: a pet with no owner row
/// is reported as not found here, matching the historical contract).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PetDetail {
    pub mascota_id: i32,
    pub mascota_nombre: String,
    pub especie: String,
    pub raza: String,
    pub sexo: String,
    pub color: Option<String>,
    pub fecha_nacimiento: NaiveDate,
    pub edad: i32,
    pub propietario_id: i32,
    pub propietario_nombre: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PetSummary {
    pub id: i32,
    pub nombre: String,
}

/// Pet row for the appointment form; carries the owner link so the client
/// can preselect the owner.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PetForAppointment {
    pub id: i32,
    pub nombre: String,
    pub propietario_id: Option<i32>,
}
