use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// An appointment (`citas_veterinarias`), linking a pet, its owner and the
/// attending veterinarian.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Appointment {
    pub id: i32,
    pub fecha_hora: NaiveDateTime,
    pub motivo: String,
    pub propietario_id: i32,
    pub veterinario_id: i32,
    pub mascota_id: i32,
}

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub fecha_hora: NaiveDateTime,
    pub motivo: String,
    pub propietario_id: i32,
    pub veterinario_id: i32,
    pub mascota_id: i32,
}

/// Editable fields: schedule, reason and veterinarian. The pet/owner linkage
/// is immutable after creation.
#[derive(Debug, Clone)]
pub struct AppointmentUpdate {
    pub fecha_hora: NaiveDateTime,
    pub motivo: String,
    pub veterinario_id: i32,
}

/// Calendar row: appointment plus the names behind its three links.
/// Inner joins on all three, so an appointment whose pet, owner or
/// veterinarian row is missing drops out of the calendar.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AppointmentDetail {
    pub id: i32,
    pub fecha_hora: NaiveDateTime,
    pub motivo: String,
    pub mascota: String,
    pub propietario: String,
    pub propietario_celular: String,
    pub veterinario: String,
}

/// Single-appointment view with ids alongside the display names.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AppointmentFull {
    pub id: i32,
    pub fecha_hora: NaiveDateTime,
    pub motivo: String,
    pub mascota_id: i32,
    pub mascota: String,
    pub propietario_id: i32,
    pub propietario: String,
    pub propietario_celular: String,
    pub veterinario_id: i32,
    pub veterinario: String,
    pub veterinario_celular: Option<String>,
}
