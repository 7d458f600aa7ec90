use serde::Serialize;
use sqlx::FromRow;

/// The clinic's own record (`informacion_veterinaria`), a read-only
/// singleton shown on the public site.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClinicInfo {
    pub id: i32,
    pub nombre: String,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub correo: Option<String>,
    pub horario: Option<String>,
}
