use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::clinic::ClinicInfo;

pub struct ClinicRepository {
    pool: PgPool,
}

impl ClinicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The clinic record is a singleton; only the first row is served.
    pub async fn info(&self) -> Result<Option<ClinicInfo>, DatabaseError> {
        let info = sqlx::query_as::<_, ClinicInfo>(
            "SELECT id, nombre, direccion, telefono, correo, horario
             FROM informacion_veterinaria
             ORDER BY id
             LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(info)
    }
}
