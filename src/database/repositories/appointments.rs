use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::appointment::{
    Appointment, AppointmentDetail, AppointmentFull, AppointmentUpdate, NewAppointment,
};

pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, nueva: &NewAppointment) -> Result<i32, DatabaseError> {
        let id = sqlx::query_scalar(
            "INSERT INTO citas_veterinarias
                 (fecha_hora, motivo, propietario_id, veterinario_id, mascota_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(nueva.fecha_hora)
        .bind(&nueva.motivo)
        .bind(nueva.propietario_id)
        .bind(nueva.veterinario_id)
        .bind(nueva.mascota_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Appointment>, DatabaseError> {
        let cita = sqlx::query_as::<_, Appointment>(
            "SELECT id, fecha_hora, motivo, propietario_id, veterinario_id, mascota_id
             FROM citas_veterinarias
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(cita)
    }

    pub async fn list(&self) -> Result<Vec<Appointment>, DatabaseError> {
        let filas = sqlx::query_as::<_, Appointment>(
            "SELECT id, fecha_hora, motivo, propietario_id, veterinario_id, mascota_id
             FROM citas_veterinarias",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(filas)
    }

    /// Calendar view: names resolved through inner joins, ordered by
    /// schedule. Appointments with a dangling link drop out.
    pub async fn list_detailed(&self) -> Result<Vec<AppointmentDetail>, DatabaseError> {
        let filas = sqlx::query_as::<_, AppointmentDetail>(
            "SELECT c.id, c.fecha_hora, c.motivo,
                    m.nombre AS mascota,
                    p.nombre AS propietario,
                    p.celular AS propietario_celular,
                    v.nombre AS veterinario
             FROM citas_veterinarias c
             JOIN mascotas m ON c.mascota_id = m.id
             JOIN propietarios p ON c.propietario_id = p.id
             JOIN usuarios v ON c.veterinario_id = v.id
             ORDER BY c.fecha_hora ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(filas)
    }

    pub async fn get_detail(&self, id: i32) -> Result<Option<AppointmentFull>, DatabaseError> {
        let cita = sqlx::query_as::<_, AppointmentFull>(
            "SELECT c.id, c.fecha_hora, c.motivo,
                    m.id AS mascota_id, m.nombre AS mascota,
                    p.id AS propietario_id, p.nombre AS propietario,
                    p.celular AS propietario_celular,
                    v.id AS veterinario_id, v.nombre AS veterinario,
                    v.celular AS veterinario_celular
             FROM citas_veterinarias c
             JOIN mascotas m ON c.mascota_id = m.id
             JOIN propietarios p ON c.propietario_id = p.id
             JOIN usuarios v ON c.veterinario_id = v.id
             WHERE c.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(cita)
    }

    pub async fn update(&self, id: i32, cambios: &AppointmentUpdate) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE citas_veterinarias
             SET fecha_hora = $1, motivo = $2, veterinario_id = $3
             WHERE id = $4",
        )
        .bind(cambios.fecha_hora)
        .bind(&cambios.motivo)
        .bind(cambios.veterinario_id)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Unconditional delete; callers re-fetch first.
    pub async fn delete(&self, id: i32) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM citas_veterinarias WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
