use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::clinical_history::{
    ClinicalHistory, ClinicalHistoryUpdate, ClinicalHistoryWithVet, NewClinicalHistory,
};

const HISTORY_COLUMNS: &str = "id, mascota_id, fecha, vacunacion_tipo, vacunacion_fecha, \
     desparasitacion_producto, desparasitacion_fecha, estado_reproductivo, alimentacion, \
     habitat, alergias, cirugias, antecedentes, enfermedades_anteriores, observaciones, \
     veterinario_id";

pub struct HistoryRepository {
    pool: PgPool,
}

impl HistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, nueva: &NewClinicalHistory) -> Result<i32, DatabaseError> {
        let id = sqlx::query_scalar(
            "INSERT INTO historias_clinicas
                 (mascota_id, fecha, vacunacion_tipo, vacunacion_fecha,
                  desparasitacion_producto, desparasitacion_fecha, estado_reproductivo,
                  alimentacion, habitat, alergias, cirugias, antecedentes,
                  enfermedades_anteriores, observaciones, veterinario_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING id",
        )
        .bind(nueva.mascota_id)
        .bind(nueva.fecha)
        .bind(&nueva.vacunacion_tipo)
        .bind(nueva.vacunacion_fecha)
        .bind(&nueva.desparasitacion_producto)
        .bind(nueva.desparasitacion_fecha)
        .bind(&nueva.estado_reproductivo)
        .bind(&nueva.alimentacion)
        .bind(&nueva.habitat)
        .bind(&nueva.alergias)
        .bind(&nueva.cirugias)
        .bind(&nueva.antecedentes)
        .bind(&nueva.enfermedades_anteriores)
        .bind(&nueva.observaciones)
        .bind(nueva.veterinario_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ClinicalHistory>, DatabaseError> {
        let historia = sqlx::query_as::<_, ClinicalHistory>(&format!(
            "SELECT {HISTORY_COLUMNS} FROM historias_clinicas WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(historia)
    }

    pub async fn list(&self) -> Result<Vec<ClinicalHistory>, DatabaseError> {
        let filas = sqlx::query_as::<_, ClinicalHistory>(&format!(
            "SELECT {HISTORY_COLUMNS} FROM historias_clinicas"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(filas)
    }

    /// First history recorded for a pet, used by the quick-view endpoint.
    pub async fn find_by_pet(
        &self,
        mascota_id: i32,
    ) -> Result<Option<ClinicalHistory>, DatabaseError> {
        let historia = sqlx::query_as::<_, ClinicalHistory>(&format!(
            "SELECT {HISTORY_COLUMNS} FROM historias_clinicas WHERE mascota_id = $1 ORDER BY id LIMIT 1"
        ))
        .bind(mascota_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(historia)
    }

    /// All histories of a pet with the attending veterinarian's name.
    /// Inner join: rows whose veterinarian is gone are excluded.
    pub async fn list_by_pet_with_vet(
        &self,
        mascota_id: i32,
    ) -> Result<Vec<ClinicalHistoryWithVet>, DatabaseError> {
        let filas = sqlx::query_as::<_, ClinicalHistoryWithVet>(
            "SELECT hc.id, hc.mascota_id, hc.fecha, hc.vacunacion_tipo, hc.vacunacion_fecha,
                    hc.desparasitacion_producto, hc.desparasitacion_fecha,
                    hc.estado_reproductivo, hc.alimentacion, hc.habitat, hc.alergias,
                    hc.cirugias, hc.antecedentes, hc.enfermedades_anteriores,
                    hc.observaciones, hc.veterinario_id,
                    v.nombre AS veterinario
             FROM historias_clinicas hc
             JOIN usuarios v ON hc.veterinario_id = v.id
             WHERE hc.mascota_id = $1",
        )
        .bind(mascota_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(filas)
    }

    pub async fn get_detail(
        &self,
        id: i32,
    ) -> Result<Option<ClinicalHistoryWithVet>, DatabaseError> {
        let historia = sqlx::query_as::<_, ClinicalHistoryWithVet>(
            "SELECT hc.id, hc.mascota_id, hc.fecha, hc.vacunacion_tipo, hc.vacunacion_fecha,
                    hc.desparasitacion_producto, hc.desparasitacion_fecha,
                    hc.estado_reproductivo, hc.alimentacion, hc.habitat, hc.alergias,
                    hc.cirugias, hc.antecedentes, hc.enfermedades_anteriores,
                    hc.observaciones, hc.veterinario_id,
                    v.nombre AS veterinario
             FROM historias_clinicas hc
             JOIN usuarios v ON hc.veterinario_id = v.id
             WHERE hc.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(historia)
    }

    pub async fn update(
        &self,
        id: i32,
        cambios: &ClinicalHistoryUpdate,
    ) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE historias_clinicas
             SET fecha = $1, vacunacion_tipo = $2, vacunacion_fecha = $3,
                 desparasitacion_producto = $4, desparasitacion_fecha = $5,
                 estado_reproductivo = $6, alimentacion = $7, habitat = $8,
                 alergias = $9, cirugias = $10, antecedentes = $11,
                 enfermedades_anteriores = $12, observaciones = $13, veterinario_id = $14
             WHERE id = $15",
        )
        .bind(cambios.fecha)
        .bind(&cambios.vacunacion_tipo)
        .bind(cambios.vacunacion_fecha)
        .bind(&cambios.desparasitacion_producto)
        .bind(cambios.desparasitacion_fecha)
        .bind(&cambios.estado_reproductivo)
        .bind(&cambios.alimentacion)
        .bind(&cambios.habitat)
        .bind(&cambios.alergias)
        .bind(&cambios.cirugias)
        .bind(&cambios.antecedentes)
        .bind(&cambios.enfermedades_anteriores)
        .bind(&cambios.observaciones)
        .bind(cambios.veterinario_id)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Unconditional delete; callers re-fetch first.
    pub async fn delete(&self, id: i32) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM historias_clinicas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
