use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::clinical_exam::{
    ClinicalExam, ClinicalExamUpdate, ClinicalExamWithPet, NewClinicalExam,
};

const EXAM_COLUMNS: &str = "id, mascota_id, fecha, actitud, condicion_corporal, hidratacion, \
     observaciones, \
     mucosa_conjuntiva, mucosa_conjuntiva_observaciones, \
     mucosa_oral, mucosa_oral_observaciones, \
     mucosa_vulvar_prepu, mucosa_vulvar_prepu_observaciones, \
     mucosa_rectal, mucosa_rectal_observaciones, \
     mucosa_ojos, mucosa_ojos_observaciones, \
     mucosa_oidos, mucosa_oidos_observaciones, \
     mucosa_nodulos, mucosa_nodulos_observaciones, \
     mucosa_piel_anexos, mucosa_piel_anexos_observaciones, \
     locomocion_estado, locomocion_observaciones, \
     musculo_estado, musculo_observaciones, \
     nervioso_estado, nervioso_observaciones, \
     cardiovascular_estado, cardiovascular_observaciones, \
     respiratorio_estado, respiratorio_observaciones, \
     digestivo_estado, digestivo_observaciones, \
     genitourinario_estado, genitourinario_observaciones";

pub struct ExamRepository {
    pool: PgPool,
}

impl ExamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, nuevo: &NewClinicalExam) -> Result<i32, DatabaseError> {
        let d = &nuevo.detalles;
        let id = sqlx::query_scalar(
            "INSERT INTO examenes_clinicos
                 (mascota_id, fecha, actitud, condicion_corporal, hidratacion, observaciones,
                  mucosa_conjuntiva, mucosa_conjuntiva_observaciones,
                  mucosa_oral, mucosa_oral_observaciones,
                  mucosa_vulvar_prepu, mucosa_vulvar_prepu_observaciones,
                  mucosa_rectal, mucosa_rectal_observaciones,
                  mucosa_ojos, mucosa_ojos_observaciones,
                  mucosa_oidos, mucosa_oidos_observaciones,
                  mucosa_nodulos, mucosa_nodulos_observaciones,
                  mucosa_piel_anexos, mucosa_piel_anexos_observaciones,
                  locomocion_estado, locomocion_observaciones,
                  musculo_estado, musculo_observaciones,
                  nervioso_estado, nervioso_observaciones,
                  cardiovascular_estado, cardiovascular_observaciones,
                  respiratorio_estado, respiratorio_observaciones,
                  digestivo_estado, digestivo_observaciones,
                  genitourinario_estado, genitourinario_observaciones)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                     $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28, $29, $30,
                     $31, $32, $33, $34, $35, $36)
             RETURNING id",
        )
        .bind(nuevo.mascota_id)
        .bind(nuevo.fecha)
        .bind(&nuevo.actitud)
        .bind(&nuevo.condicion_corporal)
        .bind(&nuevo.hidratacion)
        .bind(&d.observaciones)
        .bind(&d.mucosa_conjuntiva)
        .bind(&d.mucosa_conjuntiva_observaciones)
        .bind(&d.mucosa_oral)
        .bind(&d.mucosa_oral_observaciones)
        .bind(&d.mucosa_vulvar_prepu)
        .bind(&d.mucosa_vulvar_prepu_observaciones)
        .bind(&d.mucosa_rectal)
        .bind(&d.mucosa_rectal_observaciones)
        .bind(&d.mucosa_ojos)
        .bind(&d.mucosa_ojos_observaciones)
        .bind(&d.mucosa_oidos)
        .bind(&d.mucosa_oidos_observaciones)
        .bind(&d.mucosa_nodulos)
        .bind(&d.mucosa_nodulos_observaciones)
        .bind(&d.mucosa_piel_anexos)
        .bind(&d.mucosa_piel_anexos_observaciones)
        .bind(&d.locomocion_estado)
        .bind(&d.locomocion_observaciones)
        .bind(&d.musculo_estado)
        .bind(&d.musculo_observaciones)
        .bind(&d.nervioso_estado)
        .bind(&d.nervioso_observaciones)
        .bind(&d.cardiovascular_estado)
        .bind(&d.cardiovascular_observaciones)
        .bind(&d.respiratorio_estado)
        .bind(&d.respiratorio_observaciones)
        .bind(&d.digestivo_estado)
        .bind(&d.digestivo_observaciones)
        .bind(&d.genitourinario_estado)
        .bind(&d.genitourinario_observaciones)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ClinicalExam>, DatabaseError> {
        let examen = sqlx::query_as::<_, ClinicalExam>(&format!(
            "SELECT {EXAM_COLUMNS} FROM examenes_clinicos WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(examen)
    }

    pub async fn list(&self) -> Result<Vec<ClinicalExam>, DatabaseError> {
        let filas = sqlx::query_as::<_, ClinicalExam>(&format!(
            "SELECT {EXAM_COLUMNS} FROM examenes_clinicos"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(filas)
    }

    /// First exam recorded for a pet, used by the quick-view endpoint.
    pub async fn find_by_pet(&self, mascota_id: i32) -> Result<Option<ClinicalExam>, DatabaseError> {
        let examen = sqlx::query_as::<_, ClinicalExam>(&format!(
            "SELECT {EXAM_COLUMNS} FROM examenes_clinicos WHERE mascota_id = $1 ORDER BY id LIMIT 1"
        ))
        .bind(mascota_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(examen)
    }

    /// All exams of a pet with the pet's name. Inner join: exams whose pet
    /// row is gone are excluded.
    pub async fn list_by_pet_with_pet_name(
        &self,
        mascota_id: i32,
    ) -> Result<Vec<ClinicalExamWithPet>, DatabaseError> {
        let filas = sqlx::query_as::<_, ClinicalExamWithPet>(
            "SELECT ec.*, m.nombre AS mascota_nombre
             FROM examenes_clinicos ec
             JOIN mascotas m ON ec.mascota_id = m.id
             WHERE ec.mascota_id = $1",
        )
        .bind(mascota_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(filas)
    }

    pub async fn update(&self, id: i32, cambios: &ClinicalExamUpdate) -> Result<u64, DatabaseError> {
        let d = &cambios.detalles;
        let result = sqlx::query(
            "UPDATE examenes_clinicos
             SET fecha = $1, actitud = $2, condicion_corporal = $3, hidratacion = $4,
                 observaciones = $5,
                 mucosa_conjuntiva = $6, mucosa_conjuntiva_observaciones = $7,
                 mucosa_oral = $8, mucosa_oral_observaciones = $9,
                 mucosa_vulvar_prepu = $10, mucosa_vulvar_prepu_observaciones = $11,
                 mucosa_rectal = $12, mucosa_rectal_observaciones = $13,
                 mucosa_ojos = $14, mucosa_ojos_observaciones = $15,
                 mucosa_oidos = $16, mucosa_oidos_observaciones = $17,
                 mucosa_nodulos = $18, mucosa_nodulos_observaciones = $19,
                 mucosa_piel_anexos = $20, mucosa_piel_anexos_observaciones = $21,
                 locomocion_estado = $22, locomocion_observaciones = $23,
                 musculo_estado = $24, musculo_observaciones = $25,
                 nervioso_estado = $26, nervioso_observaciones = $27,
                 cardiovascular_estado = $28, cardiovascular_observaciones = $29,
                 respiratorio_estado = $30, respiratorio_observaciones = $31,
                 digestivo_estado = $32, digestivo_observaciones = $33,
                 genitourinario_estado = $34, genitourinario_observaciones = $35
             WHERE id = $36",
        )
        .bind(cambios.fecha)
        .bind(&cambios.actitud)
        .bind(&cambios.condicion_corporal)
        .bind(&cambios.hidratacion)
        .bind(&d.observaciones)
        .bind(&d.mucosa_conjuntiva)
        .bind(&d.mucosa_conjuntiva_observaciones)
        .bind(&d.mucosa_oral)
        .bind(&d.mucosa_oral_observaciones)
        .bind(&d.mucosa_vulvar_prepu)
        .bind(&d.mucosa_vulvar_prepu_observaciones)
        .bind(&d.mucosa_rectal)
        .bind(&d.mucosa_rectal_observaciones)
        .bind(&d.mucosa_ojos)
        .bind(&d.mucosa_ojos_observaciones)
        .bind(&d.mucosa_oidos)
        .bind(&d.mucosa_oidos_observaciones)
        .bind(&d.mucosa_nodulos)
        .bind(&d.mucosa_nodulos_observaciones)
        .bind(&d.mucosa_piel_anexos)
        .bind(&d.mucosa_piel_anexos_observaciones)
        .bind(&d.locomocion_estado)
        .bind(&d.locomocion_observaciones)
        .bind(&d.musculo_estado)
        .bind(&d.musculo_observaciones)
        .bind(&d.nervioso_estado)
        .bind(&d.nervioso_observaciones)
        .bind(&d.cardiovascular_estado)
        .bind(&d.cardiovascular_observaciones)
        .bind(&d.respiratorio_estado)
        .bind(&d.respiratorio_observaciones)
        .bind(&d.digestivo_estado)
        .bind(&d.digestivo_observaciones)
        .bind(&d.genitourinario_estado)
        .bind(&d.genitourinario_observaciones)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Unconditional delete; callers re-fetch first.
    pub async fn delete(&self, id: i32) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM examenes_clinicos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
