use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::clinical_exam::{
    ClinicalExam, ClinicalExamUpdate, ClinicalExamWithPet, ExamDetails, NewClinicalExam,
};
use crate::database::repositories::ExamRepository;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::utils::{has_text, require_fields};

/// Exam form payload. Only the general fields are mandatory; the per-mucosa
/// and per-system findings are filled as examined.
#[derive(Debug, Deserialize)]
pub struct ExamRequest {
    pub mascota_id: Option<i32>,
    pub fecha: Option<NaiveDate>,
    pub actitud: Option<String>,
    pub condicion_corporal: Option<String>,
    pub hidratacion: Option<String>,
    pub observaciones: Option<String>,

    pub mucosa_conjuntiva: Option<String>,
    pub mucosa_conjuntiva_observaciones: Option<String>,
    pub mucosa_oral: Option<String>,
    pub mucosa_oral_observaciones: Option<String>,
    pub mucosa_vulvar_prepu: Option<String>,
    pub mucosa_vulvar_prepu_observaciones: Option<String>,
    pub mucosa_rectal: Option<String>,
    pub mucosa_rectal_observaciones: Option<String>,
    pub mucosa_ojos: Option<String>,
    pub mucosa_ojos_observaciones: Option<String>,
    pub mucosa_oidos: Option<String>,
    pub mucosa_oidos_observaciones: Option<String>,
    pub mucosa_nodulos: Option<String>,
    pub mucosa_nodulos_observaciones: Option<String>,
    pub mucosa_piel_anexos: Option<String>,
    pub mucosa_piel_anexos_observaciones: Option<String>,

    pub locomocion_estado: Option<String>,
    pub locomocion_observaciones: Option<String>,
    pub musculo_estado: Option<String>,
    pub musculo_observaciones: Option<String>,
    pub nervioso_estado: Option<String>,
    pub nervioso_observaciones: Option<String>,
    pub cardiovascular_estado: Option<String>,
    pub cardiovascular_observaciones: Option<String>,
    pub respiratorio_estado: Option<String>,
    pub respiratorio_observaciones: Option<String>,
    pub digestivo_estado: Option<String>,
    pub digestivo_observaciones: Option<String>,
    pub genitourinario_estado: Option<String>,
    pub genitourinario_observaciones: Option<String>,
}

impl ExamRequest {
    fn details(&mut self) -> ExamDetails {
        ExamDetails {
            observaciones: self.observaciones.take(),
            mucosa_conjuntiva: self.mucosa_conjuntiva.take(),
            mucosa_conjuntiva_observaciones: self.mucosa_conjuntiva_observaciones.take(),
            mucosa_oral: self.mucosa_oral.take(),
            mucosa_oral_observaciones: self.mucosa_oral_observaciones.take(),
            mucosa_vulvar_prepu: self.mucosa_vulvar_prepu.take(),
            mucosa_vulvar_prepu_observaciones: self.mucosa_vulvar_prepu_observaciones.take(),
            mucosa_rectal: self.mucosa_rectal.take(),
            mucosa_rectal_observaciones: self.mucosa_rectal_observaciones.take(),
            mucosa_ojos: self.mucosa_ojos.take(),
            mucosa_ojos_observaciones: self.mucosa_ojos_observaciones.take(),
            mucosa_oidos: self.mucosa_oidos.take(),
            mucosa_oidos_observaciones: self.mucosa_oidos_observaciones.take(),
            mucosa_nodulos: self.mucosa_nodulos.take(),
            mucosa_nodulos_observaciones: self.mucosa_nodulos_observaciones.take(),
            mucosa_piel_anexos: self.mucosa_piel_anexos.take(),
            mucosa_piel_anexos_observaciones: self.mucosa_piel_anexos_observaciones.take(),
            locomocion_estado: self.locomocion_estado.take(),
            locomocion_observaciones: self.locomocion_observaciones.take(),
            musculo_estado: self.musculo_estado.take(),
            musculo_observaciones: self.musculo_observaciones.take(),
            nervioso_estado: self.nervioso_estado.take(),
            nervioso_observaciones: self.nervioso_observaciones.take(),
            cardiovascular_estado: self.cardiovascular_estado.take(),
            cardiovascular_observaciones: self.cardiovascular_observaciones.take(),
            respiratorio_estado: self.respiratorio_estado.take(),
            respiratorio_observaciones: self.respiratorio_observaciones.take(),
            digestivo_estado: self.digestivo_estado.take(),
            digestivo_observaciones: self.digestivo_observaciones.take(),
            genitourinario_estado: self.genitourinario_estado.take(),
            genitourinario_observaciones: self.genitourinario_observaciones.take(),
        }
    }

    fn validated_new(mut self) -> Result<NewClinicalExam, ApiError> {
        require_fields(
            "Faltan campos obligatorios.",
            &[
                ("mascota_id", self.mascota_id.is_some()),
                ("fecha", self.fecha.is_some()),
                ("actitud", has_text(&self.actitud)),
                ("condicion_corporal", has_text(&self.condicion_corporal)),
                ("hidratacion", has_text(&self.hidratacion)),
            ],
        )?;

        let detalles = self.details();
        Ok(NewClinicalExam {
            mascota_id: self.mascota_id.unwrap_or_default(),
            fecha: self.fecha.unwrap_or_default(),
            actitud: self.actitud.unwrap_or_default(),
            condicion_corporal: self.condicion_corporal.unwrap_or_default(),
            hidratacion: self.hidratacion.unwrap_or_default(),
            detalles,
        })
    }

    fn validated_update(mut self) -> Result<ClinicalExamUpdate, ApiError> {
        require_fields(
            "Faltan campos obligatorios.",
            &[
                ("fecha", self.fecha.is_some()),
                ("actitud", has_text(&self.actitud)),
                ("condicion_corporal", has_text(&self.condicion_corporal)),
                ("hidratacion", has_text(&self.hidratacion)),
            ],
        )?;

        let detalles = self.details();
        Ok(ClinicalExamUpdate {
            fecha: self.fecha.unwrap_or_default(),
            actitud: self.actitud.unwrap_or_default(),
            condicion_corporal: self.condicion_corporal.unwrap_or_default(),
            hidratacion: self.hidratacion.unwrap_or_default(),
            detalles,
        })
    }
}

/// GET /api/examenes_clinicos - List every clinical exam
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<ClinicalExam>> {
    let filas = ExamRepository::new(state.pool.clone()).list().await?;
    Ok(ApiResponse::success(filas))
}

/// POST /api/examenes_clinicos - Record a physical exam
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ExamRequest>,
) -> ApiResult<Value> {
    let nuevo = payload.validated_new()?;
    let id = ExamRepository::new(state.pool.clone()).create(&nuevo).await?;

    Ok(ApiResponse::created(json!({
        "message": "Examen clínico registrado con éxito.",
        "examen_clinico_id": id
    })))
}

/// GET /api/examen-clinico/:id - Quick view: first exam of a pet
pub async fn get_by_pet(
    State(state): State<AppState>,
    Path(mascota_id): Path<i32>,
) -> ApiResult<ClinicalExam> {
    match ExamRepository::new(state.pool.clone())
        .find_by_pet(mascota_id)
        .await?
    {
        Some(examen) => Ok(ApiResponse::success(examen)),
        None => Err(ApiError::not_found("Examen clínico no encontrado")),
    }
}

/// GET /api/examen_clinico/:mascotaId - All exams of a pet with its name
pub async fn list_by_pet(
    State(state): State<AppState>,
    Path(mascota_id): Path<i32>,
) -> ApiResult<Vec<ClinicalExamWithPet>> {
    let filas = ExamRepository::new(state.pool.clone())
        .list_by_pet_with_pet_name(mascota_id)
        .await?;

    if filas.is_empty() {
        return Err(ApiError::not_found(
            "No se encontraron exámenes clínicos para esta mascota.",
        ));
    }
    Ok(ApiResponse::success(filas))
}

/// GET /api/examen_clinico_detalle/:id - One exam by its own id
pub async fn get_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<ClinicalExam> {
    match ExamRepository::new(state.pool.clone()).get_by_id(id).await? {
        Some(examen) => Ok(ApiResponse::success(examen)),
        None => Err(ApiError::not_found("No se encontró el examen clínico.")),
    }
}

/// PUT /api/examen_clinico/:id - Replace an exam
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ExamRequest>,
) -> ApiResult<Value> {
    let cambios = payload.validated_update()?;
    let affected = ExamRepository::new(state.pool.clone())
        .update(id, &cambios)
        .await?;

    if affected == 0 {
        return Err(ApiError::not_found("No se encontró el examen clínico."));
    }
    Ok(ApiResponse::success(json!({
        "message": "Examen clínico actualizado correctamente."
    })))
}

/// DELETE /api/examen_clinico/:id - Delete an exam
///
/// Re-fetch first to report a clean 404; check and delete are not atomic.
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Value> {
    let repo = ExamRepository::new(state.pool.clone());

    if repo.get_by_id(id).await?.is_none() {
        return Err(ApiError::not_found(
            "No se encontró el examen clínico a eliminar.",
        ));
    }
    repo.delete(id).await?;

    Ok(ApiResponse::success(json!({
        "message": "Examen clínico eliminado correctamente."
    })))
}
