use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::clinical_history::{
    ClinicalHistory, ClinicalHistoryUpdate, ClinicalHistoryWithVet, NewClinicalHistory,
};
use crate::database::repositories::HistoryRepository;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::utils::{has_text, require_fields};

#[derive(Debug, Deserialize)]
pub struct CreateHistoryRequest {
    pub mascota_id: Option<i32>,
    pub fecha: Option<NaiveDate>,
    pub vacunacion_tipo: Option<String>,
    pub vacunacion_fecha: Option<NaiveDate>,
    pub desparasitacion_producto: Option<String>,
    pub desparasitacion_fecha: Option<NaiveDate>,
    pub estado_reproductivo: Option<String>,
    pub alimentacion: Option<String>,
    pub habitat: Option<String>,
    pub alergias: Option<String>,
    pub cirugias: Option<String>,
    pub antecedentes: Option<String>,
    pub enfermedades_anteriores: Option<String>,
    pub observaciones: Option<String>,
    pub veterinario_id: Option<i32>,
}

impl CreateHistoryRequest {
    fn validated(self) -> Result<NewClinicalHistory, ApiError> {
        require_fields(
            "Faltan campos obligatorios.",
            &[
                ("mascota_id", self.mascota_id.is_some()),
                ("fecha", self.fecha.is_some()),
                ("estado_reproductivo", has_text(&self.estado_reproductivo)),
                ("alimentacion", has_text(&self.alimentacion)),
                ("habitat", has_text(&self.habitat)),
                ("veterinario_id", self.veterinario_id.is_some()),
            ],
        )?;

        Ok(NewClinicalHistory {
            mascota_id: self.mascota_id.unwrap_or_default(),
            fecha: self.fecha.unwrap_or_default(),
            vacunacion_tipo: self.vacunacion_tipo,
            vacunacion_fecha: self.vacunacion_fecha,
            desparasitacion_producto: self.desparasitacion_producto,
            desparasitacion_fecha: self.desparasitacion_fecha,
            estado_reproductivo: self.estado_reproductivo.unwrap_or_default(),
            alimentacion: self.alimentacion.unwrap_or_default(),
            habitat: self.habitat.unwrap_or_default(),
            alergias: self.alergias,
            cirugias: self.cirugias,
            antecedentes: self.antecedentes,
            enfermedades_anteriores: self.enfermedades_anteriores,
            observaciones: self.observaciones,
            veterinario_id: self.veterinario_id.unwrap_or_default(),
        })
    }
}

/// Full replacement on edit; the pet link never changes.
#[derive(Debug, Deserialize)]
pub struct UpdateHistoryRequest {
    pub fecha: Option<NaiveDate>,
    pub vacunacion_tipo: Option<String>,
    pub vacunacion_fecha: Option<NaiveDate>,
    pub desparasitacion_producto: Option<String>,
    pub desparasitacion_fecha: Option<NaiveDate>,
    pub estado_reproductivo: Option<String>,
    pub alimentacion: Option<String>,
    pub habitat: Option<String>,
    pub alergias: Option<String>,
    pub cirugias: Option<String>,
    pub antecedentes: Option<String>,
    pub enfermedades_anteriores: Option<String>,
    pub observaciones: Option<String>,
    pub veterinario_id: Option<i32>,
}

impl UpdateHistoryRequest {
    fn validated(self) -> Result<ClinicalHistoryUpdate, ApiError> {
        require_fields(
            "Faltan campos obligatorios.",
            &[
                ("fecha", self.fecha.is_some()),
                ("estado_reproductivo", has_text(&self.estado_reproductivo)),
                ("alimentacion", has_text(&self.alimentacion)),
                ("habitat", has_text(&self.habitat)),
                ("veterinario_id", self.veterinario_id.is_some()),
            ],
        )?;

        Ok(ClinicalHistoryUpdate {
            fecha: self.fecha.unwrap_or_default(),
            vacunacion_tipo: self.vacunacion_tipo,
            vacunacion_fecha: self.vacunacion_fecha,
            desparasitacion_producto: self.desparasitacion_producto,
            desparasitacion_fecha: self.desparasitacion_fecha,
            estado_reproductivo: self.estado_reproductivo.unwrap_or_default(),
            alimentacion: self.alimentacion.unwrap_or_default(),
            habitat: self.habitat.unwrap_or_default(),
            alergias: self.alergias,
            cirugias: self.cirugias,
            antecedentes: self.antecedentes,
            enfermedades_anteriores: self.enfermedades_anteriores,
            observaciones: self.observaciones,
            veterinario_id: self.veterinario_id.unwrap_or_default(),
        })
    }
}

/// GET /api/historias_clinicas - List every clinical history
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<ClinicalHistory>> {
    let filas = HistoryRepository::new(state.pool.clone()).list().await?;
    Ok(ApiResponse::success(filas))
}

/// POST /api/historias_clinicas - Record a visit's clinical history
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateHistoryRequest>,
) -> ApiResult<Value> {
    let nueva = payload.validated()?;
    let id = HistoryRepository::new(state.pool.clone()).create(&nueva).await?;

    Ok(ApiResponse::created(json!({
        "message": "Historia clínica registrada exitosamente.",
        "historia_clinica_id": id
    })))
}

/// GET /api/historia-clinica/:id - Quick view: first history of a pet
pub async fn get_by_pet(
    State(state): State<AppState>,
    Path(mascota_id): Path<i32>,
) -> ApiResult<ClinicalHistory> {
    match HistoryRepository::new(state.pool.clone())
        .find_by_pet(mascota_id)
        .await?
    {
        Some(historia) => Ok(ApiResponse::success(historia)),
        None => Err(ApiError::not_found("Historia no encontrada")),
    }
}

/// GET /api/historia_clinica/:mascotaId - All histories of a pet with the
/// attending veterinarian's name
pub async fn list_by_pet(
    State(state): State<AppState>,
    Path(mascota_id): Path<i32>,
) -> ApiResult<Vec<ClinicalHistoryWithVet>> {
    let filas = HistoryRepository::new(state.pool.clone())
        .list_by_pet_with_vet(mascota_id)
        .await?;

    // The pet's record page treats "none yet" as not found
    if filas.is_empty() {
        return Err(ApiError::not_found(
            "No se encontraron historias clínicas para esta mascota.",
        ));
    }
    Ok(ApiResponse::success(filas))
}

/// GET /api/historia_clinica_detalle/:id - One history with the
/// veterinarian's name
pub async fn get_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<ClinicalHistoryWithVet> {
    match HistoryRepository::new(state.pool.clone()).get_detail(id).await? {
        Some(historia) => Ok(ApiResponse::success(historia)),
        None => Err(ApiError::not_found("No se encontró la historia clínica.")),
    }
}

/// PUT /api/historia_clinica/:id - Replace a history
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateHistoryRequest>,
) -> ApiResult<Value> {
    let cambios = payload.validated()?;
    let affected = HistoryRepository::new(state.pool.clone())
        .update(id, &cambios)
        .await?;

    if affected == 0 {
        return Err(ApiError::not_found(
            "No se encontró la historia clínica para actualizar.",
        ));
    }
    Ok(ApiResponse::success(json!({
        "message": "Historia clínica actualizada correctamente."
    })))
}

/// DELETE /api/historia_clinica/:id - Delete a history
///
/// Re-fetch first to report a clean 404; check and delete are not atomic.
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Value> {
    let repo = HistoryRepository::new(state.pool.clone());

    if repo.get_by_id(id).await?.is_none() {
        return Err(ApiError::not_found(
            "No se encontró la historia clínica a eliminar.",
        ));
    }
    repo.delete(id).await?;

    Ok(ApiResponse::success(json!({
        "message": "Historia clínica eliminada correctamente."
    })))
}
