use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::appointment::{
    Appointment, AppointmentDetail, AppointmentFull, AppointmentUpdate, NewAppointment,
};
use crate::database::repositories::AppointmentRepository;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::utils::{has_text, parse_fecha_hora, require_fields};

#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    pub fecha_hora: Option<String>,
    pub motivo: Option<String>,
    pub propietario_id: Option<i32>,
    pub veterinario_id: Option<i32>,
    pub mascota_id: Option<i32>,
}

impl CreateAppointmentRequest {
    fn validated(self) -> Result<NewAppointment, ApiError> {
        require_fields(
            "Todos los campos son obligatorios.",
            &[
                ("fecha_hora", has_text(&self.fecha_hora)),
                ("motivo", has_text(&self.motivo)),
                ("propietario_id", self.propietario_id.is_some()),
                ("veterinario_id", self.veterinario_id.is_some()),
                ("mascota_id", self.mascota_id.is_some()),
            ],
        )?;

        Ok(NewAppointment {
            fecha_hora: parse_fecha_hora(&self.fecha_hora.unwrap_or_default())?,
            motivo: self.motivo.unwrap_or_default(),
            propietario_id: self.propietario_id.unwrap_or_default(),
            veterinario_id: self.veterinario_id.unwrap_or_default(),
            mascota_id: self.mascota_id.unwrap_or_default(),
        })
    }
}

/// Reschedule form: only the schedule, reason and veterinarian can change.
#[derive(Debug, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub fecha_hora: Option<String>,
    pub motivo: Option<String>,
    pub veterinario_id: Option<i32>,
}

impl UpdateAppointmentRequest {
    fn validated(self) -> Result<AppointmentUpdate, ApiError> {
        require_fields(
            "Todos los campos son obligatorios.",
            &[
                ("fecha_hora", has_text(&self.fecha_hora)),
                ("motivo", has_text(&self.motivo)),
                ("veterinario_id", self.veterinario_id.is_some()),
            ],
        )?;

        Ok(AppointmentUpdate {
            fecha_hora: parse_fecha_hora(&self.fecha_hora.unwrap_or_default())?,
            motivo: self.motivo.unwrap_or_default(),
            veterinario_id: self.veterinario_id.unwrap_or_default(),
        })
    }
}

/// GET /api/citas - List raw appointment rows
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Appointment>> {
    let filas = AppointmentRepository::new(state.pool.clone()).list().await?;
    Ok(ApiResponse::success(filas))
}

/// GET /api/ver_citas - Calendar view, names resolved, ordered by schedule
pub async fn list_detailed(State(state): State<AppState>) -> ApiResult<Vec<AppointmentDetail>> {
    let filas = AppointmentRepository::new(state.pool.clone())
        .list_detailed()
        .await?;
    Ok(ApiResponse::success(filas))
}

/// POST /api/citas - Schedule an appointment
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> ApiResult<Value> {
    let nueva = payload.validated()?;
    let id = AppointmentRepository::new(state.pool.clone())
        .create(&nueva)
        .await?;

    Ok(ApiResponse::created(json!({
        "message": "Cita registrada exitosamente",
        "cita_id": id
    })))
}

/// GET /api/ver_cita/:id - One appointment with ids and names
pub async fn get_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<AppointmentFull> {
    match AppointmentRepository::new(state.pool.clone())
        .get_detail(id)
        .await?
    {
        Some(cita) => Ok(ApiResponse::success(cita)),
        None => Err(ApiError::not_found("Cita no encontrada.")),
    }
}

/// PUT /api/editar_cita/:id - Reschedule an appointment
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAppointmentRequest>,
) -> ApiResult<Value> {
    let cambios = payload.validated()?;
    let affected = AppointmentRepository::new(state.pool.clone())
        .update(id, &cambios)
        .await?;

    if affected == 0 {
        return Err(ApiError::not_found("Cita no encontrada."));
    }
    Ok(ApiResponse::success(json!({
        "message": "Cita actualizada correctamente."
    })))
}

/// DELETE /api/citas/:id - Cancel an appointment
///
/// Re-fetch first to report a clean 404; check and delete are not atomic.
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Value> {
    let repo = AppointmentRepository::new(state.pool.clone());

    if repo.get_by_id(id).await?.is_none() {
        return Err(ApiError::not_found("Cita no encontrada."));
    }
    repo.delete(id).await?;

    Ok(ApiResponse::success(json!({
        "message": "Cita eliminada correctamente"
    })))
}
