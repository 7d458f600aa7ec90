use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::owner::{NewOwner, Owner, OwnerContact, OwnerSummary};
use crate::database::repositories::OwnerRepository;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::utils::{has_text, require_fields};

/// Create and edit share the same full field set.
#[derive(Debug, Deserialize)]
pub struct OwnerRequest {
    pub nombre: Option<String>,
    pub direccion: Option<String>,
    pub ciudad: Option<String>,
    pub provincia: Option<String>,
    pub cedula: Option<String>,
    pub celular: Option<String>,
}

impl OwnerRequest {
    fn validated(self) -> Result<NewOwner, ApiError> {
        require_fields(
            "Todos los campos son obligatorios",
            &[
                ("nombre", has_text(&self.nombre)),
                ("direccion", has_text(&self.direccion)),
                ("ciudad", has_text(&self.ciudad)),
                ("provincia", has_text(&self.provincia)),
                ("cedula", has_text(&self.cedula)),
                ("celular", has_text(&self.celular)),
            ],
        )?;

        Ok(NewOwner {
            nombre: self.nombre.unwrap_or_default(),
            direccion: self.direccion.unwrap_or_default(),
            ciudad: self.ciudad.unwrap_or_default(),
            provincia: self.provincia.unwrap_or_default(),
            cedula: self.cedula.unwrap_or_default(),
            celular: self.celular.unwrap_or_default(),
        })
    }
}

/// GET /api/propietarios - List owners (id and name)
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<OwnerSummary>> {
    let filas = OwnerRepository::new(state.pool.clone()).list().await?;
    Ok(ApiResponse::success(filas))
}

/// GET /api/propietarios_cita - Owner picker for the appointment form
pub async fn list_with_phone(State(state): State<AppState>) -> ApiResult<Vec<OwnerContact>> {
    let filas = OwnerRepository::new(state.pool.clone())
        .list_with_phone()
        .await?;
    Ok(ApiResponse::success(filas))
}

/// POST /api/propietarios - Register a new owner
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<OwnerRequest>,
) -> ApiResult<Value> {
    let nuevo = payload.validated()?;
    let id = OwnerRepository::new(state.pool.clone()).create(&nuevo).await?;

    Ok(ApiResponse::created(json!({
        "message": "Propietario registrado exitosamente",
        "propietario_id": id
    })))
}

/// GET /api/propietarios/:id - Fetch one owner (also mounted at the legacy
/// /api/propietario/:id path)
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Owner> {
    match OwnerRepository::new(state.pool.clone()).get_by_id(id).await? {
        Some(propietario) => Ok(ApiResponse::success(propietario)),
        None => Err(ApiError::not_found("Propietario no encontrado.")),
    }
}

/// GET /api/ver_propietario/:id - Owner of a given pet (inner join, so an
/// ownerless pet reports not found)
pub async fn get_by_pet(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Owner> {
    match OwnerRepository::new(state.pool.clone()).find_by_pet(id).await? {
        Some(propietario) => Ok(ApiResponse::success(propietario)),
        None => Err(ApiError::not_found("Propietario no encontrado.")),
    }
}

/// PUT /api/editar_propietario/:id - Replace an owner's data
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<OwnerRequest>,
) -> ApiResult<Value> {
    let cambios = payload.validated()?;
    let affected = OwnerRepository::new(state.pool.clone())
        .update(id, &cambios)
        .await?;

    if affected == 0 {
        return Err(ApiError::not_found("Propietario no encontrado."));
    }
    Ok(ApiResponse::success(json!({
        "message": "Propietario actualizado correctamente."
    })))
}
