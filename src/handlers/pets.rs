use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::pet::{
    NewPet, PetDetail, PetForAppointment, PetSummary, PetUpdate, PetWithOwner,
};
use crate::database::repositories::PetRepository;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::utils::{has_text, require_fields};

#[derive(Debug, Deserialize)]
pub struct CreatePetRequest {
    pub nombre: Option<String>,
    pub especie: Option<String>,
    pub raza: Option<String>,
    pub sexo: Option<String>,
    pub color: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub edad: Option<i32>,
    pub procedencia: Option<String>,
    pub chip: Option<String>,
    pub propietario_id: Option<i32>,
}

impl CreatePetRequest {
    fn validated(self) -> Result<NewPet, ApiError> {
        require_fields(
            "Todos los campos son obligatorios",
            &[
                ("nombre", has_text(&self.nombre)),
                ("especie", has_text(&self.especie)),
                ("raza", has_text(&self.raza)),
                ("sexo", has_text(&self.sexo)),
                ("fecha_nacimiento", self.fecha_nacimiento.is_some()),
                ("edad", self.edad.is_some()),
                ("procedencia", has_text(&self.procedencia)),
            ],
        )?;

        Ok(NewPet {
            nombre: self.nombre.unwrap_or_default(),
            especie: self.especie.unwrap_or_default(),
            raza: self.raza.unwrap_or_default(),
            sexo: self.sexo.unwrap_or_default(),
            color: self.color,
            fecha_nacimiento: self.fecha_nacimiento.unwrap_or_default(),
            edad: self.edad.unwrap_or_default(),
            procedencia: self.procedencia.unwrap_or_default(),
            chip: self.chip,
            propietario_id: self.propietario_id,
        })
    }
}

/// Edit form: every field but the name, which is fixed at registration.
#[derive(Debug, Deserialize)]
pub struct UpdatePetRequest {
    pub especie: Option<String>,
    pub raza: Option<String>,
    pub sexo: Option<String>,
    pub color: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub edad: Option<i32>,
    pub propietario_id: Option<i32>,
}

impl UpdatePetRequest {
    fn validated(self) -> Result<PetUpdate, ApiError> {
        require_fields(
            "Todos los campos son obligatorios",
            &[
                ("especie", has_text(&self.especie)),
                ("raza", has_text(&self.raza)),
                ("sexo", has_text(&self.sexo)),
                ("fecha_nacimiento", self.fecha_nacimiento.is_some()),
                ("edad", self.edad.is_some()),
            ],
        )?;

        Ok(PetUpdate {
            especie: self.especie.unwrap_or_default(),
            raza: self.raza.unwrap_or_default(),
            sexo: self.sexo.unwrap_or_default(),
            color: self.color,
            fecha_nacimiento: self.fecha_nacimiento.unwrap_or_default(),
            edad: self.edad.unwrap_or_default(),
            propietario_id: self.propietario_id,
        })
    }
}

/// GET /api/mascotas - Registry listing with the owner's name (LEFT JOIN,
/// ownerless pets included)
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<PetWithOwner>> {
    let filas = PetRepository::new(state.pool.clone()).list_with_owner().await?;
    Ok(ApiResponse::success(filas))
}

/// GET /api/lista-mascotas - Brief id/name listing (also mounted at the
/// legacy /api/mascotasHistorial path)
pub async fn list_brief(State(state): State<AppState>) -> ApiResult<Vec<PetSummary>> {
    let filas = PetRepository::new(state.pool.clone()).list_brief().await?;
    Ok(ApiResponse::success(filas))
}

/// GET /api/mascotas_citas - Pet picker for the appointment form
pub async fn list_for_appointments(
    State(state): State<AppState>,
) -> ApiResult<Vec<PetForAppointment>> {
    let filas = PetRepository::new(state.pool.clone())
        .list_for_appointments()
        .await?;
    Ok(ApiResponse::success(filas))
}

/// POST /api/mascotas - Register a new pet
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreatePetRequest>,
) -> ApiResult<Value> {
    let nueva = payload.validated()?;
    let id = PetRepository::new(state.pool.clone()).create(&nueva).await?;

    Ok(ApiResponse::created(json!({
        "message": "Mascota registrada exitosamente",
        "mascota_id": id
    })))
}

/// GET /api/mascotas/:id - Pet detail with owner data
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<PetDetail> {
    match PetRepository::new(state.pool.clone()).get_detail(id).await? {
        Some(mascota) => Ok(ApiResponse::success(mascota)),
        None => Err(ApiError::not_found("Mascota no encontrada")),
    }
}

/// PUT /api/editar-mascotas/:id - Replace a pet's data (name excluded)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePetRequest>,
) -> ApiResult<Value> {
    let cambios = payload.validated()?;
    let affected = PetRepository::new(state.pool.clone())
        .update(id, &cambios)
        .await?;

    if affected == 0 {
        return Err(ApiError::not_found("Mascota no encontrada"));
    }
    Ok(ApiResponse::success(json!({
        "message": "Mascota actualizada correctamente"
    })))
}

/// DELETE /eliminar/mascotas/:id - Delete a pet
///
/// Re-fetches first so a missing id is a clean 404; the check and the delete
/// are separate statements, so two concurrent deletes can race (accepted for
/// this workload). Clinical records of the pet are left in place.
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Value> {
    let repo = PetRepository::new(state.pool.clone());

    if repo.get_by_id(id).await?.is_none() {
        return Err(ApiError::not_found("Mascota no encontrada"));
    }
    repo.delete(id).await?;

    Ok(ApiResponse::success(json!({
        "message": "Mascota eliminada correctamente"
    })))
}
