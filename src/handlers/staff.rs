use axum::extract::State;

use crate::database::models::staff::{StaffSummary, VetContact};
use crate::database::repositories::StaffRepository;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/veterinarios - Veterinarian picker for the clinical forms
pub async fn list_veterinarians(State(state): State<AppState>) -> ApiResult<Vec<StaffSummary>> {
    let filas = StaffRepository::new(state.pool.clone())
        .list_veterinarians()
        .await?;
    Ok(ApiResponse::success(filas))
}

/// GET /api/veterinarios_cita - Veterinarian picker for the appointment
/// form, phone included
pub async fn list_veterinarians_with_phone(
    State(state): State<AppState>,
) -> ApiResult<Vec<VetContact>> {
    let filas = StaffRepository::new(state.pool.clone())
        .list_veterinarians_with_phone()
        .await?;
    Ok(ApiResponse::success(filas))
}
