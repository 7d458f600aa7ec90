use axum::extract::State;

use crate::database::models::clinic::ClinicInfo;
use crate::database::repositories::ClinicRepository;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/clinica - The clinic's own record (read-only singleton)
pub async fn info(State(state): State<AppState>) -> ApiResult<ClinicInfo> {
    match ClinicRepository::new(state.pool.clone()).info().await? {
        Some(info) => Ok(ApiResponse::success(info)),
        None => Err(ApiError::not_found(
            "No se encontró información de la clínica",
        )),
    }
}
