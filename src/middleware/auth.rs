use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{verify_token, Claims};
use crate::error::ApiError;
use crate::state::AppState;

/// Session tokens travel in a dedicated header, not the standard
/// Authorization bearer scheme; the clinic frontend has always sent it
/// this way.
pub const TOKEN_HEADER: &str = "x-access-token";

/// Authenticated staff context extracted from a verified token
#[derive(Clone, Debug)]
pub struct AuthStaff {
    pub id: i32,
    pub nombre: String,
    pub rol: String,
}

impl From<Claims> for AuthStaff {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            nombre: claims.nombre,
            rol: claims.rol,
        }
    }
}

/// Token middleware for protected routes.
///
/// A missing header is 403, a present but rejected token is 401. Any valid
/// token grants access: there is no per-role route restriction.
pub async fn token_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = match request.headers().get(TOKEN_HEADER) {
        Some(value) => value
            .to_str()
            .map_err(|_| ApiError::unauthorized("Token inválido"))?
            .to_string(),
        None => {
            return Err(ApiError::forbidden(
                "Acceso denegado. Token no proporcionado.",
            ))
        }
    };

    let claims = match verify_token(&token, &state.config.security.jwt_secret) {
        Ok(claims) => claims,
        Err(err) => {
            // Expired and forged tokens are logged apart but share one status
            tracing::debug!("token rejected: {}", err);
            return Err(ApiError::unauthorized("Token inválido"));
        }
    };

    request.extensions_mut().insert(AuthStaff::from(claims));
    Ok(next.run(request).await)
}
