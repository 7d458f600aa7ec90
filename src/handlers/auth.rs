use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{self, Claims};
use crate::database::models::staff::NewStaff;
use crate::database::repositories::StaffRepository;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthStaff};
use crate::state::AppState;

use super::utils::{has_text, require_fields};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub nombre: Option<String>,
    pub correo: Option<String>,
    pub contrasena: Option<String>,
    pub celular: Option<String>,
    pub rol: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub correo: Option<String>,
    pub contrasena: Option<String>,
}

/// POST /api/registrar-usuario - Register a staff account (also mounted at
/// the legacy /api/registro path)
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<Value> {
    require_fields(
        "Todos los campos son obligatorios.",
        &[
            ("nombre", has_text(&payload.nombre)),
            ("correo", has_text(&payload.correo)),
            ("contrasena", has_text(&payload.contrasena)),
            ("rol", has_text(&payload.rol)),
        ],
    )?;

    let repo = StaffRepository::new(state.pool.clone());
    let correo = payload.correo.unwrap_or_default();

    // The unique index on correo is the backstop for a concurrent register
    if repo.email_taken(&correo).await? {
        return Err(ApiError::conflict("El correo ya está registrado."));
    }

    let digest = auth::hash_password(
        &payload.contrasena.unwrap_or_default(),
        state.config.security.bcrypt_cost,
    )?;

    let nuevo = NewStaff {
        nombre: payload.nombre.unwrap_or_default(),
        correo,
        contrasena: digest,
        celular: payload.celular,
        rol: payload.rol.unwrap_or_default(),
    };
    let id = repo.create(&nuevo).await?;

    Ok(ApiResponse::created(json!({
        "message": "Usuario registrado correctamente",
        "usuario_id": id
    })))
}

/// POST /api/login - Authenticate staff credentials and issue a session token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Value> {
    require_fields(
        "Todos los campos son obligatorios.",
        &[
            ("correo", has_text(&payload.correo)),
            ("contrasena", has_text(&payload.contrasena)),
        ],
    )?;

    let repo = StaffRepository::new(state.pool.clone());
    let usuario = match repo.find_by_email(&payload.correo.unwrap_or_default()).await? {
        Some(usuario) => usuario,
        None => return Err(ApiError::unauthorized("Usuario no encontrado")),
    };

    if !auth::verify_password(&payload.contrasena.unwrap_or_default(), &usuario.contrasena)? {
        return Err(ApiError::unauthorized("Contraseña incorrecta"));
    }

    let security = &state.config.security;
    let claims = Claims::new(
        usuario.id,
        usuario.nombre.clone(),
        usuario.rol.clone(),
        security.jwt_expiry_hours as i64,
    );
    let token = auth::generate_token(&claims, &security.jwt_secret)?;

    Ok(ApiResponse::success(json!({
        "message": "Inicio de sesión exitoso",
        "token": token,
        "usuario": {
            "id": usuario.id,
            "nombre": usuario.nombre,
            "correo": usuario.correo,
            "rol": usuario.rol
        }
    })))
}

/// GET /api/protegido - Echo the identity attached by the token middleware
pub async fn protegido(Extension(staff): Extension<AuthStaff>) -> ApiResult<Value> {
    Ok(ApiResponse::success(json!({
        "message": "Accediste a una ruta protegida",
        "usuario": {
            "id": staff.id,
            "nombre": staff.nombre,
            "rol": staff.rol
        }
    })))
}
