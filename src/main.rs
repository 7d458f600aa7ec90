use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use vetclinic_api::config::AppConfig;
use vetclinic_api::database::manager;
use vetclinic_api::handlers;
use vetclinic_api::middleware::token_auth_middleware;
use vetclinic_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    tracing::info!("Starting vetclinic API in {:?} mode", config.environment);

    let pool = manager::connect_pool(&config.database)?;
    let port = config.server.port;
    let state = AppState::new(pool, config);

    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    println!("Servidor corriendo en http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Staff authentication
        .merge(auth_routes(state.clone()))
        // Entity CRUD (token-free, matching the historical contract)
        .merge(owner_routes())
        .merge(pet_routes())
        .merge(history_routes())
        .merge(exam_routes())
        .merge(appointment_routes())
        .merge(staff_routes())
        .route("/api/clinica", get(handlers::clinic::info))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes(state: AppState) -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/api/registrar-usuario", post(auth::register))
        // Legacy alias kept for the old admin frontend
        .route("/api/registro", post(auth::register))
        .route("/api/login", post(auth::login))
        .route(
            "/api/protegido",
            get(auth::protegido).layer(from_fn_with_state(state, token_auth_middleware)),
        )
}

fn owner_routes() -> Router<AppState> {
    use handlers::owners;

    Router::new()
        .route("/api/propietarios", get(owners::list).post(owners::create))
        .route("/api/propietarios/:id", get(owners::get))
        // Legacy alias
        .route("/api/propietario/:id", get(owners::get))
        .route("/api/ver_propietario/:id", get(owners::get_by_pet))
        .route("/api/editar_propietario/:id", put(owners::update))
        .route("/api/propietariosHistorial", get(owners::list))
        .route("/api/propietarios_cita", get(owners::list_with_phone))
}

fn pet_routes() -> Router<AppState> {
    use handlers::pets;

    Router::new()
        .route("/api/mascotas", get(pets::list).post(pets::create))
        .route("/api/mascotas/:id", get(pets::get))
        .route("/api/lista-mascotas", get(pets::list_brief))
        // Legacy alias
        .route("/api/mascotasHistorial", get(pets::list_brief))
        .route("/api/mascotas_citas", get(pets::list_for_appointments))
        .route("/api/editar-mascotas/:id", put(pets::update))
        .route("/eliminar/mascotas/:id", delete(pets::delete))
}

fn history_routes() -> Router<AppState> {
    use handlers::histories;

    Router::new()
        .route(
            "/api/historias_clinicas",
            get(histories::list).post(histories::create),
        )
        .route("/api/historia-clinica/:id", get(histories::get_by_pet))
        .route(
            "/api/historia_clinica/:id",
            get(histories::list_by_pet)
                .put(histories::update)
                .delete(histories::delete),
        )
        .route(
            "/api/historia_clinica_detalle/:id",
            get(histories::get_detail),
        )
}

fn exam_routes() -> Router<AppState> {
    use handlers::exams;

    Router::new()
        .route(
            "/api/examenes_clinicos",
            get(exams::list).post(exams::create),
        )
        .route("/api/examen-clinico/:id", get(exams::get_by_pet))
        .route(
            "/api/examen_clinico/:id",
            get(exams::list_by_pet)
                .put(exams::update)
                .delete(exams::delete),
        )
        .route("/api/examen_clinico_detalle/:id", get(exams::get_detail))
}

fn appointment_routes() -> Router<AppState> {
    use handlers::appointments;

    Router::new()
        .route(
            "/api/citas",
            get(appointments::list).post(appointments::create),
        )
        .route("/api/citas/:id", delete(appointments::delete))
        .route("/api/ver_citas", get(appointments::list_detailed))
        .route("/api/ver_cita/:id", get(appointments::get_detail))
        .route("/api/editar_cita/:id", put(appointments::update))
}

fn staff_routes() -> Router<AppState> {
    use handlers::staff;

    Router::new()
        .route("/api/veterinarios", get(staff::list_veterinarians))
        .route(
            "/api/veterinarios_cita",
            get(staff::list_veterinarians_with_phone),
        )
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Vetclinic API",
            "version": version,
            "description": "REST backend for veterinary clinic records",
            "endpoints": {
                "auth": "/api/registrar-usuario, /api/login (public), /api/protegido (token)",
                "propietarios": "/api/propietarios[/:id] (CRU)",
                "mascotas": "/api/mascotas[/:id], /eliminar/mascotas/:id",
                "historias_clinicas": "/api/historias_clinicas, /api/historia_clinica/:id",
                "examenes_clinicos": "/api/examenes_clinicos, /api/examen_clinico/:id",
                "citas": "/api/citas[/:id], /api/ver_citas, /api/editar_cita/:id",
                "clinica": "/api/clinica (read-only)",
            }
        }
    }))
}

async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match manager::health_check(&state.pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
