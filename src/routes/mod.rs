//! Rutas de la API
//!
//! Cada agregado expone su propio router; `create_router` arma la aplicación
//! completa con CORS y el endpoint de prueba.

pub mod arreglada_routes;
pub mod auth_routes;
pub mod equipo_routes;
pub mod orden_routes;
pub mod repuesto_routes;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use serde_json::json;

/// Router completo de la aplicación
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/auth", auth_routes::create_auth_router(state.clone()))
        .nest(
            "/api/repuesto",
            repuesto_routes::create_repuesto_router(state.clone()),
        )
        .nest(
            "/api/orden",
            orden_routes::create_orden_router(state.clone()),
        )
        .nest(
            "/api/equipo",
            equipo_routes::create_equipo_router(state.clone()),
        )
        .nest(
            "/api/arreglada",
            arreglada_routes::create_arreglada_router(state.clone()),
        )
        .layer(cors)
        .with_state(state)
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Sistema de mantenimiento de flota funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
