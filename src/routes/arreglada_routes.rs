use crate::controllers::arreglada_controller::ArregladaController;
use crate::dto::arreglada_dto::ArregladaResponse;
use crate::middleware::auth::auth_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    middleware,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

/// Archivo de reparaciones: solo lectura
pub fn create_arreglada_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_arregladas))
        .route("/:id", get(get_arreglada))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_arregladas(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArregladaResponse>>, AppError> {
    let controller = ArregladaController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_arreglada(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ArregladaResponse>, AppError> {
    let controller = ArregladaController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}
