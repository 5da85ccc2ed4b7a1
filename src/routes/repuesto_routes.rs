use crate::controllers::repuesto_controller::RepuestoController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::repuesto_dto::{CreateRepuestoRequest, RepuestoResponse, UpdateRepuestoRequest};
use crate::middleware::auth::{auth_middleware, exigir_capacidad, AuthenticatedUser};
use crate::models::user::Capacidad;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    middleware,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

pub fn create_repuesto_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_repuesto))
        .route("/", get(list_repuestos))
        .route("/bajo-stock", get(list_bajo_stock))
        .route("/:id", get(get_repuesto))
        .route("/:id", put(update_repuesto))
        .route("/:id", delete(delete_repuesto))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn create_repuesto(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateRepuestoRequest>,
) -> Result<Json<ApiResponse<RepuestoResponse>>, AppError> {
    exigir_capacidad(&user, Capacidad::GestionarInventario)?;
    let controller = RepuestoController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_repuestos(
    State(state): State<AppState>,
) -> Result<Json<Vec<RepuestoResponse>>, AppError> {
    let controller = RepuestoController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn list_bajo_stock(
    State(state): State<AppState>,
) -> Result<Json<Vec<RepuestoResponse>>, AppError> {
    let controller = RepuestoController::new(state.pool.clone());
    let response = controller.list_bajo_stock().await?;
    Ok(Json(response))
}

async fn get_repuesto(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RepuestoResponse>, AppError> {
    let controller = RepuestoController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_repuesto(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRepuestoRequest>,
) -> Result<Json<ApiResponse<RepuestoResponse>>, AppError> {
    exigir_capacidad(&user, Capacidad::GestionarInventario)?;
    let controller = RepuestoController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_repuesto(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    exigir_capacidad(&user, Capacidad::GestionarInventario)?;
    let controller = RepuestoController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Repuesto eliminado exitosamente"
    })))
}
