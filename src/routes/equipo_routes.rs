use crate::controllers::equipo_controller::EquipoController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::equipo_dto::{CreateEquipoRequest, EquipoResponse, UpdateEquipoRequest};
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

pub fn create_equipo_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_equipo))
        .route("/", get(list_equipos))
        .route("/:id", get(get_equipo))
        .route("/:id", put(update_equipo))
        .route("/:id", delete(delete_equipo))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn create_equipo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateEquipoRequest>,
) -> Result<Json<ApiResponse<EquipoResponse>>, AppError> {
    exigir_capacidad(&user, Capacidad::GestionarEquipos)?;
    let controller = EquipoController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_equipos(
    State(state): State<AppState>,
) -> Result<Json<Vec<EquipoResponse>>, AppError> {
    let controller = EquipoController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_equipo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EquipoResponse>, AppError> {
    let controller = EquipoController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_equipo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEquipoRequest>,
) -> Result<Json<ApiResponse<EquipoResponse>>, AppError> {
    exigir_capacidad(&user, Capacidad::GestionarEquipos)?;
    let controller = EquipoController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_equipo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    exigir_capacidad(&user, Capacidad::GestionarEquipos)?;
    let controller = EquipoController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Equipo eliminado exitosamente"
    })))
}
