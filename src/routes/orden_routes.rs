use crate::controllers::orden_controller::OrdenController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::orden_dto::{
    CambiarEstadoRequest, ConsumirRepuestoRequest, CreateOrdenRequest, OrdenFilters, OrdenResponse,
};
use crate::middleware::auth::{auth_middleware, exigir_capacidad, AuthenticatedUser};
use crate::models::orden_trabajo::{ClaseOrden, EntradaHistorial, EstadoOrden};
use crate::models::user::Capacidad;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

pub fn create_orden_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_orden))
        .route("/", get(list_ordenes))
        .route("/:id", get(get_orden))
        .route("/:id/historial", get(get_historial))
        .route("/:id/repuestos", post(consumir_repuesto))
        .route("/:id/repuestos/:repuesto_id", delete(devolver_repuesto))
        .route("/:id/estado", put(cambiar_estado))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn create_orden(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateOrdenRequest>,
) -> Result<Json<ApiResponse<OrdenResponse>>, AppError> {
    // Los choferes solo pueden abrir reportes de falla
    let capacidad = match request.clase {
        ClaseOrden::Falla => Capacidad::ReportarFalla,
        ClaseOrden::Mantenimiento => Capacidad::CambiarEstado,
    };
    exigir_capacidad(&user, capacidad)?;

    let controller = OrdenController::new(state.pool.clone());
    let response = controller.create(request, user.nombre).await?;
    Ok(Json(response))
}

async fn list_ordenes(
    State(state): State<AppState>,
    Query(filters): Query<OrdenFilters>,
) -> Result<Json<Vec<OrdenResponse>>, AppError> {
    let controller = OrdenController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_orden(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrdenResponse>, AppError> {
    let controller = OrdenController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn get_historial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<EntradaHistorial>>, AppError> {
    let controller = OrdenController::new(state.pool.clone());
    let response = controller.get_historial(id).await?;
    Ok(Json(response))
}

async fn consumir_repuesto(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<ConsumirRepuestoRequest>,
) -> Result<Json<ApiResponse<OrdenResponse>>, AppError> {
    exigir_capacidad(&user, Capacidad::ConsumirRepuestos)?;
    let controller = OrdenController::new(state.pool.clone());
    let response = controller.consumir_repuesto(id, request).await?;
    Ok(Json(response))
}

async fn devolver_repuesto(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((id, repuesto_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<OrdenResponse>>, AppError> {
    exigir_capacidad(&user, Capacidad::ConsumirRepuestos)?;
    let controller = OrdenController::new(state.pool.clone());
    let response = controller.devolver_repuesto(id, repuesto_id).await?;
    Ok(Json(response))
}

async fn cambiar_estado(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<CambiarEstadoRequest>,
) -> Result<Json<ApiResponse<OrdenResponse>>, AppError> {
    // Cancelar un reporte exige una capacidad propia
    let capacidad = match request.estado {
        EstadoOrden::Cancelada => Capacidad::CancelarFalla,
        _ => Capacidad::CambiarEstado,
    };
    exigir_capacidad(&user, capacidad)?;

    let controller = OrdenController::new(state.pool.clone());
    let response = controller.cambiar_estado(id, request, user.nombre).await?;
    Ok(Json(response))
}
