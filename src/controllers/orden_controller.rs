use crate::dto::common_dto::ApiResponse;
use crate::dto::orden_dto::{
    CambiarEstadoRequest, ConsumirRepuestoRequest, CreateOrdenRequest, OrdenFilters, OrdenResponse,
};
use crate::models::orden_trabajo::EntradaHistorial;
use crate::repositories::equipo_repository::EquipoRepository;
use crate::repositories::orden_repository::OrdenRepository;
use crate::services::{StockService, TransitionService};
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct OrdenController {
    repository: OrdenRepository,
    equipo_repository: EquipoRepository,
    stock_service: StockService,
    transition_service: TransitionService,
}

impl OrdenController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OrdenRepository::new(pool.clone()),
            equipo_repository: EquipoRepository::new(pool.clone()),
            stock_service: StockService::new(pool.clone()),
            transition_service: TransitionService::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateOrdenRequest,
        reportado_por: String,
    ) -> Result<ApiResponse<OrdenResponse>, AppError> {
        request.validate()?;

        // Si la orden referencia un equipo, denormalizamos su número para
        // que el listado no tenga que hacer join
        let equipo_nombre = match request.equipo_id {
            Some(equipo_id) => {
                let equipo = self
                    .equipo_repository
                    .find_by_id(equipo_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Equipo no encontrado".to_string()))?;
                Some(equipo.numero)
            }
            None => None,
        };

        let orden = self
            .repository
            .create(
                request.clase,
                request.equipo_id,
                equipo_nombre,
                request.tipo,
                request.descripcion,
                request.kilometraje,
                request.mecanico,
                reportado_por,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            OrdenResponse::from(orden),
            "Orden creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<OrdenResponse, AppError> {
        let orden = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Orden no encontrada".to_string()))?;

        Ok(OrdenResponse::from(orden))
    }

    pub async fn list(&self, filters: OrdenFilters) -> Result<Vec<OrdenResponse>, AppError> {
        let ordenes = self.repository.find_filtered(&filters).await?;
        Ok(ordenes.into_iter().map(OrdenResponse::from).collect())
    }

    pub async fn get_historial(&self, id: Uuid) -> Result<Vec<EntradaHistorial>, AppError> {
        let orden = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Orden no encontrada".to_string()))?;

        Ok(orden.historial.0)
    }

    /// Consumo de repuesto contra la orden (descuento de stock atómico)
    pub async fn consumir_repuesto(
        &self,
        orden_id: Uuid,
        request: ConsumirRepuestoRequest,
    ) -> Result<ApiResponse<OrdenResponse>, AppError> {
        request.validate()?;

        let orden = self
            .stock_service
            .consumir_repuesto(orden_id, request.repuesto_id, request.nombre, request.cantidad)
            .await?;

        Ok(ApiResponse::success_with_message(
            OrdenResponse::from(orden),
            "Repuesto consumido exitosamente".to_string(),
        ))
    }

    /// Devolución de un consumo registrado (restock atómico)
    pub async fn devolver_repuesto(
        &self,
        orden_id: Uuid,
        repuesto_id: Uuid,
    ) -> Result<ApiResponse<OrdenResponse>, AppError> {
        let orden = self
            .stock_service
            .devolver_repuesto(orden_id, repuesto_id)
            .await?;

        Ok(ApiResponse::success_with_message(
            OrdenResponse::from(orden),
            "Repuesto devuelto exitosamente".to_string(),
        ))
    }

    /// Cambio de estado a través de la tabla de transiciones
    pub async fn cambiar_estado(
        &self,
        orden_id: Uuid,
        request: CambiarEstadoRequest,
        usuario: String,
    ) -> Result<ApiResponse<OrdenResponse>, AppError> {
        request.validate()?;

        let orden = self
            .transition_service
            .transicionar(orden_id, request.estado, usuario, request.comentario)
            .await?;

        Ok(ApiResponse::success_with_message(
            OrdenResponse::from(orden),
            "Estado actualizado exitosamente".to_string(),
        ))
    }
}
