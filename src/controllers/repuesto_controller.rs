use crate::dto::common_dto::ApiResponse;
use crate::dto::repuesto_dto::{CreateRepuestoRequest, RepuestoResponse, UpdateRepuestoRequest};
use crate::repositories::repuesto_repository::RepuestoRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct RepuestoController {
    repository: RepuestoRepository,
}

impl RepuestoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RepuestoRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateRepuestoRequest,
    ) -> Result<ApiResponse<RepuestoResponse>, AppError> {
        request.validate()?;

        // Verificar que el nombre no exista en el inventario
        if self.repository.nombre_exists(&request.nombre).await? {
            return Err(AppError::Conflict(
                "Ya existe un repuesto con ese nombre".to_string(),
            ));
        }

        let stock = request.stock_inicial();
        let repuesto = self
            .repository
            .create(
                request.nombre,
                stock,
                request.minimo.unwrap_or(0),
                request.categoria,
                request.ubicacion,
                request.proveedor,
                request.unidad,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            RepuestoResponse::from(repuesto),
            "Repuesto creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<RepuestoResponse, AppError> {
        let repuesto = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Repuesto no encontrado".to_string()))?;

        Ok(RepuestoResponse::from(repuesto))
    }

    pub async fn list(&self) -> Result<Vec<RepuestoResponse>, AppError> {
        let repuestos = self.repository.find_all().await?;
        Ok(repuestos.into_iter().map(RepuestoResponse::from).collect())
    }

    pub async fn list_bajo_stock(&self) -> Result<Vec<RepuestoResponse>, AppError> {
        let repuestos = self.repository.find_bajo_stock().await?;
        Ok(repuestos.into_iter().map(RepuestoResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateRepuestoRequest,
    ) -> Result<ApiResponse<RepuestoResponse>, AppError> {
        request.validate()?;

        let stock = request.stock_nuevo();
        let repuesto = self
            .repository
            .update(
                id,
                request.nombre,
                stock,
                request.minimo,
                request.categoria,
                request.ubicacion,
                request.proveedor,
                request.unidad,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            RepuestoResponse::from(repuesto),
            "Repuesto actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
