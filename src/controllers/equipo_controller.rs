use crate::dto::common_dto::ApiResponse;
use crate::dto::equipo_dto::{CreateEquipoRequest, EquipoResponse, UpdateEquipoRequest};
use crate::repositories::equipo_repository::EquipoRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct EquipoController {
    repository: EquipoRepository,
}

impl EquipoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: EquipoRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateEquipoRequest,
    ) -> Result<ApiResponse<EquipoResponse>, AppError> {
        request.validate()?;

        // Verificar que el número no esté registrado
        if self.repository.numero_exists(&request.numero).await? {
            return Err(AppError::Conflict(
                "Ya existe un equipo con ese número".to_string(),
            ));
        }

        let equipo = self
            .repository
            .create(request.numero, request.modelo, request.kilometraje)
            .await?;

        Ok(ApiResponse::success_with_message(
            EquipoResponse::from(equipo),
            "Equipo registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<EquipoResponse, AppError> {
        let equipo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Equipo no encontrado".to_string()))?;

        Ok(EquipoResponse::from(equipo))
    }

    pub async fn list(&self) -> Result<Vec<EquipoResponse>, AppError> {
        let equipos = self.repository.find_all().await?;
        Ok(equipos.into_iter().map(EquipoResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateEquipoRequest,
    ) -> Result<ApiResponse<EquipoResponse>, AppError> {
        request.validate()?;

        let equipo = self
            .repository
            .update(
                id,
                request.modelo,
                request.kilometraje,
                request.estado_operativo,
                request.estado_disponibilidad,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            EquipoResponse::from(equipo),
            "Equipo actualizado exitosamente".to_string(),
        ))
    }

    /// Elimina el equipo junto con sus órdenes de trabajo
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
