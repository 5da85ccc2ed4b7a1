use crate::dto::arreglada_dto::ArregladaResponse;
use crate::repositories::arreglada_repository::ArregladaRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ArregladaController {
    repository: ArregladaRepository,
}

impl ArregladaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ArregladaRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<ArregladaResponse>, AppError> {
        let arregladas = self.repository.find_all().await?;
        Ok(arregladas
            .into_iter()
            .map(ArregladaResponse::from)
            .collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ArregladaResponse, AppError> {
        let arreglada = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registro de reparación no encontrado".to_string()))?;

        Ok(ArregladaResponse::from(arreglada))
    }
}
