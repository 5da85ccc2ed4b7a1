//! Repositorio del archivo de reparaciones (solo lectura desde la API;
//! los registros se insertan al completar una orden de falla)

use crate::models::arreglada::Arreglada;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ArregladaRepository {
    pool: PgPool,
}

impl ArregladaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Arreglada>, AppError> {
        let arregladas = sqlx::query_as::<_, Arreglada>(
            "SELECT * FROM arregladas ORDER BY fecha_reparacion DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(arregladas)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Arreglada>, AppError> {
        let arreglada = sqlx::query_as::<_, Arreglada>("SELECT * FROM arregladas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(arreglada)
    }

    pub async fn find_by_equipo(&self, equipo_id: Uuid) -> Result<Vec<Arreglada>, AppError> {
        let arregladas = sqlx::query_as::<_, Arreglada>(
            "SELECT * FROM arregladas WHERE equipo_id = $1 ORDER BY fecha_reparacion DESC",
        )
        .bind(equipo_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(arregladas)
    }
}
