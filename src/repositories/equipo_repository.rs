//! Repositorio de equipos de la flota

use crate::models::equipo::{Equipo, EstadoDisponibilidad, EstadoOperativo};
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct EquipoRepository {
    pool: PgPool,
}

impl EquipoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        numero: String,
        modelo: Option<String>,
        kilometraje: Option<i32>,
    ) -> Result<Equipo, AppError> {
        let equipo = sqlx::query_as::<_, Equipo>(
            r#"
            INSERT INTO equipos
                (id, numero, modelo, kilometraje, estado_operativo, estado_disponibilidad, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(numero)
        .bind(modelo)
        .bind(kilometraje.unwrap_or(0))
        .bind(EstadoOperativo::Operativo)
        .bind(EstadoDisponibilidad::Disponible)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(equipo)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Equipo>, AppError> {
        let equipo = sqlx::query_as::<_, Equipo>("SELECT * FROM equipos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(equipo)
    }

    pub async fn find_all(&self) -> Result<Vec<Equipo>, AppError> {
        let equipos = sqlx::query_as::<_, Equipo>("SELECT * FROM equipos ORDER BY numero")
            .fetch_all(&self.pool)
            .await?;

        Ok(equipos)
    }

    pub async fn numero_exists(&self, numero: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM equipos WHERE numero = $1)")
                .bind(numero)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        modelo: Option<String>,
        kilometraje: Option<i32>,
        estado_operativo: Option<EstadoOperativo>,
        estado_disponibilidad: Option<EstadoDisponibilidad>,
    ) -> Result<Equipo, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Equipo no encontrado".to_string()))?;

        let equipo = sqlx::query_as::<_, Equipo>(
            r#"
            UPDATE equipos
            SET modelo = $2, kilometraje = $3, estado_operativo = $4, estado_disponibilidad = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(modelo.or(current.modelo))
        .bind(kilometraje.unwrap_or(current.kilometraje))
        .bind(estado_operativo.unwrap_or(current.estado_operativo))
        .bind(estado_disponibilidad.unwrap_or(current.estado_disponibilidad))
        .fetch_one(&self.pool)
        .await?;

        Ok(equipo)
    }

    /// Elimina el equipo y sus órdenes asociadas en una sola transacción
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM ordenes_trabajo WHERE equipo_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM equipos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::NotFound("Equipo no encontrado".to_string()));
        }

        tx.commit().await?;
        Ok(())
    }
}
