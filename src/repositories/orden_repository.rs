//! Repositorio de órdenes de trabajo (mantenimiento y fallas)

use crate::dto::orden_dto::OrdenFilters;
use crate::models::orden_trabajo::{
    ClaseOrden, EntradaHistorial, EstadoOrden, OrdenTrabajo, RepuestoConsumido, TipoOrden,
};
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

pub struct OrdenRepository {
    pool: PgPool,
}

impl OrdenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crea una orden en estado pendiente con su primera entrada de historial
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        clase: ClaseOrden,
        equipo_id: Option<Uuid>,
        equipo: Option<String>,
        tipo: TipoOrden,
        descripcion: String,
        kilometraje: i32,
        mecanico: Option<String>,
        reportado_por: String,
    ) -> Result<OrdenTrabajo, AppError> {
        let ahora = Utc::now();
        let historial_inicial = vec![EntradaHistorial {
            estado: EstadoOrden::Pendiente,
            fecha: ahora,
            usuario: reportado_por.clone(),
            comentario: None,
        }];

        let orden = sqlx::query_as::<_, OrdenTrabajo>(
            r#"
            INSERT INTO ordenes_trabajo
                (id, clase, equipo_id, equipo, tipo, descripcion, kilometraje,
                 mecanico, reportado_por, estado, repuestos, historial, fecha)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(clase)
        .bind(equipo_id)
        .bind(equipo)
        .bind(tipo)
        .bind(descripcion)
        .bind(kilometraje)
        .bind(mecanico)
        .bind(reportado_por)
        .bind(EstadoOrden::Pendiente)
        .bind(Json(Vec::<RepuestoConsumido>::new()))
        .bind(Json(historial_inicial))
        .bind(ahora)
        .fetch_one(&self.pool)
        .await?;

        Ok(orden)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<OrdenTrabajo>, AppError> {
        let orden = sqlx::query_as::<_, OrdenTrabajo>("SELECT * FROM ordenes_trabajo WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(orden)
    }

    /// Listado con filtros opcionales por clase, estado y equipo
    pub async fn find_filtered(&self, filters: &OrdenFilters) -> Result<Vec<OrdenTrabajo>, AppError> {
        let limit = filters.limit.unwrap_or(100).clamp(1, 500);
        let offset = filters.offset.unwrap_or(0).max(0);

        let ordenes = sqlx::query_as::<_, OrdenTrabajo>(
            r#"
            SELECT * FROM ordenes_trabajo
            WHERE ($1::clase_orden IS NULL OR clase = $1)
              AND ($2::estado_orden IS NULL OR estado = $2)
              AND ($3::uuid IS NULL OR equipo_id = $3)
            ORDER BY fecha DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(filters.clase)
        .bind(filters.estado)
        .bind(filters.equipo_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(ordenes)
    }

    pub async fn find_by_equipo(&self, equipo_id: Uuid) -> Result<Vec<OrdenTrabajo>, AppError> {
        let ordenes = sqlx::query_as::<_, OrdenTrabajo>(
            "SELECT * FROM ordenes_trabajo WHERE equipo_id = $1 ORDER BY fecha DESC",
        )
        .bind(equipo_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ordenes)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM ordenes_trabajo WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Orden no encontrada".to_string()));
        }

        Ok(())
    }
}
