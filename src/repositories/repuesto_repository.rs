use crate::models::repuesto::Repuesto;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct RepuestoRepository {
    pool: PgPool,
}

impl RepuestoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nombre: String,
        stock: i32,
        minimo: i32,
        categoria: Option<String>,
        ubicacion: Option<String>,
        proveedor: Option<String>,
        unidad: Option<String>,
    ) -> Result<Repuesto, AppError> {
        let repuesto = sqlx::query_as::<_, Repuesto>(
            r#"
            INSERT INTO repuestos (id, nombre, stock, minimo, categoria, ubicacion, proveedor, unidad, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nombre)
        .bind(stock)
        .bind(minimo)
        .bind(categoria)
        .bind(ubicacion)
        .bind(proveedor)
        .bind(unidad)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(repuesto)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Repuesto>, AppError> {
        let repuesto = sqlx::query_as::<_, Repuesto>("SELECT * FROM repuestos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(repuesto)
    }

    pub async fn find_all(&self) -> Result<Vec<Repuesto>, AppError> {
        let repuestos = sqlx::query_as::<_, Repuesto>("SELECT * FROM repuestos ORDER BY nombre")
            .fetch_all(&self.pool)
            .await?;

        Ok(repuestos)
    }

    /// Repuestos cuya existencia no supera el mínimo configurado
    pub async fn find_bajo_stock(&self) -> Result<Vec<Repuesto>, AppError> {
        let repuestos = sqlx::query_as::<_, Repuesto>(
            "SELECT * FROM repuestos WHERE stock <= minimo ORDER BY nombre",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(repuestos)
    }

    pub async fn nombre_exists(&self, nombre: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM repuestos WHERE nombre = $1)")
                .bind(nombre)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nombre: Option<String>,
        stock: Option<i32>,
        minimo: Option<i32>,
        categoria: Option<String>,
        ubicacion: Option<String>,
        proveedor: Option<String>,
        unidad: Option<String>,
    ) -> Result<Repuesto, AppError> {
        // Obtener repuesto actual
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Repuesto no encontrado".to_string()))?;

        let repuesto = sqlx::query_as::<_, Repuesto>(
            r#"
            UPDATE repuestos
            SET nombre = $2, stock = $3, minimo = $4, categoria = $5, ubicacion = $6, proveedor = $7, unidad = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre.unwrap_or(current.nombre))
        .bind(stock.unwrap_or(current.stock))
        .bind(minimo.unwrap_or(current.minimo))
        .bind(categoria.or(current.categoria))
        .bind(ubicacion.or(current.ubicacion))
        .bind(proveedor.or(current.proveedor))
        .bind(unidad.or(current.unidad))
        .fetch_one(&self.pool)
        .await?;

        Ok(repuesto)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM repuestos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Repuesto no encontrado".to_string()));
        }

        Ok(())
    }
}
