//! Servicio de consumo de repuestos
//!
//! Todo ajuste de stock pasa por este servicio. La lectura-modificación-
//! escritura completa corre dentro de UNA transacción con SELECT ... FOR
//! UPDATE sobre la orden y el repuesto: dos mecánicos consumiendo el mismo
//! repuesto se serializan en la base de datos.

use crate::models::orden_trabajo::{OrdenTrabajo, RepuestoConsumido};
use crate::models::repuesto::Repuesto;
use crate::utils::errors::{insufficient_stock_error, AppError};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

pub struct StockService {
    pool: PgPool,
}

/// Fusiona un consumo en la lista de la orden: si el repuesto ya figura se
/// incrementa su cantidad, si no se agrega al final (el orden de inserción
/// es el orden de consumo).
pub fn fusionar_consumo(
    repuestos: &mut Vec<RepuestoConsumido>,
    repuesto_id: Uuid,
    nombre: String,
    cantidad: i32,
) {
    match repuestos.iter_mut().find(|r| r.id == repuesto_id) {
        Some(existente) => existente.cantidad += cantidad,
        None => repuestos.push(RepuestoConsumido {
            id: repuesto_id,
            nombre,
            cantidad,
        }),
    }
}

/// Retira la entrada de un repuesto de la lista y devuelve la cantidad que
/// tenía registrada, o None si no figuraba.
pub fn retirar_consumo(repuestos: &mut Vec<RepuestoConsumido>, repuesto_id: Uuid) -> Option<i32> {
    let posicion = repuestos.iter().position(|r| r.id == repuesto_id)?;
    Some(repuestos.remove(posicion).cantidad)
}

impl StockService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Consume `cantidad` unidades de un repuesto contra una orden de trabajo.
    ///
    /// Descuenta el stock y registra el consumo en la orden de forma atómica:
    /// si cualquier paso falla, ninguna de las dos entidades queda modificada.
    pub async fn consumir_repuesto(
        &self,
        orden_id: Uuid,
        repuesto_id: Uuid,
        nombre: Option<String>,
        cantidad: i32,
    ) -> Result<OrdenTrabajo, AppError> {
        if cantidad < 1 {
            return Err(AppError::BadRequest(
                "La cantidad a consumir debe ser al menos 1".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let orden = sqlx::query_as::<_, OrdenTrabajo>(
            "SELECT * FROM ordenes_trabajo WHERE id = $1 FOR UPDATE",
        )
        .bind(orden_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Orden no encontrada".to_string()))?;

        if orden.estado.es_terminal() {
            return Err(AppError::InvalidTransition(format!(
                "No se pueden consumir repuestos en una orden en estado '{}'",
                orden.estado.as_str()
            )));
        }

        let repuesto =
            sqlx::query_as::<_, Repuesto>("SELECT * FROM repuestos WHERE id = $1 FOR UPDATE")
                .bind(repuesto_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound("Repuesto no encontrado".to_string()))?;

        let disponible = repuesto.stock;
        if cantidad > disponible {
            return Err(insufficient_stock_error(
                &repuesto.nombre,
                disponible,
                cantidad,
            ));
        }

        let mut lista = orden.repuestos.0.clone();
        let nombre_visible = nombre.unwrap_or_else(|| repuesto.nombre.clone());
        fusionar_consumo(&mut lista, repuesto_id, nombre_visible, cantidad);

        let orden_actualizada = sqlx::query_as::<_, OrdenTrabajo>(
            "UPDATE ordenes_trabajo SET repuestos = $2 WHERE id = $1 RETURNING *",
        )
        .bind(orden_id)
        .bind(Json(lista))
        .fetch_one(&mut *tx)
        .await?;

        // No puede quedar negativo: la verificación de disponibilidad ya pasó
        // bajo el mismo lock de fila
        sqlx::query("UPDATE repuestos SET stock = stock - $2 WHERE id = $1")
            .bind(repuesto_id)
            .bind(cantidad)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            "🔧 Consumo registrado: orden {} repuesto {} x{}",
            orden_id,
            repuesto_id,
            cantidad
        );

        Ok(orden_actualizada)
    }

    /// Devuelve al inventario el consumo completo de un repuesto registrado
    /// en una orden (operación inversa del consumo, misma disciplina
    /// transaccional).
    pub async fn devolver_repuesto(
        &self,
        orden_id: Uuid,
        repuesto_id: Uuid,
    ) -> Result<OrdenTrabajo, AppError> {
        let mut tx = self.pool.begin().await?;

        let orden = sqlx::query_as::<_, OrdenTrabajo>(
            "SELECT * FROM ordenes_trabajo WHERE id = $1 FOR UPDATE",
        )
        .bind(orden_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Orden no encontrada".to_string()))?;

        if orden.estado.es_terminal() {
            return Err(AppError::InvalidTransition(format!(
                "No se pueden devolver repuestos en una orden en estado '{}'",
                orden.estado.as_str()
            )));
        }

        let mut lista = orden.repuestos.0.clone();
        let cantidad = retirar_consumo(&mut lista, repuesto_id).ok_or_else(|| {
            AppError::NotFound("El repuesto no figura en los consumos de la orden".to_string())
        })?;

        let orden_actualizada = sqlx::query_as::<_, OrdenTrabajo>(
            "UPDATE ordenes_trabajo SET repuestos = $2 WHERE id = $1 RETURNING *",
        )
        .bind(orden_id)
        .bind(Json(lista))
        .fetch_one(&mut *tx)
        .await?;

        // Si el repuesto fue eliminado del catálogo no hay fila que restockear;
        // el registro de consumo se retira igual
        let repuesto =
            sqlx::query_as::<_, Repuesto>("SELECT * FROM repuestos WHERE id = $1 FOR UPDATE")
                .bind(repuesto_id)
                .fetch_optional(&mut *tx)
                .await?;

        if repuesto.is_some() {
            sqlx::query("UPDATE repuestos SET stock = stock + $2 WHERE id = $1")
                .bind(repuesto_id)
                .bind(cantidad)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        tracing::info!(
            "↩️ Devolución registrada: orden {} repuesto {} x{}",
            orden_id,
            repuesto_id,
            cantidad
        );

        Ok(orden_actualizada)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entrada(id: Uuid, nombre: &str, cantidad: i32) -> RepuestoConsumido {
        RepuestoConsumido {
            id,
            nombre: nombre.to_string(),
            cantidad,
        }
    }

    #[test]
    fn test_fusionar_agrega_al_final_si_no_existe() {
        let primero = Uuid::new_v4();
        let segundo = Uuid::new_v4();
        let mut lista = vec![entrada(primero, "Filtro de aceite", 2)];

        fusionar_consumo(&mut lista, segundo, "Bujía".to_string(), 4);

        assert_eq!(lista.len(), 2);
        assert_eq!(lista[0].id, primero);
        assert_eq!(lista[1].id, segundo);
        assert_eq!(lista[1].cantidad, 4);
    }

    #[test]
    fn test_fusionar_incrementa_cantidad_existente() {
        let id = Uuid::new_v4();
        let mut lista = vec![entrada(id, "Filtro de aceite", 2)];

        fusionar_consumo(&mut lista, id, "Filtro de aceite".to_string(), 3);

        assert_eq!(lista.len(), 1);
        assert_eq!(lista[0].cantidad, 5);
    }

    #[test]
    fn test_fusionar_preserva_orden_de_insercion() {
        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        let mut lista = Vec::new();

        for (i, id) in ids.iter().enumerate() {
            fusionar_consumo(&mut lista, *id, format!("Repuesto {}", i), 1);
        }
        // Repetir el del medio no lo mueve de lugar
        fusionar_consumo(&mut lista, ids[1], "Repuesto 1".to_string(), 1);

        let orden: Vec<Uuid> = lista.iter().map(|r| r.id).collect();
        assert_eq!(orden, ids);
        assert_eq!(lista[1].cantidad, 2);
    }

    #[test]
    fn test_retirar_devuelve_cantidad_registrada() {
        let id = Uuid::new_v4();
        let otro = Uuid::new_v4();
        let mut lista = vec![entrada(id, "Correa", 3), entrada(otro, "Bujía", 1)];

        assert_eq!(retirar_consumo(&mut lista, id), Some(3));
        assert_eq!(lista.len(), 1);
        assert_eq!(lista[0].id, otro);
    }

    #[test]
    fn test_retirar_inexistente_devuelve_none() {
        let mut lista = vec![entrada(Uuid::new_v4(), "Correa", 3)];
        assert_eq!(retirar_consumo(&mut lista, Uuid::new_v4()), None);
        assert_eq!(lista.len(), 1);
    }
}
