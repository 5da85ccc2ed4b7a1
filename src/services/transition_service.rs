//! Servicio de transiciones de estado
//!
//! Todo cambio de estado de una orden pasa por `transicionar`: se valida
//! contra la tabla estática del modelo, se agrega exactamente una entrada de
//! historial y se aplican las cascadas sobre equipo y archivo de reparaciones.
//! Una cascada que no puede completarse revierte la transición entera.

use crate::models::equipo::EstadoOperativo;
use crate::models::orden_trabajo::{
    transicion_permitida, ClaseOrden, EntradaHistorial, EstadoOrden, OrdenTrabajo, TipoOrden,
};
use crate::utils::errors::{invalid_transition_error, AppError};
use chrono::{Months, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

pub struct TransitionService {
    pool: PgPool,
}

/// Próxima fecha de mantenimiento según el tipo de trabajo realizado:
/// preventivo cada 3 meses, correctivo revisa al mes.
pub fn fecha_proximo_mantenimiento(desde: NaiveDate, tipo: TipoOrden) -> NaiveDate {
    let meses = match tipo {
        TipoOrden::Preventivo => Months::new(3),
        TipoOrden::Correctivo => Months::new(1),
    };
    desde.checked_add_months(meses).unwrap_or(desde)
}

impl TransitionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Aplica una transición de estado con sus cascadas en una sola transacción.
    pub async fn transicionar(
        &self,
        orden_id: Uuid,
        nuevo_estado: EstadoOrden,
        usuario: String,
        comentario: Option<String>,
    ) -> Result<OrdenTrabajo, AppError> {
        let mut tx = self.pool.begin().await?;

        let orden = sqlx::query_as::<_, OrdenTrabajo>(
            "SELECT * FROM ordenes_trabajo WHERE id = $1 FOR UPDATE",
        )
        .bind(orden_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Orden no encontrada".to_string()))?;

        if !transicion_permitida(orden.clase, orden.estado, nuevo_estado) {
            return Err(invalid_transition_error(
                orden.estado.as_str(),
                nuevo_estado.as_str(),
            ));
        }

        let entrada = EntradaHistorial {
            estado: nuevo_estado,
            fecha: Utc::now(),
            usuario,
            comentario,
        };

        // historial || $3 agrega la entrada al final sin reescribir las previas
        let orden_actualizada = sqlx::query_as::<_, OrdenTrabajo>(
            r#"
            UPDATE ordenes_trabajo
            SET estado = $2, historial = historial || $3::jsonb
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(orden_id)
        .bind(nuevo_estado)
        .bind(Json(&entrada))
        .fetch_one(&mut *tx)
        .await?;

        match nuevo_estado {
            EstadoOrden::EnProgreso => {
                if let Some(equipo_id) = orden_actualizada.equipo_id {
                    let result = sqlx::query(
                        "UPDATE equipos SET estado_operativo = $2 WHERE id = $1",
                    )
                    .bind(equipo_id)
                    .bind(EstadoOperativo::EnMantenimiento)
                    .execute(&mut *tx)
                    .await?;

                    if result.rows_affected() == 0 {
                        tx.rollback().await?;
                        return Err(AppError::NotFound(
                            "Equipo asociado a la orden no encontrado".to_string(),
                        ));
                    }
                }
            }

            EstadoOrden::Completada => {
                self.aplicar_cascadas_completada(&mut tx, &orden_actualizada)
                    .await?;
            }

            EstadoOrden::Pendiente | EstadoOrden::Cancelada => {}
        }

        tx.commit().await?;

        tracing::info!(
            "📋 Orden {} pasó de '{}' a '{}'",
            orden_id,
            orden.estado.as_str(),
            nuevo_estado.as_str()
        );

        Ok(orden_actualizada)
    }

    /// Cascadas al completar: sincroniza el equipo y, para fallas, archiva
    /// una copia inmutable en arregladas.
    async fn aplicar_cascadas_completada(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        orden: &OrdenTrabajo,
    ) -> Result<(), AppError> {
        if let Some(equipo_id) = orden.equipo_id {
            let hoy = Utc::now().date_naive();
            let proximo = fecha_proximo_mantenimiento(hoy, orden.tipo);

            let result = sqlx::query(
                r#"
                UPDATE equipos
                SET kilometraje = $2,
                    fecha_ultimo_mantenimiento = $3,
                    estado_operativo = $4,
                    fecha_proximo_mantenimiento = $5
                WHERE id = $1
                "#,
            )
            .bind(equipo_id)
            .bind(orden.kilometraje)
            .bind(hoy)
            .bind(EstadoOperativo::Operativo)
            .bind(proximo)
            .execute(&mut **tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(AppError::NotFound(
                    "Equipo asociado a la orden no encontrado".to_string(),
                ));
            }
        }

        if orden.clase == ClaseOrden::Falla {
            sqlx::query(
                r#"
                INSERT INTO arregladas
                    (id, orden_original_id, equipo_id, equipo, descripcion,
                     mecanico, repuestos, fecha_reparacion)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(orden.id)
            .bind(orden.equipo_id)
            .bind(orden.equipo.clone())
            .bind(orden.descripcion.clone())
            .bind(orden.mecanico.clone())
            .bind(Json(orden.repuestos.0.clone()))
            .bind(Utc::now())
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fecha(anio: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(anio, mes, dia).unwrap()
    }

    #[test]
    fn test_preventivo_agenda_a_tres_meses() {
        assert_eq!(
            fecha_proximo_mantenimiento(fecha(2026, 3, 15), TipoOrden::Preventivo),
            fecha(2026, 6, 15)
        );
    }

    #[test]
    fn test_correctivo_agenda_a_un_mes() {
        assert_eq!(
            fecha_proximo_mantenimiento(fecha(2026, 3, 15), TipoOrden::Correctivo),
            fecha(2026, 4, 15)
        );
    }

    #[test]
    fn test_fin_de_mes_se_ajusta_al_ultimo_dia() {
        // 31 de enero + 1 mes cae en el último día de febrero
        assert_eq!(
            fecha_proximo_mantenimiento(fecha(2026, 1, 31), TipoOrden::Correctivo),
            fecha(2026, 2, 28)
        );
        assert_eq!(
            fecha_proximo_mantenimiento(fecha(2024, 1, 31), TipoOrden::Correctivo),
            fecha(2024, 2, 29)
        );
    }

    #[test]
    fn test_cruce_de_anio() {
        assert_eq!(
            fecha_proximo_mantenimiento(fecha(2026, 11, 10), TipoOrden::Preventivo),
            fecha(2027, 2, 10)
        );
    }
}
