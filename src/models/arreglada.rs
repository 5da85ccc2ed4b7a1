//! Modelo de Arreglada
//!
//! Copia archivada e inmutable que se crea cuando un reporte de falla llega a
//! estado completada. Nunca se actualiza después de su creación; enlaza al
//! reporte original vía `orden_original_id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::orden_trabajo::RepuestoConsumido;

/// Arreglada - mapea exactamente a la tabla arregladas
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Arreglada {
    pub id: Uuid,
    pub orden_original_id: Uuid,
    pub equipo_id: Option<Uuid>,
    pub equipo: Option<String>,
    pub descripcion: String,
    pub mecanico: Option<String>,
    pub repuestos: Json<Vec<RepuestoConsumido>>,
    pub fecha_reparacion: DateTime<Utc>,
}
