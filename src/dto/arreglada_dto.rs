//! DTOs de Arreglada (archivo de reparaciones)

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::arreglada::Arreglada;
use crate::models::orden_trabajo::RepuestoConsumido;

/// Response de arreglada para la API (solo lectura)
#[derive(Debug, Serialize)]
pub struct ArregladaResponse {
    pub id: Uuid,
    pub orden_original_id: Uuid,
    pub equipo_id: Option<Uuid>,
    pub equipo: Option<String>,
    pub descripcion: String,
    pub mecanico: Option<String>,
    pub repuestos: Vec<RepuestoConsumido>,
    pub fecha_reparacion: DateTime<Utc>,
}

impl From<Arreglada> for ArregladaResponse {
    fn from(arreglada: Arreglada) -> Self {
        Self {
            id: arreglada.id,
            orden_original_id: arreglada.orden_original_id,
            equipo_id: arreglada.equipo_id,
            equipo: arreglada.equipo,
            descripcion: arreglada.descripcion,
            mecanico: arreglada.mecanico,
            repuestos: arreglada.repuestos.0,
            fecha_reparacion: arreglada.fecha_reparacion,
        }
    }
}
