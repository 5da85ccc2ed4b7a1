//! DTOs de OrdenTrabajo

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::orden_trabajo::{
    ClaseOrden, EntradaHistorial, EstadoOrden, OrdenTrabajo, RepuestoConsumido, TipoOrden,
};

/// Request para crear una orden de trabajo (mantenimiento o reporte de falla)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrdenRequest {
    pub clase: ClaseOrden,

    pub equipo_id: Option<Uuid>,

    pub tipo: TipoOrden,

    #[validate(length(min = 5, max = 2000))]
    pub descripcion: String,

    #[validate(range(min = 0))]
    pub kilometraje: i32,

    #[validate(length(min = 2, max = 100))]
    pub mecanico: Option<String>,
}

/// Request para consumir un repuesto en una orden.
/// `nombre` es el campo de display que enviaban las pantallas legacy; si
/// falta, se usa el nombre vivo del inventario.
#[derive(Debug, Deserialize, Validate)]
pub struct ConsumirRepuestoRequest {
    pub repuesto_id: Uuid,

    pub nombre: Option<String>,

    #[validate(range(min = 1))]
    pub cantidad: i32,
}

/// Request para cambiar el estado de una orden
#[derive(Debug, Deserialize, Validate)]
pub struct CambiarEstadoRequest {
    pub estado: EstadoOrden,

    #[validate(length(max = 500))]
    pub comentario: Option<String>,
}

/// Filtros para búsqueda de órdenes
#[derive(Debug, Deserialize)]
pub struct OrdenFilters {
    pub clase: Option<ClaseOrden>,
    pub estado: Option<EstadoOrden>,
    pub equipo_id: Option<Uuid>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response de orden para la API
#[derive(Debug, Serialize)]
pub struct OrdenResponse {
    pub id: Uuid,
    pub clase: ClaseOrden,
    pub equipo_id: Option<Uuid>,
    pub equipo: Option<String>,
    pub tipo: TipoOrden,
    pub descripcion: String,
    pub kilometraje: i32,
    pub mecanico: Option<String>,
    pub reportado_por: String,
    pub estado: EstadoOrden,
    pub repuestos: Vec<RepuestoConsumido>,
    pub historial: Vec<EntradaHistorial>,
    pub fecha: DateTime<Utc>,
}

impl From<OrdenTrabajo> for OrdenResponse {
    fn from(orden: OrdenTrabajo) -> Self {
        Self {
            id: orden.id,
            clase: orden.clase,
            equipo_id: orden.equipo_id,
            equipo: orden.equipo,
            tipo: orden.tipo,
            descripcion: orden.descripcion,
            kilometraje: orden.kilometraje,
            mecanico: orden.mecanico,
            reportado_por: orden.reportado_por,
            estado: orden.estado,
            repuestos: orden.repuestos.0,
            historial: orden.historial.0,
            fecha: orden.fecha,
        }
    }
}
