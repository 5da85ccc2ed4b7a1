//! Modelo de OrdenTrabajo
//!
//! Una orden de trabajo cubre tanto mantenimientos programados como reportes
//! de falla (discriminados por `clase`). Todas las transiciones de estado del
//! sistema pasan por la tabla estática de este módulo: cualquier par
//! (clase, desde) -> hacia que no figure aquí se rechaza con InvalidTransition.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, Type};
use std::collections::HashMap;
use uuid::Uuid;

/// Clase de orden - mapea al ENUM clase_orden
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "clase_orden", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ClaseOrden {
    Mantenimiento,
    Falla,
}

/// Tipo de mantenimiento - mapea al ENUM tipo_orden
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "tipo_orden", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TipoOrden {
    Preventivo,
    Correctivo,
}

/// Estado de la orden - mapea al ENUM estado_orden
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "estado_orden", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EstadoOrden {
    Pendiente,
    EnProgreso,
    Completada,
    Cancelada,
}

impl EstadoOrden {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoOrden::Pendiente => "pendiente",
            EstadoOrden::EnProgreso => "en_progreso",
            EstadoOrden::Completada => "completada",
            EstadoOrden::Cancelada => "cancelada",
        }
    }

    /// Estados terminales: no admiten consumo de repuestos
    pub fn es_terminal(&self) -> bool {
        matches!(self, EstadoOrden::Completada | EstadoOrden::Cancelada)
    }
}

/// Entrada del registro de consumo de repuestos de una orden.
/// Se persiste como JSONB `[{id, nombre, cantidad}]`; el orden de inserción
/// es el orden de consumo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepuestoConsumido {
    pub id: Uuid,
    pub nombre: String,
    pub cantidad: i32,
}

/// Entrada del historial de estados. El historial es append-only: nunca se
/// reescriben ni eliminan entradas previas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntradaHistorial {
    pub estado: EstadoOrden,
    pub fecha: DateTime<Utc>,
    pub usuario: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comentario: Option<String>,
}

/// OrdenTrabajo - mapea exactamente a la tabla ordenes_trabajo
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrdenTrabajo {
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
    pub repuestos: Json<Vec<RepuestoConsumido>>,
    pub historial: Json<Vec<EntradaHistorial>>,
    pub fecha: DateTime<Utc>,
}

lazy_static! {
    /// Tabla estática de transiciones: (clase, desde) -> destinos permitidos.
    /// Reabrir (completada -> pendiente) y cancelar existen solo para fallas.
    static ref TRANSICIONES: HashMap<(ClaseOrden, EstadoOrden), Vec<EstadoOrden>> = {
        use ClaseOrden::*;
        use EstadoOrden::*;

        let mut tabla = HashMap::new();
        tabla.insert((Mantenimiento, Pendiente), vec![EnProgreso]);
        tabla.insert((Mantenimiento, EnProgreso), vec![Completada]);
        tabla.insert((Mantenimiento, Completada), vec![]);
        tabla.insert((Mantenimiento, Cancelada), vec![]);
        tabla.insert((Falla, Pendiente), vec![EnProgreso, Cancelada]);
        tabla.insert((Falla, EnProgreso), vec![Completada, Cancelada]);
        tabla.insert((Falla, Completada), vec![Pendiente]);
        tabla.insert((Falla, Cancelada), vec![]);
        tabla
    };
}

/// Destinos permitidos desde un estado dado
pub fn destinos_permitidos(clase: ClaseOrden, desde: EstadoOrden) -> &'static [EstadoOrden] {
    TRANSICIONES
        .get(&(clase, desde))
        .map(|destinos| destinos.as_slice())
        .unwrap_or(&[])
}

/// Verificar si una transición figura en la tabla
pub fn transicion_permitida(clase: ClaseOrden, desde: EstadoOrden, hacia: EstadoOrden) -> bool {
    destinos_permitidos(clase, desde).contains(&hacia)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ClaseOrden::*;
    use EstadoOrden::*;

    #[test]
    fn test_flujo_normal_permitido() {
        for clase in [Mantenimiento, Falla] {
            assert!(transicion_permitida(clase, Pendiente, EnProgreso));
            assert!(transicion_permitida(clase, EnProgreso, Completada));
        }
    }

    #[test]
    fn test_reabrir_solo_fallas() {
        assert!(transicion_permitida(Falla, Completada, Pendiente));
        assert!(!transicion_permitida(Mantenimiento, Completada, Pendiente));
    }

    #[test]
    fn test_cancelar_solo_fallas() {
        assert!(transicion_permitida(Falla, Pendiente, Cancelada));
        assert!(transicion_permitida(Falla, EnProgreso, Cancelada));
        assert!(!transicion_permitida(Mantenimiento, Pendiente, Cancelada));
        assert!(!transicion_permitida(Mantenimiento, EnProgreso, Cancelada));
    }

    #[test]
    fn test_transiciones_ilegales_rechazadas() {
        // completada -> en_progreso era el hueco clásico del sistema anterior
        assert!(!transicion_permitida(Falla, Completada, EnProgreso));
        assert!(!transicion_permitida(Mantenimiento, Completada, EnProgreso));
        assert!(!transicion_permitida(Falla, Pendiente, Completada));
        assert!(!transicion_permitida(Mantenimiento, Pendiente, Completada));
    }

    #[test]
    fn test_cancelada_es_terminal_absoluto() {
        for clase in [Mantenimiento, Falla] {
            for hacia in [Pendiente, EnProgreso, Completada] {
                assert!(!transicion_permitida(clase, Cancelada, hacia));
            }
        }
    }

    #[test]
    fn test_estados_terminales() {
        assert!(Completada.es_terminal());
        assert!(Cancelada.es_terminal());
        assert!(!Pendiente.es_terminal());
        assert!(!EnProgreso.es_terminal());
    }

    #[test]
    fn test_ninguna_transicion_al_mismo_estado() {
        for clase in [Mantenimiento, Falla] {
            for estado in [Pendiente, EnProgreso, Completada, Cancelada] {
                assert!(!transicion_permitida(clase, estado, estado));
            }
        }
    }
}
