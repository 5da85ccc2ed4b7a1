//! Modelo de Equipo
//!
//! Este módulo contiene el struct Equipo y sus enums de estado. El equipo se
//! muta como efecto secundario de completar una orden de trabajo (sincronía
//! de kilometraje, reseteo de estado operativo y programación del próximo
//! mantenimiento).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado operativo del equipo - mapea al ENUM estado_operativo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "estado_operativo", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EstadoOperativo {
    Operativo,
    EnMantenimiento,
    FueraDeServicio,
}

/// Estado de disponibilidad del equipo - mapea al ENUM estado_disponibilidad
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "estado_disponibilidad", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EstadoDisponibilidad {
    Disponible,
    Parcial,
    NoDisponible,
}

/// Equipo - mapea exactamente a la tabla equipos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Equipo {
    pub id: Uuid,
    pub numero: String,
    pub modelo: Option<String>,
    pub kilometraje: i32,
    pub estado_operativo: EstadoOperativo,
    pub estado_disponibilidad: EstadoDisponibilidad,
    pub fecha_ultimo_mantenimiento: Option<NaiveDate>,
    pub fecha_proximo_mantenimiento: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}
