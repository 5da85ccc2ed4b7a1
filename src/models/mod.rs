//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod arreglada;
pub mod equipo;
pub mod orden_trabajo;
pub mod repuesto;
pub mod user;
