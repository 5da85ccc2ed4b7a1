//! Modelo de User
//!
//! Este módulo contiene el struct User, el enum Rol y la tabla de
//! capacidades. El despacho por rol se hace siempre contra esta tabla
//! (`rol.puede(capacidad)`), nunca comparando strings en los handlers.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Rol del usuario - mapea al ENUM rol_usuario
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "rol_usuario", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Rol {
    Chofer,
    Mecanico,
    Admin,
}

/// Acciones protegidas del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capacidad {
    ReportarFalla,
    ConsumirRepuestos,
    CambiarEstado,
    CancelarFalla,
    GestionarInventario,
    GestionarEquipos,
}

lazy_static! {
    /// Tabla única rol -> conjunto de capacidades
    static ref CAPACIDADES: HashMap<Rol, HashSet<Capacidad>> = {
        use Capacidad::*;

        let mut tabla = HashMap::new();
        tabla.insert(Rol::Chofer, HashSet::from([ReportarFalla]));
        tabla.insert(
            Rol::Mecanico,
            HashSet::from([
                ReportarFalla,
                ConsumirRepuestos,
                CambiarEstado,
                CancelarFalla,
                GestionarInventario,
            ]),
        );
        tabla.insert(
            Rol::Admin,
            HashSet::from([
                ReportarFalla,
                ConsumirRepuestos,
                CambiarEstado,
                CancelarFalla,
                GestionarInventario,
                GestionarEquipos,
            ]),
        );
        tabla
    };
}

impl Rol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rol::Chofer => "chofer",
            Rol::Mecanico => "mecanico",
            Rol::Admin => "admin",
        }
    }

    /// Consultar la tabla de capacidades
    pub fn puede(&self, capacidad: Capacidad) -> bool {
        CAPACIDADES
            .get(self)
            .map(|capacidades| capacidades.contains(&capacidad))
            .unwrap_or(false)
    }
}

/// User - mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub nombre_completo: String,
    pub email: String,
    pub password_hash: String,
    pub rol: Rol,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use Capacidad::*;

    #[test]
    fn test_chofer_solo_reporta() {
        assert!(Rol::Chofer.puede(ReportarFalla));
        assert!(!Rol::Chofer.puede(ConsumirRepuestos));
        assert!(!Rol::Chofer.puede(CambiarEstado));
        assert!(!Rol::Chofer.puede(CancelarFalla));
        assert!(!Rol::Chofer.puede(GestionarInventario));
        assert!(!Rol::Chofer.puede(GestionarEquipos));
    }

    #[test]
    fn test_mecanico_opera_taller() {
        assert!(Rol::Mecanico.puede(ConsumirRepuestos));
        assert!(Rol::Mecanico.puede(CambiarEstado));
        assert!(Rol::Mecanico.puede(CancelarFalla));
        assert!(Rol::Mecanico.puede(GestionarInventario));
        assert!(!Rol::Mecanico.puede(GestionarEquipos));
    }

    #[test]
    fn test_admin_tiene_todo() {
        for capacidad in [
            ReportarFalla,
            ConsumirRepuestos,
            CambiarEstado,
            CancelarFalla,
            GestionarInventario,
            GestionarEquipos,
        ] {
            assert!(Rol::Admin.puede(capacidad));
        }
    }
}
