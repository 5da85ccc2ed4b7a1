//! DTOs de Equipo

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::equipo::{Equipo, EstadoDisponibilidad, EstadoOperativo};

/// Request para registrar un equipo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEquipoRequest {
    #[validate(custom = "crate::utils::validation::validate_numero_equipo")]
    pub numero: String,

    #[validate(length(min = 2, max = 100))]
    pub modelo: Option<String>,

    #[validate(range(min = 0))]
    pub kilometraje: Option<i32>,
}

/// Request para actualizar un equipo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEquipoRequest {
    #[validate(length(min = 2, max = 100))]
    pub modelo: Option<String>,

    #[validate(range(min = 0))]
    pub kilometraje: Option<i32>,

    pub estado_operativo: Option<EstadoOperativo>,

    pub estado_disponibilidad: Option<EstadoDisponibilidad>,
}

/// Response de equipo para la API
#[derive(Debug, Serialize)]
pub struct EquipoResponse {
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

impl From<Equipo> for EquipoResponse {
    fn from(equipo: Equipo) -> Self {
        Self {
            id: equipo.id,
            numero: equipo.numero,
            modelo: equipo.modelo,
            kilometraje: equipo.kilometraje,
            estado_operativo: equipo.estado_operativo,
            estado_disponibilidad: equipo.estado_disponibilidad,
            fecha_ultimo_mantenimiento: equipo.fecha_ultimo_mantenimiento,
            fecha_proximo_mantenimiento: equipo.fecha_proximo_mantenimiento,
            created_at: equipo.created_at,
        }
    }
}
