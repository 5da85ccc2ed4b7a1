//! DTOs de Repuesto
//!
//! Los requests aceptan el campo legacy `cantidad` como alias de `stock`; la
//! normalización pasa por `stock_canonico` y el resto del sistema solo ve la
//! columna canónica. Las responses emiten ambos campos con el mismo valor
//! para no romper lectores antiguos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::repuesto::{stock_canonico, Repuesto};

/// Request para crear un nuevo repuesto
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRepuestoRequest {
    #[validate(length(min = 2, max = 150))]
    pub nombre: String,

    #[validate(range(min = 0))]
    pub stock: Option<i32>,

    /// Alias legacy de `stock`
    #[validate(range(min = 0))]
    pub cantidad: Option<i32>,

    #[validate(range(min = 0))]
    pub minimo: Option<i32>,

    pub categoria: Option<String>,
    pub ubicacion: Option<String>,
    pub proveedor: Option<String>,
    pub unidad: Option<String>,
}

impl CreateRepuestoRequest {
    /// Existencia inicial canónica (`stock ?? cantidad ?? 0`)
    pub fn stock_inicial(&self) -> i32 {
        stock_canonico(self.stock, self.cantidad)
    }
}

/// Request para actualizar un repuesto existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRepuestoRequest {
    #[validate(length(min = 2, max = 150))]
    pub nombre: Option<String>,

    #[validate(range(min = 0))]
    pub stock: Option<i32>,

    /// Alias legacy de `stock`
    #[validate(range(min = 0))]
    pub cantidad: Option<i32>,

    #[validate(range(min = 0))]
    pub minimo: Option<i32>,

    pub categoria: Option<String>,
    pub ubicacion: Option<String>,
    pub proveedor: Option<String>,
    pub unidad: Option<String>,
}

impl UpdateRepuestoRequest {
    /// Nueva existencia canónica si el request trae alguno de los dos campos
    pub fn stock_nuevo(&self) -> Option<i32> {
        match (self.stock, self.cantidad) {
            (None, None) => None,
            (stock, cantidad) => Some(stock_canonico(stock, cantidad)),
        }
    }
}

/// Response de repuesto para la API
#[derive(Debug, Serialize)]
pub struct RepuestoResponse {
    pub id: Uuid,
    pub nombre: String,
    pub stock: i32,
    /// Alias legacy, siempre idéntico a `stock`
    pub cantidad: i32,
    pub minimo: i32,
    pub bajo_stock: bool,
    pub categoria: Option<String>,
    pub ubicacion: Option<String>,
    pub proveedor: Option<String>,
    pub unidad: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Repuesto> for RepuestoResponse {
    fn from(repuesto: Repuesto) -> Self {
        let bajo_stock = repuesto.bajo_stock();
        Self {
            id: repuesto.id,
            nombre: repuesto.nombre,
            stock: repuesto.stock,
            cantidad: repuesto.stock,
            minimo: repuesto.minimo,
            bajo_stock,
            categoria: repuesto.categoria,
            ubicacion: repuesto.ubicacion,
            proveedor: repuesto.proveedor,
            unidad: repuesto.unidad,
            created_at: repuesto.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_inicial_normaliza_alias() {
        let request = CreateRepuestoRequest {
            nombre: "Filtro".to_string(),
            stock: None,
            cantidad: Some(4),
            minimo: None,
            categoria: None,
            ubicacion: None,
            proveedor: None,
            unidad: None,
        };
        assert_eq!(request.stock_inicial(), 4);
    }

    #[test]
    fn test_stock_nuevo_sin_campos() {
        let request = UpdateRepuestoRequest {
            nombre: None,
            stock: None,
            cantidad: None,
            minimo: None,
            categoria: None,
            ubicacion: None,
            proveedor: None,
            unidad: None,
        };
        assert_eq!(request.stock_nuevo(), None);
    }

    #[test]
    fn test_response_emite_ambos_campos_iguales() {
        let repuesto = Repuesto {
            id: Uuid::new_v4(),
            nombre: "Correa".to_string(),
            stock: 9,
            minimo: 2,
            categoria: None,
            ubicacion: None,
            proveedor: None,
            unidad: None,
            created_at: Utc::now(),
        };
        let response = RepuestoResponse::from(repuesto);
        assert_eq!(response.stock, 9);
        assert_eq!(response.cantidad, 9);
        assert!(!response.bajo_stock);
    }
}
