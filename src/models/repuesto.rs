//! Modelo de Repuesto
//!
//! Este módulo contiene el struct Repuesto (inventario de partes) y la
//! normalización del campo legacy `cantidad`. La columna `stock` es la única
//! fuente de verdad del inventario; los registros antiguos que todavía envían
//! `cantidad` se normalizan en la frontera de entrada con `stock_canonico`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Repuesto - mapea exactamente a la tabla repuestos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Repuesto {
    pub id: Uuid,
    pub nombre: String,
    pub stock: i32,
    pub minimo: i32,
    pub categoria: Option<String>,
    pub ubicacion: Option<String>,
    pub proveedor: Option<String>,
    pub unidad: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Repuesto {
    /// Un repuesto está bajo stock cuando su existencia no supera el mínimo
    pub fn bajo_stock(&self) -> bool {
        self.stock <= self.minimo
    }
}

/// Adaptador único para registros legacy que duplicaban la existencia en
/// `stock` y `cantidad`. Cadena de fallback: `stock ?? cantidad ?? 0`,
/// recortada a no-negativo. Nada más en el sistema lee `cantidad`.
pub fn stock_canonico(stock: Option<i32>, cantidad: Option<i32>) -> i32 {
    stock.or(cantidad).unwrap_or(0).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_canonico_prefiere_stock() {
        assert_eq!(stock_canonico(Some(7), Some(3)), 7);
    }

    #[test]
    fn test_stock_canonico_fallback_cantidad() {
        assert_eq!(stock_canonico(None, Some(3)), 3);
    }

    #[test]
    fn test_stock_canonico_sin_valores() {
        assert_eq!(stock_canonico(None, None), 0);
    }

    #[test]
    fn test_stock_canonico_nunca_negativo() {
        assert_eq!(stock_canonico(Some(-5), None), 0);
        assert_eq!(stock_canonico(None, Some(-2)), 0);
    }

    #[test]
    fn test_bajo_stock() {
        let repuesto = Repuesto {
            id: Uuid::new_v4(),
            nombre: "Filtro de aceite".to_string(),
            stock: 2,
            minimo: 3,
            categoria: None,
            ubicacion: None,
            proveedor: None,
            unidad: None,
            created_at: Utc::now(),
        };
        assert!(repuesto.bajo_stock());
    }
}
