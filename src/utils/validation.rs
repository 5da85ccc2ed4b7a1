//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! usadas por los DTOs.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Números de equipo internos: letras mayúsculas, dígitos y guiones
    static ref NUMERO_EQUIPO_RE: Regex = Regex::new(r"^[A-Z0-9][A-Z0-9-]{1,19}$").unwrap();
}

/// Validar el número interno de un equipo
pub fn validate_numero_equipo(value: &str) -> Result<(), ValidationError> {
    if NUMERO_EQUIPO_RE.is_match(value) {
        Ok(())
    } else {
        let mut error = ValidationError::new("numero_equipo");
        error.add_param("value".into(), &value.to_string());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_numero_equipo() {
        assert!(validate_numero_equipo("EQ-104").is_ok());
        assert!(validate_numero_equipo("CAM-01-B").is_ok());
        assert!(validate_numero_equipo("eq 104").is_err());
        assert!(validate_numero_equipo("").is_err());
    }
}
