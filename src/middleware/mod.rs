//! Middleware del sistema
//!
//! Este módulo contiene el middleware para autenticación, CORS
//! y control de capacidades por rol.

pub mod auth;
pub mod cors;

pub use auth::*;
pub use cors::*;
