//! Middleware de CORS
//!
//! La lista de orígenes sale de `CORS_ORIGINS`; vacía significa modo
//! desarrollo y se permite cualquier origen.

use axum::http::{HeaderName, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Construir la capa de CORS a partir de los orígenes configurados
pub fn cors_layer(origenes: &[String]) -> CorsLayer {
    if origenes.is_empty() {
        // Solo para desarrollo
        return CorsLayer::very_permissive();
    }

    let permitidos: Vec<HeaderValue> = origenes
        .iter()
        .filter_map(|origen| match HeaderValue::from_str(origen) {
            Ok(valor) => Some(valor),
            Err(_) => {
                warn!("⚠️ Origen CORS inválido ignorado: {}", origen);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(permitidos))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("authorization"),
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
