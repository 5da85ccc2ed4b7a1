//! Middleware de autenticación JWT
//!
//! Este módulo maneja la autenticación JWT, extracción de tokens,
//! verificación de usuarios y el chequeo de capacidades por rol.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::EnvironmentConfig,
    models::user::{Capacidad, Rol, User},
    repositories::user_repository::UserRepository,
    state::AppState,
    utils::errors::AppError,
};

/// Claims del JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub rol: String,
    pub exp: usize,
    pub iat: usize,
}

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub nombre: String,
    pub rol: Rol,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    // Decodificar y validar JWT
    let token_data = decode::<Claims>(
        auth_header,
        &DecodingKey::from_secret(state.config.jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

    let claims = token_data.claims;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("ID de usuario inválido".to_string()))?;

    // Verificar que el usuario existe en la base de datos
    let user = UserRepository::new(state.pool.clone())
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Usuario no encontrado".to_string()))?;

    // Inyectar usuario autenticado en las extensions
    let authenticated_user = AuthenticatedUser {
        user_id: user.id,
        nombre: user.nombre_completo,
        rol: user.rol,
    };
    request.extensions_mut().insert(authenticated_user);

    Ok(next.run(request).await)
}

/// Verifica que el usuario autenticado tenga la capacidad requerida
pub fn exigir_capacidad(user: &AuthenticatedUser, capacidad: Capacidad) -> Result<(), AppError> {
    if user.rol.puede(capacidad) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "El rol '{}' no tiene permiso para esta operación",
            user.rol.as_str()
        )))
    }
}

/// Función para generar JWT token
pub fn generate_jwt_token(user: &User, config: &EnvironmentConfig) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.jwt_expiration as i64);

    let claims = Claims {
        sub: user.id.to_string(),
        rol: user.rol.as_str().to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = jsonwebtoken::EncodingKey::from_secret(config.jwt_secret.as_ref());

    jsonwebtoken::encode(&jsonwebtoken::Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Error generando JWT: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario(rol: Rol) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Uuid::new_v4(),
            nombre: "Prueba".to_string(),
            rol,
        }
    }

    #[test]
    fn test_chofer_no_gestiona_inventario() {
        let err = exigir_capacidad(&usuario(Rol::Chofer), Capacidad::GestionarInventario);
        assert!(matches!(err, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn test_mecanico_consume_repuestos() {
        assert!(exigir_capacidad(&usuario(Rol::Mecanico), Capacidad::ConsumirRepuestos).is_ok());
    }

    #[test]
    fn test_admin_tiene_todas_las_capacidades() {
        for cap in [
            Capacidad::ReportarFalla,
            Capacidad::ConsumirRepuestos,
            Capacidad::CambiarEstado,
            Capacidad::CancelarFalla,
            Capacidad::GestionarInventario,
            Capacidad::GestionarEquipos,
        ] {
            assert!(exigir_capacidad(&usuario(Rol::Admin), cap).is_ok());
        }
    }
}
