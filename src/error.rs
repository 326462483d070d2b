// ============================================================================
// API ERROR - Taxonomía de fallos del gateway HTTP
// ============================================================================

use thiserror::Error;

/// Fallo de una llamada al backend, ya clasificado.
///
/// `Unauthorized` significa que el backend rechazó un token que SÍ viajó en
/// la petición: la sesión debe limpiarse. Un 401 sin token (login con
/// credenciales malas) llega como `Validation` con el mensaje del backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Error de red: {0}")]
    Network(String),

    #[error("Sesión expirada o token inválido")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("Recurso no encontrado")]
    NotFound,

    #[error("Error del servidor (HTTP {0})")]
    Server(u16),
}

impl ApiError {
    /// Mensaje para mostrar en la UI
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "No se pudo conectar con el servidor. Inténtalo de nuevo.".to_string(),
            ApiError::Unauthorized => "Tu sesión ha expirado. Inicia sesión de nuevo.".to_string(),
            ApiError::Validation(msg) => msg.clone(),
            ApiError::NotFound => "Recurso no encontrado".to_string(),
            ApiError::Server(_) => "Error del servidor. Inténtalo más tarde.".to_string(),
        }
    }
}

/// Clasifica un status HTTP de error según si la petición llevaba token.
/// El backend siempre responde `{"message": ...}` en los fallos; `message`
/// es `None` cuando el cuerpo no se pudo parsear.
pub fn classify_status(status: u16, had_token: bool, message: Option<String>) -> ApiError {
    match status {
        401 if had_token => ApiError::Unauthorized,
        401 => ApiError::Validation(message.unwrap_or_else(|| "Error de autenticación".to_string())),
        404 => ApiError::NotFound,
        400..=499 => ApiError::Validation(message.unwrap_or_else(|| "Petición inválida".to_string())),
        _ => ApiError::Server(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_token_is_unauthorized() {
        assert_eq!(classify_status(401, true, Some("Token has expired".to_string())), ApiError::Unauthorized);
        assert_eq!(classify_status(401, true, None), ApiError::Unauthorized);
    }

    #[test]
    fn bad_login_keeps_backend_message() {
        let err = classify_status(401, false, Some("Invalid credentials".to_string()));
        assert_eq!(err, ApiError::Validation("Invalid credentials".to_string()));
    }

    #[test]
    fn not_found_and_validation() {
        assert_eq!(classify_status(404, false, Some("Product not found".to_string())), ApiError::NotFound);
        assert_eq!(
            classify_status(409, false, Some("Username already exists".to_string())),
            ApiError::Validation("Username already exists".to_string())
        );
        assert_eq!(
            classify_status(403, true, Some("Permission denied".to_string())),
            ApiError::Validation("Permission denied".to_string())
        );
    }

    #[test]
    fn server_errors_carry_status() {
        assert_eq!(classify_status(500, false, None), ApiError::Server(500));
        assert_eq!(classify_status(503, true, None), ApiError::Server(503));
    }

    #[test]
    fn validation_without_body_gets_fallback() {
        match classify_status(400, false, None) {
            ApiError::Validation(msg) => assert!(!msg.is_empty()),
            other => panic!("esperaba Validation, llegó {:?}", other),
        }
    }
}
