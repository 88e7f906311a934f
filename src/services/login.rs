//! Login form validation and error wording.

use crate::api::{ApiError, Credentials, ErrorKind};

pub const MISSING_FIELDS: &str = "Por favor completa todos los campos";
pub const INVALID_RESPONSE: &str = "Respuesta de autenticación inválida.";
pub const METHOD_NOT_ALLOWED: &str =
    "Error de método HTTP. Verifica la configuración de rutas en Laravel.";
pub const INVALID_DATA: &str = "Datos inválidos. Verifica email y contraseña.";
pub const CSRF_ERROR: &str =
    "Error CSRF. La ruta debe estar en routes/api.php sin middleware web.";
pub const GENERIC_FAILURE: &str = "Error de autenticación. Verifica tus credenciales.";

/// Both fields are required; whitespace-only counts as empty.
pub fn validate(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// User-facing message for a failed login against `base_url`.
pub fn login_error_message(error: &ApiError, base_url: &str) -> String {
    match error.kind() {
        ErrorKind::Network => {
            return format!(
                "Error de conexión. Verifica que la API esté ejecutándose en {}",
                base_url
            )
        }
        ErrorKind::Decode => return INVALID_RESPONSE.to_string(),
        _ => {}
    }

    let message = error.server_message();
    match error.status() {
        Some(405) => return METHOD_NOT_ALLOWED.to_string(),
        Some(422) => return INVALID_DATA.to_string(),
        Some(419) => return CSRF_ERROR.to_string(),
        _ => {}
    }
    if message.is_some_and(|m| m.contains("CSRF")) {
        return CSRF_ERROR.to_string();
    }

    if let Some(example) = error.body().and_then(|body| body.get("example")) {
        let expected = example.get("body").unwrap_or(example);
        return format!(
            "{} - Ejemplo esperado: {}",
            message.unwrap_or(GENERIC_FAILURE),
            expected
        );
    }

    message.unwrap_or(GENERIC_FAILURE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://127.0.0.1:8000";

    #[test]
    fn test_validate_requires_both_fields() {
        assert_eq!(validate("", "x"), Err(MISSING_FIELDS));
        assert_eq!(validate("a@b.c", "   "), Err(MISSING_FIELDS));
        let credentials = validate("  a@b.c ", "pw").unwrap();
        assert_eq!(credentials.email, "a@b.c");
        assert_eq!(credentials.password, "pw");
    }

    #[test]
    fn test_network_and_timeout() {
        let expected = "Error de conexión. Verifica que la API esté ejecutándose en http://127.0.0.1:8000";
        assert_eq!(login_error_message(&ApiError::Network("offline".into()), BASE), expected);
        assert_eq!(login_error_message(&ApiError::Timeout(10_000), BASE), expected);
    }

    #[test]
    fn test_status_specific_messages() {
        assert_eq!(login_error_message(&ApiError::from_response(405, ""), BASE), METHOD_NOT_ALLOWED);
        assert_eq!(
            login_error_message(&ApiError::from_response(422, r#"{"message":"The email field is required."}"#), BASE),
            INVALID_DATA
        );
        assert_eq!(login_error_message(&ApiError::from_response(419, ""), BASE), CSRF_ERROR);
    }

    #[test]
    fn test_csrf_mentioned_in_message() {
        let err = ApiError::from_response(500, r#"{"message":"CSRF token mismatch."}"#);
        assert_eq!(login_error_message(&err, BASE), CSRF_ERROR);
    }

    #[test]
    fn test_example_payload_is_appended() {
        let err = ApiError::from_response(
            400,
            r#"{"message":"Bad payload","example":{"body":{"email":"x","password":"y"}}}"#,
        );
        assert_eq!(
            login_error_message(&err, BASE),
            r#"Bad payload - Ejemplo esperado: {"email":"x","password":"y"}"#
        );
    }

    #[test]
    fn test_server_message_or_generic() {
        let with_message = ApiError::from_response(401, r#"{"message":"Credenciales incorrectas"}"#);
        assert_eq!(login_error_message(&with_message, BASE), "Credenciales incorrectas");
        assert_eq!(login_error_message(&ApiError::from_response(401, ""), BASE), GENERIC_FAILURE);
    }

    #[test]
    fn test_missing_token() {
        let err = ApiError::Decode("login response carried no token".into());
        assert_eq!(login_error_message(&err, BASE), INVALID_RESPONSE);
    }
}
