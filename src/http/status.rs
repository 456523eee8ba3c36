//! # Códigos de Estado HTTP
//!
//! Códigos que puede devolver el servidor de archivos estáticos:
//!
//! - **2xx**: Éxito (200 OK)
//! - **3xx**: Redirección de directorios (301) y caché condicional (304)
//! - **4xx**: Error del cliente (400, 404)
//! - **5xx**: Lo que el servidor no implementa (501, 505)

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - El archivo se envía completo
    Ok = 200,

    /// 301 Moved Permanently - Directorio pedido sin `/` final
    MovedPermanently = 301,

    /// 304 Not Modified - El archivo no cambió desde `If-Modified-Since`
    NotModified = 304,

    /// 400 Bad Request - Request line o headers malformados
    BadRequest = 400,

    /// 404 Not Found - Archivo inexistente o directorio sin permisos
    NotFound = 404,

    /// 501 Not Implemented - Método distinto de GET/HEAD
    NotImplemented = 501,

    /// 505 HTTP Version Not Supported
    HttpVersionNotSupported = 505,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use wasm_dev_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// # Ejemplo
    /// ```
    /// use wasm_dev_server::http::StatusCode;
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::NotModified => "Not Modified",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::NotImplemented => "Not Implemented",
            StatusCode::HttpVersionNotSupported => "HTTP Version Not Supported",
        }
    }

    /// Verifica si el código indica error del cliente (4xx)
    pub fn is_client_error(&self) -> bool {
        let code = self.as_u16();
        (400..500).contains(&code)
    }

    /// Verifica si el código indica error del servidor (5xx)
    pub fn is_server_error(&self) -> bool {
        let code = self.as_u16();
        (500..600).contains(&code)
    }

    /// Una respuesta 304 nunca lleva body
    pub fn allows_body(&self) -> bool {
        !matches!(self, StatusCode::NotModified)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_values() {
        assert_eq!(StatusCode::Ok.as_u16(), 200);
        assert_eq!(StatusCode::MovedPermanently.as_u16(), 301);
        assert_eq!(StatusCode::NotModified.as_u16(), 304);
        assert_eq!(StatusCode::NotFound.as_u16(), 404);
        assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    }

    #[test]
    fn test_reason_phrases() {
        assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
        assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
        assert_eq!(
            StatusCode::HttpVersionNotSupported.reason_phrase(),
            "HTTP Version Not Supported"
        );
    }

    #[test]
    fn test_error_classes() {
        assert!(!StatusCode::Ok.is_client_error());
        assert!(!StatusCode::NotModified.is_client_error());
        assert!(StatusCode::BadRequest.is_client_error());
        assert!(StatusCode::NotFound.is_client_error());
        assert!(!StatusCode::NotFound.is_server_error());
        assert!(StatusCode::NotImplemented.is_server_error());
        assert!(StatusCode::HttpVersionNotSupported.is_server_error());
    }

    #[test]
    fn test_allows_body() {
        assert!(StatusCode::Ok.allows_body());
        assert!(StatusCode::NotFound.allows_body());
        assert!(!StatusCode::NotModified.allows_body());
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusCode::Ok.to_string(), "200 OK");
        assert_eq!(StatusCode::NotFound.to_string(), "404 Not Found");
    }
}
