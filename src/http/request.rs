//! # Parsing de Requests HTTP
//! src/http/request.rs
//!
//! Parser de la cabecera de un request (request line + headers). El servidor
//! solo sirve GET y HEAD, así que el body se ignora.
//!
//! ## Formato
//!
//! ```text
//! GET /docs/index.html?v=2 HTTP/1.1\r\n
//! Host: localhost:8000\r\n
//! If-Modified-Since: Sun, 06 Nov 1994 08:49:37 GMT\r\n
//! \r\n
//! ```

use super::StatusCode;
use std::collections::HashMap;

/// Métodos HTTP soportados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un archivo
    GET,

    /// HEAD - Como GET pero solo retorna headers
    HEAD,
}

impl Method {
    /// Parsea un método HTTP desde un string
    ///
    /// # Errores
    ///
    /// Retorna error si el método no es soportado
    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "GET" => Ok(Method::GET),
            "HEAD" => Ok(Method::HEAD),
            _ => Err(ParseError::UnsupportedMethod(s.to_string())),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
        }
    }
}

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,

    /// Target tal como llegó (ej: "/docs/?v=2")
    target: String,

    /// Path sin query ni fragment, todavía con percent-encoding
    path: String,

    /// Query string cruda, sin el '?'
    query: Option<String>,

    /// Headers con el nombre en minúsculas
    headers: HashMap<String, String>,

    /// "HTTP/1.0" o "HTTP/1.1"
    version: String,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request vacío
    EmptyRequest,

    /// Formato inválido de la request line
    InvalidRequestLine,

    /// Método HTTP no soportado
    UnsupportedMethod(String),

    /// Versión con formato inválido (ej: "HTTX/1")
    MalformedVersion(String),

    /// Versión bien formada pero no soportada (ej: "HTTP/2.0")
    UnsupportedVersion(String),

    /// Header malformado
    InvalidHeader(String),
}

impl ParseError {
    /// Código de estado con el que se responde a este error
    pub fn status(&self) -> StatusCode {
        match self {
            ParseError::UnsupportedMethod(_) => StatusCode::NotImplemented,
            ParseError::UnsupportedVersion(_) => StatusCode::HttpVersionNotSupported,
            _ => StatusCode::BadRequest,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyRequest => write!(f, "Empty request"),
            ParseError::InvalidRequestLine => write!(f, "Bad request syntax"),
            ParseError::UnsupportedMethod(m) => write!(f, "Unsupported method ('{}')", m),
            ParseError::MalformedVersion(v) => write!(f, "Bad request version ('{}')", v),
            ParseError::UnsupportedVersion(v) => write!(f, "Invalid HTTP version ({})", v),
            ParseError::InvalidHeader(h) => write!(f, "Invalid header: {}", h),
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Parsea un request HTTP desde bytes
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use wasm_dev_server::http::Request;
    ///
    /// let raw = b"GET /pkg/app_bg.wasm?v=1 HTTP/1.1\r\nHost: localhost\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/pkg/app_bg.wasm");
    /// assert_eq!(request.query(), Some("v=1"));
    /// assert_eq!(request.header("host"), Some("localhost"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        let request_str =
            std::str::from_utf8(buffer).map_err(|_| ParseError::InvalidRequestLine)?;

        if request_str.trim().is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        // Aceptamos tanto \r\n como \n solo
        let mut lines = request_str.lines();
        let request_line = lines.next().ok_or(ParseError::EmptyRequest)?;

        let (method, target, version) = Self::parse_request_line(request_line)?;
        let (path, query) = Self::split_target(&target);
        let headers = Self::parse_headers(lines)?;

        Ok(Request {
            method,
            target,
            path,
            query,
            headers,
            version,
        })
    }

    /// Formato: `GET /path?query HTTP/1.1`
    ///
    /// La versión se valida antes que el método: un `POST` bien formado
    /// termina en 501, no en 400.
    fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.len() != 3 {
            return Err(ParseError::InvalidRequestLine);
        }

        let version = Self::parse_version(parts[2])?;
        let method = Method::from_str(parts[0])?;

        Ok((method, parts[1].to_string(), version))
    }

    fn parse_version(version: &str) -> Result<String, ParseError> {
        let malformed = || ParseError::MalformedVersion(version.to_string());

        let number = version.strip_prefix("HTTP/").ok_or_else(malformed)?;
        let (major, minor) = number.split_once('.').ok_or_else(malformed)?;
        let major: u32 = major.parse().map_err(|_| malformed())?;
        let _minor: u32 = minor.parse().map_err(|_| malformed())?;

        if major >= 2 {
            return Err(ParseError::UnsupportedVersion(version.to_string()));
        }

        Ok(version.to_string())
    }

    /// Separa "/a/b?x=1#frag" en ("/a/b", Some("x=1"))
    fn split_target(target: &str) -> (String, Option<String>) {
        let without_fragment = match target.find('#') {
            Some(pos) => &target[..pos],
            None => target,
        };

        match without_fragment.split_once('?') {
            Some((path, query)) => (path.to_string(), Some(query.to_string())),
            None => (without_fragment.to_string(), None),
        }
    }

    /// Cada header tiene formato: "Name: Value"
    fn parse_headers<'a, I>(lines: I) -> Result<HashMap<String, String>, ParseError>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut headers = HashMap::new();

        for line in lines {
            // La línea vacía marca el fin de los headers
            if line.trim().is_empty() {
                break;
            }

            match line.split_once(':') {
                Some((name, value)) if !name.trim().is_empty() => {
                    headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
                }
                _ => return Err(ParseError::InvalidHeader(line.to_string())),
            }
        }

        Ok(headers)
    }

    // === Métodos públicos para acceder a los campos ===

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Path del request sin decodificar
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header (sin distinguir mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|s| s.as_str())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Request line reconstruida, para el access log
    pub fn request_line(&self) -> String {
        format!("{} {} {}", self.method.as_str(), self.target, self.version)
    }
}
