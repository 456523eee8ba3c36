//! # Construcción de Respuestas HTTP
//!
//! API para construir respuestas HTTP/1.0 y convertirlas a bytes.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-Type: application/wasm\r\n
//! Content-Length: 1337\r\n
//! \r\n
//! <bytes del archivo>
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use wasm_dev_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("Hello");
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.starts_with(b"HTTP/1.0 200 OK\r\n"));
//! ```

use super::StatusCode;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Write};

/// Contenido del body
#[derive(Debug)]
enum Body {
    Bytes(Vec<u8>),

    /// Archivo abierto; se copia al socket recién en `write_to`
    File(File),
}

/// Representa una respuesta HTTP/1.0 completa
#[derive(Debug)]
pub struct Response {
    status: StatusCode,

    /// Usamos HashMap para evitar duplicados
    headers: HashMap<String, String>,

    body: Body,
}

impl Response {
    /// Crea una nueva respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Body::Bytes(Vec::new()),
        }
    }

    /// Agrega un header a la respuesta (si ya existe, se sobrescribe)
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Versión mutable de `with_header`
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    /// Establece el cuerpo desde un string y calcula `Content-Length`
    pub fn with_body(self, body: &str) -> Self {
        self.with_body_bytes(body.as_bytes().to_vec())
    }

    /// Establece el cuerpo desde bytes (archivos binarios, wasm, imágenes)
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.headers
            .insert("Content-Length".to_string(), body.len().to_string());
        self.body = Body::Bytes(body);
        self
    }

    /// Body leído de un archivo abierto, sin cargarlo en memoria.
    ///
    /// `len` sale de la metadata del archivo y va en `Content-Length`.
    pub fn with_file(mut self, file: File, len: u64) -> Self {
        self.headers
            .insert("Content-Length".to_string(), len.to_string());
        self.body = Body::File(file);
        self
    }

    /// Descarta el body pero conserva `Content-Length`.
    ///
    /// Es lo que se envía ante un HEAD: los mismos headers que el GET.
    pub fn without_body(mut self) -> Self {
        self.body = Body::Bytes(Vec::new());
        self
    }

    /// Página HTML de error con el código y el mensaje
    ///
    /// # Ejemplo
    /// ```
    /// use wasm_dev_server::http::{Response, StatusCode};
    ///
    /// let response = Response::error(StatusCode::NotFound, "File not found");
    /// assert_eq!(response.status(), StatusCode::NotFound);
    /// assert!(String::from_utf8_lossy(response.body()).contains("File not found"));
    /// ```
    pub fn error(status: StatusCode, message: &str) -> Self {
        let message = escape_html(message);
        let body = format!(
            "<!DOCTYPE HTML>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>Error response</title>\n\
             </head>\n\
             <body>\n\
             <h1>{code} {reason}</h1>\n\
             <p>{message}</p>\n\
             </body>\n\
             </html>\n",
            code = status.as_u16(),
            reason = status.reason_phrase(),
            message = message,
        );

        Self::new(status)
            .with_header("Content-Type", "text/html;charset=utf-8")
            .with_body(&body)
    }

    /// Redirección 301 (ej: `/docs` → `/docs/`)
    pub fn redirect(location: &str) -> Self {
        Self::new(StatusCode::MovedPermanently)
            .with_header("Location", location)
            .with_body_bytes(Vec::new())
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.0 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body (solo si está en memoria; un archivo se copia en `write_to`)
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = self.head_bytes();

        if self.status.allows_body() {
            result.extend_from_slice(self.body());
        }

        result
    }

    fn head_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(256);

        let status_line = format!("HTTP/1.0 {}\r\n", self.status);
        result.extend_from_slice(status_line.as_bytes());

        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result
    }

    /// Escribe la respuesta completa en `out` y hace flush.
    ///
    /// Un body de archivo se copia por bloques con `io::copy`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.head_bytes())?;

        if self.status.allows_body() {
            match &self.body {
                Body::Bytes(bytes) => out.write_all(bytes)?,
                Body::File(file) => {
                    let mut reader: &File = file;
                    io::copy(&mut reader, out)?;
                }
            }
        }

        out.flush()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Body en memoria; vacío si el body es un archivo
    pub fn body(&self) -> &[u8] {
        match &self.body {
            Body::Bytes(bytes) => bytes,
            Body::File(_) => &[],
        }
    }
}

/// Escapa `& < > " '` para insertar texto en HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response() {
        let response = Response::new(StatusCode::Ok);
        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_with_header_overwrites() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_header("Content-Type", "application/wasm");

        assert_eq!(response.header("Content-Type"), Some("application/wasm"));
    }

    #[test]
    fn test_with_body() {
        let response = Response::new(StatusCode::Ok).with_body("Hello World");

        assert_eq!(response.body(), b"Hello World");
        assert_eq!(response.header("Content-Length"), Some("11"));
    }

    #[test]
    fn test_with_body_bytes() {
        let binary_data = vec![0x00, 0x61, 0x73, 0x6d]; // magic de wasm
        let response = Response::new(StatusCode::Ok).with_body_bytes(binary_data.clone());

        assert_eq!(response.body(), &binary_data[..]);
        assert_eq!(response.header("Content-Length"), Some("4"));
    }

    #[test]
    fn test_without_body_keeps_length() {
        let response = Response::new(StatusCode::Ok)
            .with_body("Test")
            .without_body();

        assert!(response.body().is_empty());
        assert_eq!(response.header("Content-Length"), Some("4"));

        let text = String::from_utf8(response.to_bytes()).unwrap();
        assert!(text.ends_with("\r\n\r\n"));
    }

    #[test]
    fn test_error_response() {
        let response = Response::error(StatusCode::NotFound, "File not found");

        assert_eq!(response.status(), StatusCode::NotFound);
        assert_eq!(
            response.header("Content-Type"),
            Some("text/html;charset=utf-8")
        );

        let body = String::from_utf8(response.body().to_vec()).unwrap();
        assert!(body.contains("404 Not Found"));
        assert!(body.contains("File not found"));
    }

    #[test]
    fn test_error_message_is_escaped() {
        let response = Response::error(StatusCode::BadRequest, "<script>");
        let body = String::from_utf8(response.body().to_vec()).unwrap();

        assert!(body.contains("&lt;script&gt;"));
        assert!(!body.contains("<script>"));
    }

    #[test]
    fn test_redirect() {
        let response = Response::redirect("/docs/");

        assert_eq!(response.status(), StatusCode::MovedPermanently);
        assert_eq!(response.header("Location"), Some("/docs/"));
        assert_eq!(response.header("Content-Length"), Some("0"));
    }

    #[test]
    fn test_to_bytes() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body("Test");

        let text = String::from_utf8(response.to_bytes()).unwrap();

        assert!(text.starts_with("HTTP/1.0 200 OK\r\n"));
        assert!(text.contains("Content-Type: text/plain\r\n"));
        assert!(text.contains("Content-Length: 4\r\n"));
        assert!(text.ends_with("\r\n\r\nTest"));
    }

    #[test]
    fn test_not_modified_never_sends_body() {
        let response = Response::new(StatusCode::NotModified).with_body("ignored");
        let text = String::from_utf8(response.to_bytes()).unwrap();

        assert!(text.starts_with("HTTP/1.0 304 Not Modified\r\n"));
        assert!(text.ends_with("\r\n\r\n"));
    }

    #[test]
    fn test_write_to() {
        let mut out = Vec::new();
        Response::new(StatusCode::Ok)
            .with_body("x")
            .write_to(&mut out)
            .unwrap();

        assert!(out.ends_with(b"\r\n\r\nx"));
    }

    fn temp_file(name: &str, contents: &[u8]) -> File {
        let path = std::env::temp_dir().join(format!(
            "wasm_dev_server_response_{}_{}",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        let file = File::open(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        file
    }

    #[test]
    fn test_with_file_streams_on_write() {
        let contents: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        let file = temp_file("stream", &contents);

        let response = Response::new(StatusCode::Ok).with_file(file, contents.len() as u64);
        assert_eq!(response.header("Content-Length"), Some("200000"));
        // Nada del archivo queda en memoria
        assert!(response.body().is_empty());

        let mut out = Vec::new();
        response.write_to(&mut out).unwrap();

        let pos = out.windows(4).position(|w| w == b"\r\n\r\n").unwrap();
        assert_eq!(&out[pos + 4..], &contents[..]);
    }

    #[test]
    fn test_with_file_without_body() {
        let file = temp_file("head", b"abcdef");

        let mut out = Vec::new();
        Response::new(StatusCode::Ok)
            .with_file(file, 6)
            .without_body()
            .write_to(&mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Content-Length: 6\r\n"));
        assert!(text.ends_with("\r\n\r\n"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"q\" 'q'"), "&quot;q&quot; &#x27;q&#x27;");
        assert_eq!(escape_html("plain.txt"), "plain.txt");
    }
}
