//! # Módulo HTTP
//!
//! Implementación mínima de HTTP/1.0 para servir archivos:
//!
//! - Parsing de la cabecera del request (GET y HEAD)
//! - Construcción de responses
//! - Códigos de estado
//! - Formato de fechas HTTP (`Date`, `Last-Modified`)
//!
//! Se aceptan requests HTTP/1.0 y HTTP/1.1, pero siempre se responde con
//! HTTP/1.0 y se cierra la conexión después de cada respuesta.

pub mod date;
pub mod request;
pub mod response;
pub mod status;

// Esto permite usar `http::Request` en vez de `http::request::Request`
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
