//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Servidor TCP que:
//! 1. Hace bind del puerto con `SO_REUSEADDR`
//! 2. Acepta conexiones entrantes, una a la vez
//! 3. Lee y parsea la cabecera del request
//! 4. Le pasa el request al `FileHandler` y envía la respuesta

pub mod tcp;

pub use tcp::Server;
