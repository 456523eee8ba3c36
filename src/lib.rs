//! # wasm_dev_server
//! src/lib.rs
//!
//! Servidor de archivos estáticos para previsualizar un build local
//! (documentación, demos WebAssembly) en el navegador. Sirve el directorio
//! actual y registra `.wasm` como `application/wasm`, que es lo que exige
//! `WebAssembly.instantiateStreaming`.
//!
//! ## Arquitectura
//!
//! - `config`: Puerto desde la línea de comandos (con fallback silencioso)
//! - `mime`: Tabla extensión → Content-Type
//! - `http`: Parsing de requests y construcción de responses HTTP/1.0
//! - `handler`: Traducción de paths y respuestas a partir del filesystem
//! - `server`: Listener TCP y loop de accept secuencial
//! - `logging`: Inicialización de `env_logger`
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use wasm_dev_server::config::Config;
//! use wasm_dev_server::handler::FileHandler;
//! use wasm_dev_server::mime::MimeTable;
//! use wasm_dev_server::server::Server;
//!
//! let config = Config::default();
//! let mut mime = MimeTable::default();
//! mime.insert(".wasm", "application/wasm");
//!
//! let handler = FileHandler::new(config.root.clone(), mime);
//! let mut server = Server::new(config, handler);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod handler;
pub mod http;
pub mod logging;
pub mod mime;
pub mod server;
