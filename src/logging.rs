//! # Logging
//! src/logging.rs
//!
//! Access log y errores de conexión van por stderr con `env_logger`.
//! Nivel por defecto `info`; `RUST_LOG=debug` muestra también los errores
//! de filesystem que terminan en 404.

use env_logger::Env;

/// Inicializa el logger global. Llamarlo dos veces no hace nada.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_target(false)
        .try_init();
}
