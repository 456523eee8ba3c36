//! # Configuración del Servidor
//! src/config.rs
//!
//! La única entrada del usuario es un argumento posicional opcional con el
//! puerto. Cualquier error al parsearlo (falta, no es número, fuera de
//! rango) se ignora en silencio y se usa el puerto por defecto.
//!
//! ```bash
//! ./wasm_dev_server          # puerto 8000
//! ./wasm_dev_server 3000     # puerto 3000
//! ./wasm_dev_server abc      # puerto 8000
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Puerto usado cuando el argumento falta o no es válido
pub const DEFAULT_PORT: u16 = 8000;

/// Dirección wildcard: escucha en todas las interfaces
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Configuración del servidor de archivos estáticos
#[derive(Debug, Clone, Parser)]
#[command(name = "wasm_dev_server")]
#[command(about = "Servidor de archivos estáticos para desarrollo local")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Argumentos extra (se ignoran)
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Host/IP en el que escucha (no configurable)
    #[arg(skip = DEFAULT_HOST.to_string())]
    pub host: String,

    /// Directorio raíz que se sirve (cwd al arrancar)
    #[arg(skip = current_dir())]
    pub root: PathBuf,
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

impl Config {
    /// Crea la configuración desde los argumentos del proceso
    pub fn from_args() -> Self {
        Self::from_arg_list(std::env::args_os())
    }

    /// Parsea una lista de argumentos (el primero es el nombre del programa).
    ///
    /// Nunca falla: ante cualquier error de clap (puerto inválido, flag
    /// desconocido, `--help`) se devuelve la configuración por defecto.
    ///
    /// # Ejemplo
    /// ```rust
    /// use wasm_dev_server::config::Config;
    ///
    /// assert_eq!(Config::from_arg_list(["server", "3000"]).port, 3000);
    /// assert_eq!(Config::from_arg_list(["server", "abc"]).port, 8000);
    /// ```
    pub fn from_arg_list<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).unwrap_or_default()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use wasm_dev_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:8000");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            extra: Vec::new(),
            host: DEFAULT_HOST.to_string(),
            root: current_dir(),
        }
    }
}
