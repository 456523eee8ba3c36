//! # Tabla de tipos MIME
//! src/mime.rs
//!
//! Mapea extensiones de archivo (con punto: `.html`) a su `Content-Type`.
//! La tabla es un valor explícito que se le pasa al handler al construirlo;
//! no hay estado global. Se modifica solo antes de arrancar el servidor.

use std::collections::HashMap;
use std::path::Path;

/// Tipo usado cuando la extensión no está en la tabla
pub const FALLBACK_TYPE: &str = "application/octet-stream";

/// Tabla por defecto de tipos comunes en un build web
const DEFAULT_TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".htm", "text/html"),
    (".css", "text/css"),
    (".js", "text/javascript"),
    (".mjs", "text/javascript"),
    (".json", "application/json"),
    (".map", "application/json"),
    (".xml", "text/xml"),
    (".txt", "text/plain"),
    (".md", "text/markdown"),
    (".csv", "text/csv"),
    (".py", "text/x-python"),
    (".rs", "text/plain"),
    (".ts", "text/plain"),
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".gif", "image/gif"),
    (".svg", "image/svg+xml"),
    (".ico", "image/vnd.microsoft.icon"),
    (".webp", "image/webp"),
    (".bmp", "image/bmp"),
    (".woff", "font/woff"),
    (".woff2", "font/woff2"),
    (".ttf", "font/ttf"),
    (".otf", "font/otf"),
    (".mp3", "audio/mpeg"),
    (".wav", "audio/x-wav"),
    (".mp4", "video/mp4"),
    (".webm", "video/webm"),
    (".pdf", "application/pdf"),
    (".zip", "application/zip"),
    (".gz", "application/gzip"),
    (".tar", "application/x-tar"),
    (".bin", "application/octet-stream"),
];

/// Tabla extensión → Content-Type
#[derive(Debug, Clone)]
pub struct MimeTable {
    types: HashMap<String, String>,
}

impl MimeTable {
    /// Crea una tabla vacía (todo resuelve a `application/octet-stream`)
    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Agrega o sobrescribe una entrada.
    ///
    /// Se acepta la extensión con o sin punto inicial.
    ///
    /// # Ejemplo
    /// ```
    /// use wasm_dev_server::mime::MimeTable;
    ///
    /// let mut table = MimeTable::default();
    /// table.insert(".wasm", "application/wasm");
    /// assert_eq!(table.guess("demo/pkg/app_bg.wasm"), "application/wasm");
    /// ```
    pub fn insert(&mut self, ext: &str, content_type: &str) {
        self.types.insert(normalize(ext), content_type.to_string());
    }

    /// Busca la extensión exacta
    pub fn get(&self, ext: &str) -> Option<&str> {
        self.types.get(&normalize(ext)).map(|s| s.as_str())
    }

    /// Infiere el Content-Type de una ruta por su extensión.
    ///
    /// Primero busca la extensión tal cual y luego en minúsculas.
    pub fn guess<P: AsRef<Path>>(&self, path: P) -> &str {
        let ext = match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) => format!(".{}", ext),
            None => return FALLBACK_TYPE,
        };

        self.types
            .get(&ext)
            .or_else(|| self.types.get(&ext.to_lowercase()))
            .map(|s| s.as_str())
            .unwrap_or(FALLBACK_TYPE)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for MimeTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for (ext, content_type) in DEFAULT_TYPES {
            table.insert(ext, content_type);
        }
        table
    }
}

fn normalize(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_common_types() {
        let table = MimeTable::default();
        assert_eq!(table.guess("index.html"), "text/html");
        assert_eq!(table.guess("style.css"), "text/css");
        assert_eq!(table.guess("logo.png"), "image/png");
        assert!(!table.is_empty());
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        let table = MimeTable::default();
        assert_eq!(table.guess("archive.unknownext"), FALLBACK_TYPE);
        assert_eq!(table.guess("Makefile"), FALLBACK_TYPE);
    }

    #[test]
    fn test_insert_wasm() {
        let mut table = MimeTable::default();
        table.insert(".wasm", "application/wasm");
        assert_eq!(table.guess("pkg/app_bg.wasm"), "application/wasm");
        assert_eq!(table.get("wasm"), Some("application/wasm"));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut table = MimeTable::default();
        let before = table.len();
        table.insert("js", "application/javascript");
        assert_eq!(table.guess("bootstrap.js"), "application/javascript");
        assert_eq!(table.len(), before);
    }

    #[test]
    fn test_case_insensitive_fallback() {
        let table = MimeTable::default();
        assert_eq!(table.guess("PHOTO.PNG"), "image/png");
    }

    #[test]
    fn test_exact_match_wins() {
        let mut table = MimeTable::empty();
        table.insert(".Z", "application/x-compress");
        table.insert(".z", "application/other");
        assert_eq!(table.guess("file.Z"), "application/x-compress");
        assert_eq!(table.guess("file.z"), "application/other");
    }

    #[test]
    fn test_empty_table() {
        let table = MimeTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.guess("index.html"), FALLBACK_TYPE);
    }
}
