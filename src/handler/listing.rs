//! # Listado de directorios
//! src/handler/listing.rs
//!
//! Página HTML con las entradas de un directorio que no tiene `index.html`.

use super::path::percent_encode;
use crate::http::response::escape_html;
use crate::http::{Response, StatusCode};
use log::debug;
use std::fs;
use std::path::Path;

/// Una entrada del listado
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Nombre en disco, sin sufijos; es la clave de orden
    pub name: String,

    /// Texto visible (con `/` para directorios y `@` para symlinks)
    pub display_name: String,

    /// Destino del enlace, relativo al directorio actual
    pub link_name: String,
}

impl Entry {
    fn from_dir_entry(entry: &fs::DirEntry) -> Self {
        let name = entry.file_name().to_string_lossy().into_owned();
        let mut display_name = name.clone();
        let mut link_name = name.clone();

        // file_type() no sigue symlinks; Path::is_dir() sí
        let is_symlink = entry.file_type().map(|t| t.is_symlink()).unwrap_or(false);

        if entry.path().is_dir() {
            display_name.push('/');
            link_name.push('/');
        }
        if is_symlink {
            // Un symlink a directorio enlaza con '/' pero se muestra con '@'
            display_name = format!("{}@", name);
        }

        Self {
            name,
            display_name,
            link_name,
        }
    }
}

/// Lee las entradas de `dir` ordenadas sin distinguir mayúsculas
pub fn read_entries(dir: &Path) -> std::io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        entries.push(Entry::from_dir_entry(&entry?));
    }
    entries.sort_by_key(|e| e.name.to_lowercase());
    Ok(entries)
}

/// Genera la página HTML del listado
pub fn render(display_path: &str, entries: &[Entry]) -> String {
    let title = format!("Directory listing for {}", escape_html(display_path));

    let mut html = String::new();
    html.push_str("<!DOCTYPE HTML>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", title));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", title));
    html.push_str("<hr>\n<ul>\n");
    for entry in entries {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            percent_encode(&entry.link_name),
            escape_html(&entry.display_name)
        ));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}

/// Respuesta con el listado de `dir`, o 404 si no se puede leer
pub fn list_directory(dir: &Path, display_path: &str) -> Response {
    match read_entries(dir) {
        Ok(entries) => Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/html; charset=utf-8")
            .with_body(&render(display_path, &entries)),
        Err(e) => {
            debug!("read_dir {} failed: {}", dir.display(), e);
            Response::error(StatusCode::NotFound, "No permission to list directory")
        }
    }
}
