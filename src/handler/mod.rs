//! # Handler de archivos estáticos
//! src/handler/mod.rs
//!
//! Convierte un request en una lectura del filesystem bajo el directorio raíz.
//!
//! ```text
//! Request → translate_path → ¿directorio? → redirect / index.html / listado
//!                          → ¿archivo?    → 200 (o 304) con Content-Type
//!                          → otro caso    → 404
//! ```
//!
//! La tabla de tipos MIME se recibe en el constructor; el handler nunca la
//! modifica.

pub mod listing;
pub mod path;

use crate::http::date::{format_http_date, not_modified_since, now};
use crate::http::{Method, Request, Response, StatusCode};
use crate::mime::MimeTable;
use log::debug;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Archivos que se sirven en lugar del listado de un directorio
pub const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Valor del header `Server`
pub const SERVER_NAME: &str = concat!("wasm_dev_server/", env!("CARGO_PKG_VERSION"));

/// Handler que sirve archivos desde `root`
#[derive(Debug, Clone)]
pub struct FileHandler {
    root: PathBuf,
    mime: MimeTable,
}

impl FileHandler {
    /// Crea un handler con su raíz y su tabla de tipos
    ///
    /// # Ejemplo
    /// ```
    /// use wasm_dev_server::handler::FileHandler;
    /// use wasm_dev_server::mime::MimeTable;
    ///
    /// let mut mime = MimeTable::default();
    /// mime.insert(".wasm", "application/wasm");
    /// let handler = FileHandler::new(".", mime);
    /// assert_eq!(handler.mime().guess("a.wasm"), "application/wasm");
    /// ```
    pub fn new<P: Into<PathBuf>>(root: P, mime: MimeTable) -> Self {
        Self {
            root: root.into(),
            mime,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn mime(&self) -> &MimeTable {
        &self.mime
    }

    /// Genera la respuesta completa para un request ya parseado.
    ///
    /// Un HEAD recibe exactamente los headers del GET equivalente, sin body.
    pub fn handle(&self, request: &Request) -> Response {
        let mut response = self.respond(request);
        add_common_headers(&mut response);

        match request.method() {
            Method::GET => response,
            Method::HEAD => response.without_body(),
        }
    }

    fn respond(&self, request: &Request) -> Response {
        let url_path = request.path();
        let fs_path = path::translate_path(&self.root, url_path);

        if fs_path.is_dir() {
            if !url_path.ends_with('/') {
                let mut location = format!("{}/", url_path);
                if let Some(query) = request.query() {
                    location.push('?');
                    location.push_str(query);
                }
                return Response::redirect(&location);
            }

            for index in INDEX_FILES {
                let candidate = fs_path.join(index);
                if candidate.is_file() {
                    return self.serve_file(&candidate, request);
                }
            }

            let display_path = path::percent_decode(url_path);
            return listing::list_directory(&fs_path, &display_path);
        }

        // "archivo.txt/" no es un directorio
        if url_path.ends_with('/') {
            return Response::error(StatusCode::NotFound, "File not found");
        }

        self.serve_file(&fs_path, request)
    }

    fn serve_file(&self, fs_path: &Path, request: &Request) -> Response {
        let file = match File::open(fs_path) {
            Ok(file) => file,
            Err(e) => {
                debug!("open {} failed: {}", fs_path.display(), e);
                return Response::error(StatusCode::NotFound, "File not found");
            }
        };

        let metadata = match file.metadata() {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => return Response::error(StatusCode::NotFound, "File not found"),
        };

        let modified = metadata.modified().ok();

        // If-None-Match tiene prioridad; como no emitimos ETag, se ignora la fecha
        if let (Some(modified), Some(since), None) = (
            modified,
            request.header("If-Modified-Since"),
            request.header("If-None-Match"),
        ) {
            if not_modified_since(modified, since) {
                return Response::new(StatusCode::NotModified)
                    .with_header("Last-Modified", &format_http_date(modified));
            }
        }

        let mut response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", self.mime.guess(fs_path))
            .with_file(file, metadata.len());

        if let Some(modified) = modified {
            response.add_header("Last-Modified", &format_http_date(modified));
        }

        response
    }
}

/// Headers comunes a todas las respuestas
pub fn add_common_headers(response: &mut Response) {
    response.add_header("Server", SERVER_NAME);
    response.add_header("Date", &now());
    response.add_header("Connection", "close");
}
