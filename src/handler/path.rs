//! # Traducción de paths
//! src/handler/path.rs
//!
//! Convierte el path de la URL en una ruta del filesystem que nunca sale del
//! directorio raíz, y codifica/decodifica percent-encoding.

use std::path::{Path, PathBuf};

/// Traduce un path de URL (sin query) a una ruta bajo `root`.
///
/// Los componentes vacíos y `.` se descartan; `..` retrocede un nivel pero
/// nunca por encima de la raíz.
///
/// # Ejemplo
/// ```
/// use std::path::Path;
/// use wasm_dev_server::handler::path::translate_path;
///
/// let root = Path::new("/srv/docs");
/// assert_eq!(translate_path(root, "/pkg/app.wasm"), root.join("pkg/app.wasm"));
/// assert_eq!(translate_path(root, "/../../etc/passwd"), root.join("etc/passwd"));
/// ```
pub fn translate_path(root: &Path, url_path: &str) -> PathBuf {
    let decoded = percent_decode(url_path);

    let mut parts: Vec<&str> = Vec::new();
    for word in decoded.split('/') {
        match word {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            // Separadores de Windows dentro de un componente
            w if w.contains('\\') => {}
            w => parts.push(w),
        }
    }

    let mut path = root.to_path_buf();
    for part in parts {
        path.push(part);
    }
    path
}

/// Decodifica `%XX`. Secuencias inválidas quedan tal cual y los bytes que
/// no forman UTF-8 válido se reemplazan.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Codifica todo lo que no sea unreserved (RFC 3986) ni `/`
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> PathBuf {
        PathBuf::from("/srv/www")
    }

    #[test]
    fn test_translate_root() {
        assert_eq!(translate_path(&root(), "/"), root());
        assert_eq!(translate_path(&root(), ""), root());
    }

    #[test]
    fn test_translate_nested() {
        assert_eq!(
            translate_path(&root(), "/docs/1.bootstrap.js"),
            root().join("docs").join("1.bootstrap.js")
        );
    }

    #[test]
    fn test_translate_traversal_stays_in_root() {
        assert_eq!(translate_path(&root(), "/../secret"), root().join("secret"));
        assert_eq!(translate_path(&root(), "/a/../../b"), root().join("b"));
        assert_eq!(translate_path(&root(), "/%2e%2e/%2e%2e/x"), root().join("x"));
    }

    #[test]
    fn test_translate_dot_and_empty_components() {
        assert_eq!(translate_path(&root(), "//a/./b//"), root().join("a").join("b"));
    }

    #[test]
    fn test_translate_decodes() {
        assert_eq!(translate_path(&root(), "/my%20file.txt"), root().join("my file.txt"));
    }

    #[test]
    fn test_translate_skips_backslash_components() {
        assert_eq!(translate_path(&root(), "/..\\..\\x/y"), root().join("y"));
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("a%20b"), "a b");
        assert_eq!(percent_decode("%C3%B1"), "ñ");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%4"), "%4");
    }

    #[test]
    fn test_percent_encode() {
        assert_eq!(percent_encode("a b.txt"), "a%20b.txt");
        assert_eq!(percent_encode("dir/"), "dir/");
        assert_eq!(percent_encode("ñ"), "%C3%B1");
        assert_eq!(percent_encode("#?&"), "%23%3F%26");
    }
}
