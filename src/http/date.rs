//! # Fechas HTTP
//! src/http/date.rs
//!
//! Formato IMF-fixdate (RFC 7231): `Sun, 06 Nov 1994 08:49:37 GMT`.

use chrono::{DateTime, Utc};
use std::time::SystemTime;

const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Formatea un instante como fecha HTTP
///
/// # Ejemplo
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use wasm_dev_server::http::date::format_http_date;
///
/// let t = UNIX_EPOCH + Duration::from_secs(784111777);
/// assert_eq!(format_http_date(t), "Sun, 06 Nov 1994 08:49:37 GMT");
/// ```
pub fn format_http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).format(HTTP_DATE_FORMAT).to_string()
}

/// Valor para el header `Date`
pub fn now() -> String {
    Utc::now().format(HTTP_DATE_FORMAT).to_string()
}

/// Parsea un header de fecha. Fechas inválidas se ignoran (`None`).
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

/// `true` si `modified` no es posterior a la fecha de `If-Modified-Since`.
///
/// Se compara con precisión de segundos, que es lo que viaja en el header.
pub fn not_modified_since(modified: SystemTime, if_modified_since: &str) -> bool {
    match parse_http_date(if_modified_since) {
        Some(since) => DateTime::<Utc>::from(modified).timestamp() <= since.timestamp(),
        None => false,
    }
}
