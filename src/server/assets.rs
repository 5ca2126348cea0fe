//! Bundled presentation assets.

use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

const STYLE: &str = include_str!("../../assets/style.css");
const SCRIPT: &str = include_str!("../../assets/similar.js");

/// Look up a bundled asset by file name: `(content type, body)`.
pub fn lookup(name: &str) -> Option<(&'static str, &'static str)> {
    match name {
        "style.css" => Some(("text/css; charset=utf-8", STYLE)),
        "similar.js" => Some(("text/javascript; charset=utf-8", SCRIPT)),
        _ => None,
    }
}

pub async fn asset(Path(name): Path<String>) -> Response {
    match lookup(&name) {
        Some((content_type, body)) => ([(header::CONTENT_TYPE, content_type)], body).into_response(),
        None => (StatusCode::NOT_FOUND, "Page not found.").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_assets_resolve() {
        let (content_type, body) = lookup("style.css").unwrap();
        assert!(content_type.starts_with("text/css"));
        assert!(!body.is_empty());

        let (content_type, _) = lookup("similar.js").unwrap();
        assert!(content_type.starts_with("text/javascript"));
    }

    #[test]
    fn unknown_assets_do_not_resolve() {
        assert!(lookup("../Cargo.toml").is_none());
        assert!(lookup("missing.css").is_none());
    }
}
