//! # Unmatched API Requests
//!
//! Default service of the `/api` scope. Without it actix would hand these
//! requests to the app's default service and answer with the browser app.

use actix_web::{HttpRequest, HttpResponse};
use common::content::{Collection, API_PREFIX};
use log::debug;
use serde_json::json;

/// - `405 Method Not Allowed` for a known endpoint hit with another method.
/// - `404 Not Found` for anything else under `/api`.
pub async fn process(req: HttpRequest) -> HttpResponse {
    let segment = req
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or_default()
        .trim_start_matches('/');
    let known = segment.is_empty() || Collection::from_path(segment).is_some();

    debug!("unmatched {} {}", req.method(), req.path());
    if known {
        HttpResponse::MethodNotAllowed().json(json!({ "detail": "Method Not Allowed" }))
    } else {
        HttpResponse::NotFound().json(json!({ "detail": "Not Found" }))
    }
}
