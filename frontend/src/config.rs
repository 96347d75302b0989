//! Build-time configuration of the browser app.

use common::content::API_PREFIX;

/// Origin of the content API, captured when the app is compiled
/// (`BACKEND_URL=https://cms.example trunk build`). Unset means same origin.
const BACKEND_URL: Option<&str> = option_env!("BACKEND_URL");

/// Base URL every content request is issued against.
pub fn api_base() -> String {
    api_base_for(BACKEND_URL.unwrap_or_default())
}

pub fn api_base_for(origin: &str) -> String {
    format!("{}{}", origin.trim().trim_end_matches('/'), API_PREFIX)
}
