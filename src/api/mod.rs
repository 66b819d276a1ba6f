//! REST Service Bindings
//!
//! Async wrappers over the remote todo/user services, organized by domain.

mod todos;
mod users;

use serde::Deserialize;
use thiserror::Error;

pub use todos::*;
pub use users::*;

const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Failure of a remote call, either in transport or reported by the server
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Server {
        status: reqwest::StatusCode,
        message: String,
    },
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Service base URL; a `TODO_API_BASE` global set on `window` before the
/// bundle loads overrides the localhost default.
pub fn api_base() -> String {
    js_sys::Reflect::get(
        &js_sys::global(),
        &wasm_bindgen::JsValue::from_str("TODO_API_BASE"),
    )
    .ok()
    .and_then(|value| value.as_string())
    .filter(|base| !base.is_empty())
    .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Pass a 2xx response through, turn anything else into `ApiError::Server`
/// with the best-effort message from a `{ "message": ... }` body.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| format!("request failed with status {status}"));
    Err(ApiError::Server { status, message })
}
