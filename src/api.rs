//! HTTP helpers for the JSON API with consistent timeouts and error handling.
//! The session store uses these helpers to avoid duplicating request setup and
//! to enforce a predictable timeout policy. The helpers do not store secrets or
//! tokens; they only attach headers provided by callers.

use crate::errors::ApiError;
use reqwest::header::HeaderMap;
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

/// Default request timeout applied to every call.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of error-detail characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

/// Error payload shape used by the backend for non-success responses.
#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Builds the shared HTTP client with the default timeout.
pub(crate) fn build_client() -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))
}

/// Builds a URL from the configured base URL and the provided path.
pub(crate) fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Posts JSON and parses a JSON response.
pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(map_request_error)?;

    handle_json_response(response).await
}

/// Fetches JSON with the provided headers, typically a bearer header set.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    headers: HeaderMap,
) -> Result<T, ApiError> {
    let response = client
        .get(url)
        .headers(headers)
        .send()
        .await
        .map_err(map_request_error)?;

    handle_json_response(response).await
}

/// Maps transport errors into `ApiError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        ApiError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with the server detail.
async fn handle_json_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Http {
            status: status.as_u16(),
            detail: error_detail(&body),
        })
    }
}

/// Extracts the `detail` message from an error body, trimmed and truncated.
fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let trimmed = parsed.detail.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_ERROR_CHARS).collect())
    }
}
