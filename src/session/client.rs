//! Client wrappers for the auth API endpoints. These helpers centralize the
//! endpoint paths and error mapping, keeping auth flows consistent across
//! shells and token material out of route code.

use crate::{
    api,
    config::AppConfig,
    errors::{ApiError, AuthError},
    session::types::{OtpRequest, OtpRequested, OtpVerify, Profile, TokenGrant},
};
use reqwest::header::HeaderMap;

/// Fallback message when the request-otp endpoint rejects without a detail.
const REQUEST_OTP_FALLBACK: &str = "Failed to send OTP";
/// Fallback message when the verify-otp endpoint rejects without a detail.
const VERIFY_OTP_FALLBACK: &str = "Invalid OTP";

/// Asks the server to send a one-time code to the phone number.
pub(crate) async fn request_otp(
    client: &reqwest::Client,
    config: &AppConfig,
    phone_number: &str,
) -> Result<OtpRequested, AuthError> {
    let url = api::build_url(&config.api_base_url, "/auth/request-otp");
    let body = OtpRequest {
        phone_number: phone_number.to_string(),
    };

    api::post_json(client, &url, &body)
        .await
        .map_err(|err| match err {
            ApiError::Http { detail, .. } => AuthError::OtpRequest(
                detail.unwrap_or_else(|| REQUEST_OTP_FALLBACK.to_string()),
            ),
            other => AuthError::Api(other),
        })
}

/// Exchanges a phone number and code for an access token.
/// The code must never be logged.
pub(crate) async fn verify_otp(
    client: &reqwest::Client,
    config: &AppConfig,
    phone_number: &str,
    code: &str,
) -> Result<TokenGrant, AuthError> {
    let url = api::build_url(&config.api_base_url, "/auth/verify-otp");
    let body = OtpVerify {
        phone_number: phone_number.to_string(),
        code: code.to_string(),
    };

    api::post_json(client, &url, &body)
        .await
        .map_err(|err| match err {
            ApiError::Http { detail, .. } => {
                AuthError::OtpVerify(detail.unwrap_or_else(|| VERIFY_OTP_FALLBACK.to_string()))
            }
            other => AuthError::Api(other),
        })
}

/// Fetches the authenticated user's profile with the provided bearer headers.
pub(crate) async fn fetch_me(
    client: &reqwest::Client,
    config: &AppConfig,
    headers: HeaderMap,
) -> Result<Profile, ApiError> {
    let url = api::build_url(&config.api_base_url, "/auth/me");
    api::get_json(client, &url, headers).await
}
