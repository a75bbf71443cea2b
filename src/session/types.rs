//! Request and response types for the auth API. The verify payload carries a
//! one-time code, so it must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OtpRequest {
    pub phone_number: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OtpVerify {
    pub phone_number: String,
    pub code: String,
}

/// Server acknowledgment for a requested OTP.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OtpRequested {
    pub message: String,
}

/// Access token issued after a successful OTP verification.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// User profile returned by `/auth/me` to hydrate session state.
/// Replaced wholesale on every refresh; unknown server fields are ignored.
pub struct Profile {
    pub id: String,
    pub phone_number: String,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub is_admin: bool,
    pub created_at: String,
}
