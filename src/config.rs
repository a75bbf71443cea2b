//! Runtime configuration for the API endpoint. The base URL comes from the
//! `NUDGE_API_URL` environment variable (or the shell's own arguments) with a
//! local development default. Configuration values are public; do not store
//! secrets here.

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "NUDGE_API_URL";

/// Default API base used when nothing is configured, matching the backend's
/// local development address.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Client configuration shared by the session store and the CLI shell.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Builds a config around the provided base URL, normalizing it first.
    /// Blank values fall back to the default.
    #[must_use]
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        }
    }

    /// Loads config from the environment, falling back to the default base URL.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(value) => Self::new(&value),
            Err(_) => Self::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

/// Trims surrounding whitespace and a trailing slash; rejects empty values.
fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{API_URL_ENV, AppConfig, DEFAULT_API_BASE_URL, normalize_base_url};

    #[test]
    fn normalize_base_url_trims_and_rejects_empty() {
        assert_eq!(normalize_base_url(""), None);
        assert_eq!(normalize_base_url("   "), None);
        assert_eq!(normalize_base_url("/"), None);
        assert_eq!(
            normalize_base_url("  https://api.nudge.dev/api/ "),
            Some("https://api.nudge.dev/api".to_string())
        );
    }

    #[test]
    fn from_env_reads_override() {
        temp_env::with_var(API_URL_ENV, Some("https://api.nudge.dev/api/"), || {
            let config = AppConfig::from_env();
            assert_eq!(config.api_base_url, "https://api.nudge.dev/api");
        });
    }

    #[test]
    fn from_env_falls_back_to_default() {
        temp_env::with_var(API_URL_ENV, None::<String>, || {
            let config = AppConfig::from_env();
            assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        });
    }

    #[test]
    fn blank_override_falls_back_to_default() {
        temp_env::with_var(API_URL_ENV, Some("   "), || {
            let config = AppConfig::from_env();
            assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        });
    }
}
