//! The session store: bearer-token lifecycle and derived auth state. The store
//! is an explicit value handed to whichever shell drives it; it is hydrated
//! once, awaited, before the router starts evaluating guards. Only the access
//! token is persisted; the profile lives in memory and is refreshed from the
//! server.

use crate::{
    api,
    config::AppConfig,
    errors::{ApiError, AuthError},
    session::{
        client,
        storage::TokenStore,
        types::{OtpRequested, Profile},
    },
};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Derived read-only auth flags consumed by the navigation guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionFlags {
    pub is_authenticated: bool,
    pub is_approved: bool,
    pub is_admin: bool,
}

/// Auth session state: current bearer token and user profile.
///
/// Invariant: `user` is `Some` only while a token is held; any profile-refresh
/// failure clears both (see [`Session::refresh_profile`]).
pub struct Session {
    config: AppConfig,
    client: reqwest::Client,
    store: Box<dyn TokenStore>,
    token: Option<SecretString>,
    user: Option<Profile>,
}

impl Session {
    /// Builds a fresh, unauthenticated session without touching storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: AppConfig, store: Box<dyn TokenStore>) -> Result<Self, ApiError> {
        Ok(Self {
            config,
            client: api::build_client()?,
            store,
            token: None,
            user: None,
        })
    }

    /// Restores the persisted session, awaiting the initial profile refresh so
    /// callers never observe a half-hydrated state. When the persisted token is
    /// rejected the session comes back cleared, not errored.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or storage cannot be
    /// read.
    pub async fn hydrate(config: AppConfig, store: Box<dyn TokenStore>) -> Result<Self, ApiError> {
        let mut session = Self::new(config, store)?;

        if let Some(token) = session.store.load()? {
            session.token = Some(SecretString::from(token));
            tracing::debug!("Restored persisted token, refreshing profile");
            session.refresh_profile().await;
        }

        Ok(session)
    }

    /// Asks the server to send a one-time code to the phone number.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::OtpRequest`] with the server's detail message when
    /// the endpoint rejects, or [`AuthError::Api`] on transport failures.
    pub async fn request_otp(&self, phone_number: &str) -> Result<OtpRequested, AuthError> {
        let requested = client::request_otp(&self.client, &self.config, phone_number).await?;
        tracing::debug!("OTP requested");
        Ok(requested)
    }

    /// Verifies the one-time code and establishes the session: the granted
    /// token is stored in memory and persisted, then the profile is refreshed
    /// before returning. Refresh failures are swallowed into a state change,
    /// never surfaced here.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::OtpVerify`] with the server's detail message when
    /// the code is rejected, or [`AuthError::Api`] on transport failures.
    pub async fn verify_otp(&mut self, phone_number: &str, code: &str) -> Result<(), AuthError> {
        let grant = client::verify_otp(&self.client, &self.config, phone_number, code).await?;

        if let Err(err) = self.store.save(&grant.access_token) {
            // Keep the in-memory session usable even when persistence fails.
            tracing::warn!(error = %err, "Failed to persist access token");
        }
        self.token = Some(SecretString::from(grant.access_token));
        tracing::info!("OTP verified, session established");

        self.refresh_profile().await;
        Ok(())
    }

    /// Refreshes the profile from `/auth/me`. No-op without a token. Any
    /// failure — HTTP rejection or transport — invalidates the session with a
    /// full logout rather than surfacing an error.
    pub async fn refresh_profile(&mut self) {
        let Some(headers) = self.bearer_headers() else {
            return;
        };

        match client::fetch_me(&self.client, &self.config, headers).await {
            Ok(profile) => {
                tracing::debug!(user_id = %profile.id, "Profile refreshed");
                self.user = Some(profile);
            }
            Err(ApiError::Http { status, .. }) => {
                tracing::warn!(status, "Profile fetch rejected, clearing session");
                self.logout();
            }
            Err(err) => {
                tracing::warn!(error = %err, "Profile fetch failed, clearing session");
                self.logout();
            }
        }
    }

    /// Clears the in-memory token and profile and removes the persisted token.
    /// Idempotent; storage failures are logged and swallowed.
    pub fn logout(&mut self) {
        if self.token.is_some() {
            tracing::info!("Session cleared");
        }
        self.token = None;
        self.user = None;

        if let Err(err) = self.store.clear() {
            tracing::warn!(error = %err, "Failed to remove persisted token");
        }
    }

    /// Header set for authenticated requests, or `None` when no token is held.
    #[must_use]
    pub fn bearer_headers(&self) -> Option<HeaderMap> {
        let token = self.token.as_ref()?;
        let mut value =
            HeaderValue::from_str(&format!("Bearer {}", token.expose_secret())).ok()?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Some(headers)
    }

    /// Current profile, if one has been loaded.
    #[must_use]
    pub fn user(&self) -> Option<&Profile> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_approved)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_admin)
    }

    /// Snapshot of the derived flags for guard evaluation.
    #[must_use]
    pub fn flags(&self) -> SessionFlags {
        SessionFlags {
            is_authenticated: self.is_authenticated(),
            is_approved: self.is_approved(),
            is_admin: self.is_admin(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // SecretString already redacts, but keep the token out of the output
        // entirely.
        formatter
            .debug_struct("Session")
            .field("api_base_url", &self.config.api_base_url)
            .field("authenticated", &self.token.is_some())
            .field("user", &self.user)
            .finish()
    }
}
