//! End-to-end session lifecycle against an in-process stub of the auth API.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use nudge::config::AppConfig;
use nudge::errors::{ApiError, AuthError};
use nudge::router::{GuardDecision, decide, paths};
use nudge::session::{FileTokenStore, Session, TokenStore};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

const PHONE: &str = "+15551234567";
const SMS_DOWN_PHONE: &str = "+19990000000";
const CODE: &str = "123456";
const TOKEN: &str = "token-abc123";

#[derive(Clone)]
struct Backend {
    inner: Arc<Mutex<BackendState>>,
}

struct BackendState {
    is_admin: bool,
    revoked: bool,
}

impl Backend {
    fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(BackendState {
                is_admin: false,
                revoked: false,
            })),
        }
    }

    fn revoke(&self) {
        self.inner.lock().expect("lock").revoked = true;
    }

    fn promote(&self) {
        self.inner.lock().expect("lock").is_admin = true;
    }
}

async fn request_otp(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["phone_number"] == SMS_DOWN_PHONE {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": "SMS delivery failed"})),
        );
    }
    (StatusCode::OK, Json(json!({"message": "OTP sent successfully"})))
}

async fn verify_otp(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["code"] == CODE {
        (StatusCode::OK, Json(json!({"access_token": TOKEN})))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Invalid or expired OTP"})),
        )
    }
}

async fn me(State(backend): State<Backend>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some(&format!("Bearer {TOKEN}"));

    let state = backend.inner.lock().expect("lock");
    if !authorized || state.revoked {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Could not validate credentials"})),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "id": "u-1",
            "phone_number": PHONE,
            "is_approved": true,
            "is_admin": state.is_admin,
            "created_at": "2025-11-02T09:30:00Z",
        })),
    )
}

/// Serves the stub backend on an ephemeral port, returning the API base URL.
async fn spawn_backend(backend: Backend) -> String {
    let app = Router::new()
        .route("/api/auth/request-otp", post(request_otp))
        .route("/api/auth/verify-otp", post(verify_otp))
        .route("/api/auth/me", get(me))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    format!("http://{addr}/api")
}

#[tokio::test]
async fn full_login_lifecycle() {
    let base_url = spawn_backend(Backend::new()).await;
    let data_dir = tempfile::tempdir().expect("tempdir");

    let mut session = Session::hydrate(
        AppConfig::new(&base_url),
        Box::new(FileTokenStore::new(data_dir.path())),
    )
    .await
    .expect("hydrate");

    assert!(!session.is_authenticated());
    assert!(session.bearer_headers().is_none());

    let requested = session.request_otp(PHONE).await.expect("request otp");
    assert_eq!(requested.message, "OTP sent successfully");

    session.verify_otp(PHONE, CODE).await.expect("verify otp");
    assert!(session.is_authenticated());
    assert!(session.is_approved());
    assert!(!session.is_admin());
    assert_eq!(session.user().expect("profile").phone_number, PHONE);

    // The granted token is persisted verbatim.
    let persisted = FileTokenStore::new(data_dir.path())
        .load()
        .expect("load token");
    assert_eq!(persisted.as_deref(), Some(TOKEN));

    // Guard decisions follow the live flags.
    let flags = session.flags();
    assert_eq!(decide(paths::DASHBOARD, flags), GuardDecision::Allow);
    assert_eq!(
        decide(paths::LANDING, flags),
        GuardDecision::Redirect(paths::DASHBOARD)
    );
    assert_eq!(
        decide(paths::ADMIN, flags),
        GuardDecision::Redirect(paths::DASHBOARD)
    );

    session.logout();
    assert!(!session.is_authenticated());
    assert!(!session.is_approved());
    assert!(!session.is_admin());
    assert!(session.user().is_none());
    assert_eq!(
        FileTokenStore::new(data_dir.path())
            .load()
            .expect("load token"),
        None
    );
}

#[tokio::test]
async fn hydrate_restores_persisted_session_before_returning() {
    let backend = Backend::new();
    backend.promote();
    let base_url = spawn_backend(backend).await;
    let data_dir = tempfile::tempdir().expect("tempdir");

    FileTokenStore::new(data_dir.path())
        .save(TOKEN)
        .expect("seed token");

    let session = Session::hydrate(
        AppConfig::new(&base_url),
        Box::new(FileTokenStore::new(data_dir.path())),
    )
    .await
    .expect("hydrate");

    // Profile is already loaded once hydrate returns; no half-hydrated state.
    assert!(session.is_authenticated());
    assert!(session.is_admin());
    assert_eq!(decide(paths::ADMIN, session.flags()), GuardDecision::Allow);
}

#[tokio::test]
async fn hydrate_with_rejected_token_comes_back_signed_out() {
    let base_url = spawn_backend(Backend::new()).await;
    let data_dir = tempfile::tempdir().expect("tempdir");

    FileTokenStore::new(data_dir.path())
        .save("stale-token")
        .expect("seed token");

    let session = Session::hydrate(
        AppConfig::new(&base_url),
        Box::new(FileTokenStore::new(data_dir.path())),
    )
    .await
    .expect("hydrate");

    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
    assert_eq!(
        FileTokenStore::new(data_dir.path())
            .load()
            .expect("load token"),
        None
    );
}

#[tokio::test]
async fn revoked_token_forces_full_logout_on_refresh() {
    let backend = Backend::new();
    let base_url = spawn_backend(backend.clone()).await;
    let data_dir = tempfile::tempdir().expect("tempdir");

    let mut session = Session::hydrate(
        AppConfig::new(&base_url),
        Box::new(FileTokenStore::new(data_dir.path())),
    )
    .await
    .expect("hydrate");
    session.verify_otp(PHONE, CODE).await.expect("verify otp");
    assert!(session.is_authenticated());

    backend.revoke();
    session.refresh_profile().await;

    // A 401 clears token, profile, and persisted storage entirely.
    assert!(!session.is_authenticated());
    assert!(!session.is_approved());
    assert!(!session.is_admin());
    assert!(session.user().is_none());
    assert!(session.bearer_headers().is_none());
    assert_eq!(
        FileTokenStore::new(data_dir.path())
            .load()
            .expect("load token"),
        None
    );
    assert_eq!(
        decide(paths::DASHBOARD, session.flags()),
        GuardDecision::Redirect(paths::LOGIN)
    );
}

#[tokio::test]
async fn otp_errors_carry_the_server_detail() {
    let base_url = spawn_backend(Backend::new()).await;
    let data_dir = tempfile::tempdir().expect("tempdir");

    let mut session = Session::hydrate(
        AppConfig::new(&base_url),
        Box::new(FileTokenStore::new(data_dir.path())),
    )
    .await
    .expect("hydrate");

    let err = session
        .request_otp(SMS_DOWN_PHONE)
        .await
        .expect_err("request should fail");
    assert!(matches!(err, AuthError::OtpRequest(ref message) if message == "SMS delivery failed"));

    let err = session
        .verify_otp(PHONE, "000000")
        .await
        .expect_err("verify should fail");
    assert!(matches!(err, AuthError::OtpVerify(ref message) if message == "Invalid or expired OTP"));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn transport_failures_surface_as_api_errors() {
    // Nothing listens on port 9; requests fail before reaching any backend.
    let data_dir = tempfile::tempdir().expect("tempdir");
    let session = Session::hydrate(
        AppConfig::new("http://127.0.0.1:9/api"),
        Box::new(FileTokenStore::new(data_dir.path())),
    )
    .await
    .expect("hydrate");

    let err = session
        .request_otp(PHONE)
        .await
        .expect_err("request should fail");
    assert!(matches!(err, AuthError::Api(ApiError::Network(_))));
}
