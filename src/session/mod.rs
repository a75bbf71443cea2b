//! Session feature module covering the OTP login flow, token persistence, and
//! derived auth state. It keeps authentication logic out of the shells and must
//! stay aligned with backend protocol expectations. This module touches
//! security boundaries and must avoid logging token material.
//!
//! Flow Overview: `request-otp` sends a code over SMS, `verify-otp` exchanges
//! phone + code for a bearer token which is persisted through [`TokenStore`],
//! and `/auth/me` hydrates the profile. Any profile-refresh failure invalidates
//! the whole session.

mod client;
mod storage;
mod store;
pub mod types;

pub use storage::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use store::{Session, SessionFlags};
