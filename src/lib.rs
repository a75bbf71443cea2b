//! Client-side session and routing core for the Nudge reminders app.
//!
//! ## Core Flows
//!
//! ### Login
//!
//! 1. **Request:** The shell posts a phone number to `/auth/request-otp` via
//!    [`session::Session::request_otp`] and shows the server acknowledgment.
//! 2. **Verify:** The one-time code goes to `/auth/verify-otp` through
//!    [`session::Session::verify_otp`]; on success the access token is stored in
//!    memory and in the configured [`session::TokenStore`], and the profile is
//!    refreshed before the call returns.
//!
//! ### Navigation
//!
//! Route transitions are gated by [`router::decide`], a pure function over the
//! static route table and the current [`session::SessionFlags`]. Session state is
//! hydrated once, awaited, via [`session::Session::hydrate`] so the first guard
//! evaluation never races the initial profile fetch.
//!
//! The session store is an explicit value handed to whatever shell drives it (a
//! web front end or the bundled `nudge` CLI); there is no global singleton. Callers
//! must still avoid logging token material.

mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod router;
pub mod session;
