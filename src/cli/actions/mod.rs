pub mod auth;

/// Actions the CLI shell can run against the session store.
#[derive(Debug)]
pub enum Action {
    RequestOtp {
        phone_number: String,
    },
    VerifyOtp {
        phone_number: String,
        code: String,
    },
    Whoami,
    Logout,
}
