use std::fmt;

/// Transport, protocol, and storage failures surfaced by API calls.
#[derive(Clone, Debug)]
pub enum ApiError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, detail: Option<String> },
    Parse(String),
    Storage(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(message) => write!(formatter, "Config error: {message}"),
            ApiError::Network(message) => write!(formatter, "Network error: {message}"),
            ApiError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            ApiError::Http { status, detail } => match detail {
                Some(message) => write!(formatter, "Request failed ({status}): {message}"),
                None => write!(formatter, "Request failed ({status})"),
            },
            ApiError::Parse(message) => write!(formatter, "Response error: {message}"),
            ApiError::Storage(message) => write!(formatter, "Storage error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Authentication flow errors. The OTP variants carry the server-provided
/// `detail` message or a generic fallback, ready to surface in a login form.
#[derive(Clone, Debug)]
pub enum AuthError {
    OtpRequest(String),
    OtpVerify(String),
    Api(ApiError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::OtpRequest(message) | AuthError::OtpVerify(message) => {
                write!(formatter, "{message}")
            }
            AuthError::Api(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<ApiError> for AuthError {
    fn from(error: ApiError) -> Self {
        AuthError::Api(error)
    }
}

/// Failure reading or writing the persisted token.
#[derive(Clone, Debug)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.message)
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for ApiError {
    fn from(error: StorageError) -> Self {
        ApiError::Storage(error.message)
    }
}
