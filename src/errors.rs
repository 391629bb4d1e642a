use axum::http::StatusCode;
use std::fmt;

/// Failures of the local store. Corruption is only possible on load and is
/// degraded to an empty store there; persistence failures abort the save
/// that triggered them.
#[derive(Debug)]
pub enum StoreError {
    Corrupt(String),
    Persistence(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corrupt(msg) => write!(f, "attendance data is corrupt: {msg}"),
            Self::Persistence(msg) => write!(f, "local persistence failed: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
