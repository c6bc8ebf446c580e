//! Fetch errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {message}")]
    Client { message: String },
    #[error("Request failed: {message}")]
    RequestFailed { message: String },
    #[error("Timeout")]
    Timeout,
    #[error("Unexpected status: {status}")]
    Status { status: u16 },
    #[error("Failed to read body: {message}")]
    Body { message: String },
}

impl FetchError {
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::RequestFailed {
                message: err.to_string(),
            }
        }
    }
}
