//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status. `code` and `details` come from
    /// the API's error object when the body could be parsed.
    #[error("Request failed with status {status}: {}", .details.as_deref().unwrap_or("no details"))]
    HttpStatus {
        status: u16,
        code: Option<String>,
        details: Option<String>,
    },
    /// A success response carried a body that is not valid JSON for the expected type.
    #[error("Malformed response: {message}")]
    Parse { message: String },
}

impl Error {
    /// True when the API answered with its "no cards matched" error object.
    /// A 404 without a parseable `not_found` body is an ordinary failure.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::HttpStatus { status, code, .. } => {
                *status == 404 && code.as_deref() == Some("not_found")
            }
            _ => false,
        }
    }
}
