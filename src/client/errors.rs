use reqwest::StatusCode;
use thiserror::Error;

/// Classification of every way a backend call can go wrong.
///
/// `Unauthenticated` is reserved for 401s on token-bearing requests; a 401
/// on `/login` is a credential rejection and surfaces as `Rejected` with
/// the server's message intact.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication rejected by the server")]
    Unauthenticated,

    #[error("request rejected with status {status}")]
    Rejected {
        status: StatusCode,
        /// Server-provided `message`, when the body had one.
        message: Option<String>,
    },

    #[error("network error")]
    Network(#[from] reqwest::Error),

    #[error("invalid response body")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The message the server attached to a rejection, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
