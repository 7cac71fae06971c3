//! Typed fail states for webhook delivery.

use reqwest::StatusCode;
use std::{error, fmt};

/// Sum type representing every possible unexceptional fail state.
#[derive(Debug)]
pub enum SendError {
    /// The webhook URL could not be parsed; nothing was sent.
    InvalidUrl(url::ParseError),
    /// The request never completed, e.g. DNS failure, refused connection or
    /// timeout. Wraps the underlying cause.
    RequestFailed(reqwest::Error),
    /// The endpoint answered with a status of 300 or above. The raw body is
    /// kept alongside the status code so that callers can decide for
    /// themselves whether a retry is worthwhile.
    Rejected { status: StatusCode, body: String },
}

impl SendError {
    /// The status code and body of a [SendError::Rejected], saving callers a
    /// `match` when branching on retryability.
    pub fn rejection(&self) -> Option<(StatusCode, &str)> {
        match self {
            SendError::Rejected { status, body } => Some((*status, body)),
            _ => None,
        }
    }
}

impl From<url::ParseError> for SendError {
    fn from(e: url::ParseError) -> Self {
        SendError::InvalidUrl(e)
    }
}

impl From<reqwest::Error> for SendError {
    fn from(e: reqwest::Error) -> Self {
        SendError::RequestFailed(e)
    }
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            SendError::InvalidUrl(e) => format!("Invalid webhook URL: {}", e),
            SendError::RequestFailed(e) => format!("Webhook request failed: {:?}", e),
            SendError::Rejected { status, body } => {
                format!("Webhook rejected: status={}, body={}", status.as_u16(), body)
            }
        };

        write!(f, "{}", x)
    }
}

impl error::Error for SendError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SendError::InvalidUrl(e) => Some(e),
            SendError::RequestFailed(e) => Some(e),
            SendError::Rejected { .. } => None,
        }
    }
}
