//! Classification of account-endpoint failures.
//!
//! Every failed call collapses into one of four kinds so the UI can tell a
//! duplicate email from a dead network without inspecting transport details.
//! The classification is terminal for the attempt that produced it: nothing
//! here is retried.

use reqwest::StatusCode;
use thiserror::Error;

/// Why an account operation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// The backend rejected the request as invalid (HTTP 400/422).
    #[error("the server rejected the request: {0}")]
    Rejected(String),

    /// An account with the same email already exists (HTTP 409).
    #[error("an account with this email already exists")]
    Conflict,

    /// The request never produced a response.
    #[error("could not reach the server: {0}")]
    Transport(String),

    /// Anything the other kinds do not cover.
    #[error("unexpected server error: {0}")]
    Unknown(String),
}

impl AccountError {
    /// Map a non-success HTTP status, plus the server's message if it sent
    /// one, onto an error kind.
    pub(crate) fn from_status(status: StatusCode, detail: Option<String>) -> Self {
        let detail = detail.filter(|d| !d.is_empty());
        match status {
            StatusCode::CONFLICT => AccountError::Conflict,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                AccountError::Rejected(detail.unwrap_or_else(|| status.to_string()))
            }
            _ => AccountError::Unknown(detail.unwrap_or_else(|| status.to_string())),
        }
    }
}

impl From<reqwest::Error> for AccountError {
    fn from(err: reqwest::Error) -> Self {
        AccountError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_status_maps_to_conflict() {
        assert_eq!(
            AccountError::from_status(StatusCode::CONFLICT, Some("duplicate".into())),
            AccountError::Conflict,
        );
    }

    #[test]
    fn validation_statuses_keep_the_server_message() {
        assert_eq!(
            AccountError::from_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                Some("password too weak".into()),
            ),
            AccountError::Rejected("password too weak".into()),
        );
    }

    #[test]
    fn missing_detail_falls_back_to_the_status_line() {
        assert_eq!(
            AccountError::from_status(StatusCode::BAD_REQUEST, None),
            AccountError::Rejected("400 Bad Request".into()),
        );
        assert_eq!(
            AccountError::from_status(StatusCode::INTERNAL_SERVER_ERROR, Some(String::new())),
            AccountError::Unknown("500 Internal Server Error".into()),
        );
    }
}
