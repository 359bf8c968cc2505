//! Error taxonomy for every backend call.
//!
//! The original pages were inconsistent: some logged and went silent, some
//! raised blocking alerts. Here every failure becomes one [`ApiError`] and
//! every page presents it through [`ApiError::user_message`], so the only
//! place allowed to swallow an error is a dashboard stat fetcher (which logs
//! and keeps its zeros).

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),

    /// 401 — the session is no longer valid; callers clear it and return to login.
    #[error("not authenticated")]
    Unauthorized,

    /// 400 — the server rejected the input; carries the server's detail verbatim.
    #[error("{0}")]
    Validation(String),

    /// 404
    #[error("not found")]
    NotFound,

    /// Any other non-success status.
    #[error("server error {status}: {detail}")]
    Server { status: u16, detail: String },
}

impl ApiError {
    pub fn from_status(status: u16, detail: String) -> Self {
        match status {
            400 => ApiError::Validation(detail),
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => ApiError::Server { status, detail },
        }
    }

    /// The one sentence shown in page error banners.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            ApiError::Validation(detail) if !detail.is_empty() => detail.clone(),
            ApiError::Validation(_) => "The server rejected that request.".to_string(),
            ApiError::NotFound => "That item no longer exists.".to_string(),
            ApiError::Server { .. } => "Something went wrong on the server. Try again.".to_string(),
        }
    }

    /// Whether the session should be discarded and the user sent to login.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// The duplicate-rating rejection gets its own message in the UI, distinct
    /// from a generic failure.
    pub fn is_already_rated(&self) -> bool {
        matches!(self, ApiError::Validation(detail) if detail.to_lowercase().contains("already rated"))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(
            ApiError::from_status(400, "bad".into()),
            ApiError::Validation("bad".into())
        );
        assert_eq!(ApiError::from_status(401, String::new()), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404, String::new()), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(500, "boom".into()),
            ApiError::Server { status: 500, detail: "boom".into() }
        );
    }

    #[test]
    fn test_already_rated_is_distinct_from_other_validation() {
        let dup = ApiError::from_status(400, "You have already rated this event".into());
        assert!(dup.is_already_rated());
        assert_eq!(dup.user_message(), "You have already rated this event");

        let other = ApiError::from_status(400, "seats_booked must be positive".into());
        assert!(!other.is_already_rated());

        let not_validation = ApiError::from_status(500, "already rated".into());
        assert!(!not_validation.is_already_rated());
    }

    #[test]
    fn test_only_unauthorized_expires_the_session() {
        assert!(ApiError::Unauthorized.is_auth_failure());
        assert!(!ApiError::NotFound.is_auth_failure());
        assert!(!ApiError::Transport("x".into()).is_auth_failure());
    }
}
