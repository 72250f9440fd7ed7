//! Error types for the library layer.

use thiserror::Error;

/// Errors produced by the opportunity search client.
#[derive(Error, Debug)]
pub enum SamGovError {
    /// Caller input failed validation. Raised before any request is sent.
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidArgument {
        field: &'static str,
        value: String,
        reason: String,
    },
    /// A page request failed (transport, non-2xx status, or undecodable body).
    #[error("Request failed: {0}")]
    RequestFailed(#[from] samgov_api::Error),
}

impl SamGovError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field for [`SamGovError::InvalidArgument`].
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { field, .. } => Some(*field),
            Self::RequestFailed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let err = SamGovError::invalid("limit", 1001, "must be between 0 and 1000");
        assert_eq!(
            err.to_string(),
            "Invalid limit '1001': must be between 0 and 1000"
        );
        assert_eq!(err.field(), Some("limit"));
    }

    #[test]
    fn request_failed_wraps_api_error() {
        let err: SamGovError = samgov_api::Error::HttpStatus {
            status: 503,
            body: String::new(),
        }
        .into();
        assert!(err.to_string().contains("503"));
        assert_eq!(err.field(), None);
        assert!(std::error::Error::source(&err).is_some());
    }
}
