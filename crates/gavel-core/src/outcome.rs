//! Failure classification.
//!
//! Every rejected remote call is classified into exactly one [`Outcome`]
//! before it reaches any view; views never inspect transport codes or
//! status errors directly. A successful call is the `Ok` branch of
//! `Result` and never passes through here.

use crate::error::{Error, StatusCode};

/// The closed classification of a failed remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The session is missing, expired, or rejected; re-authentication is
    /// required.
    AuthRequired,
    /// The caller is authenticated but not allowed to do this.
    Forbidden,
    /// The addressed entity does not exist.
    NotFound,
    /// Any other failure, carrying a human-readable message.
    Transient(String),
}

/// Classify a failure. Total: every possible error maps to exactly one
/// outcome; nothing is dropped.
pub fn classify(error: &Error) -> Outcome {
    match error {
        Error::Status(status) => match status.code {
            StatusCode::Unauthenticated => Outcome::AuthRequired,
            StatusCode::PermissionDenied => Outcome::Forbidden,
            StatusCode::NotFound => Outcome::NotFound,
            _ => Outcome::Transient(status.to_string()),
        },
        Error::Transport(_) | Error::Construction(_) => Outcome::Transient(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StatusError, TransportError};

    fn status(code: StatusCode) -> Error {
        Error::Status(StatusError::new(code, Some("boom".into())))
    }

    #[test]
    fn auth_failures_require_login() {
        assert_eq!(classify(&status(StatusCode::Unauthenticated)), Outcome::AuthRequired);
    }

    #[test]
    fn permission_and_lookup_failures_redirect() {
        assert_eq!(classify(&status(StatusCode::PermissionDenied)), Outcome::Forbidden);
        assert_eq!(classify(&status(StatusCode::NotFound)), Outcome::NotFound);
    }

    #[test]
    fn everything_else_is_transient_with_a_message() {
        for code in [
            StatusCode::InvalidArgument,
            StatusCode::AlreadyExists,
            StatusCode::FailedPrecondition,
            StatusCode::Unimplemented,
            StatusCode::Internal,
            StatusCode::Unknown,
        ] {
            match classify(&status(code)) {
                Outcome::Transient(message) => assert!(message.contains("boom")),
                other => panic!("expected Transient for {:?}, got {:?}", code, other),
            }
        }

        let transport = Error::Transport(TransportError::Timeout);
        assert!(matches!(classify(&transport), Outcome::Transient(_)));

        let construction = Error::Construction("bad field".into());
        assert!(matches!(classify(&construction), Outcome::Transient(_)));
    }
}
