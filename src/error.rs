//! Structured errors surfaced to the transport.
//!
//! Every failure carries the numeric status code reported by the underlying
//! credential primitive plus the name of the primitive that failed, so the
//! embedding application can tell failure causes apart without parsing
//! message strings. Nothing here is retried or swallowed; propagation is the
//! caller's job.

use thiserror::Error;

/// Failure reported while materialising a credential.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// The native credential-construction primitive returned a non-success
    /// status.
    #[error("{operation} returned native status {code}")]
    Native {
        /// The raw status code from the native primitive, never zero.
        code: i32,
        /// Name of the primitive that failed, e.g. `"ssh key memory
        /// construction"`.
        operation: &'static str,
    },
}

impl CredentialError {
    /// The native status code carried by this error.
    pub fn code(&self) -> i32 {
        match self {
            Self::Native { code, .. } => *code,
        }
    }

    /// The name of the operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Native { operation, .. } => operation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_error_display() {
        let err = CredentialError::Native {
            code: -1,
            operation: "ssh key memory construction",
        };
        assert_eq!(
            err.to_string(),
            "ssh key memory construction returned native status -1"
        );
    }

    #[test]
    fn test_accessors() {
        let err = CredentialError::Native {
            code: -7,
            operation: "plaintext credential construction",
        };
        assert_eq!(err.code(), -7);
        assert_eq!(err.operation(), "plaintext credential construction");
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<CredentialError>();
    }
}
