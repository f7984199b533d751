//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.
//! Source-reader adapters wrap their transport errors in [`ReadFailure`],
//! which is the only failure the application core ever sees from a remote
//! read.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum FieldscopeError {
    /// A domain invariant was violated during construction.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A remote source read failed.
    #[error("read error")]
    Read(#[from] ReadFailure),
}

/// Violated construction invariants on domain values.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An automation event was built without a classification tag.
    #[error("automation event kind must not be empty")]
    EmptyKind,
}

/// The single failure kind modeled at the source-reader boundary.
///
/// Whatever goes wrong inside an adapter (transport, status, decoding) is
/// collapsed into this opaque wrapper before it crosses the port. The
/// application core logs it and discards it — a failed read never reaches
/// the catalog, the formatter, or the user.
#[derive(Debug, thiserror::Error)]
#[error("source read failed: {0}")]
pub struct ReadFailure(Box<dyn std::error::Error + Send + Sync>);

impl ReadFailure {
    /// Wrap any error as a read failure.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_validation_error() {
        let err = ValidationError::EmptyKind;
        assert_eq!(err.to_string(), "automation event kind must not be empty");
    }

    #[test]
    fn should_display_wrapped_source_in_read_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "request timed out");
        let err = ReadFailure::new(io);
        assert_eq!(err.to_string(), "source read failed: request timed out");
    }

    #[test]
    fn should_convert_validation_error_to_domain_error() {
        let err: FieldscopeError = ValidationError::EmptyKind.into();
        assert!(matches!(err, FieldscopeError::Validation(_)));
    }

    #[test]
    fn should_convert_read_failure_to_domain_error() {
        let err: FieldscopeError = ReadFailure::new("remote rejected the query").into();
        assert!(matches!(err, FieldscopeError::Read(_)));
    }
}
