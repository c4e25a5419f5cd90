//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The publishing model has exactly one failure mode: an argument outside its
/// valid domain (e.g. a negative circulation). Everything else is total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument was rejected before any state was touched.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl DomainError {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Name of the offending argument.
    pub fn argument(&self) -> &'static str {
        match self {
            DomainError::InvalidArgument { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_renders_name_and_reason() {
        let err = DomainError::invalid_argument("circulation", "must not be negative (got -5)");
        assert_eq!(err.argument(), "circulation");
        assert_eq!(
            err.to_string(),
            "invalid argument `circulation`: must not be negative (got -5)"
        );
    }
}
