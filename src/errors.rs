//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Validation failures raised before (or instead of) evaluating a formula.
///
/// Every variant is recoverable: callers are expected to re-prompt or report
/// the offending field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A geometry field, resistivity or target was zero, negative or not finite.
    #[error("{field} must be strictly positive and finite, got {value}")]
    NonPositiveInput {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: Scalar,
    },
    /// An electrode tag from untyped input did not name a known shape.
    #[error("unknown electrode type: {0:?}")]
    InvalidVariant(String),
    /// A field required by the selected electrode shape was not supplied.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),
    /// The geometry is positive but outside the formula's range of validity.
    #[error("degenerate {electrode} geometry: {detail}")]
    DegenerateGeometry {
        /// Electrode shape label.
        electrode: &'static str,
        /// Which term collapsed.
        detail: String,
    },
    /// No representable rod count reaches the requested target.
    #[error("no rod count reaches a target of {target} Ω")]
    TargetUnreachable {
        /// Requested ceiling in ohms.
        target: Scalar,
    },
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum GroundingError {
    /// Wraps input validation errors.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Raised when a configuration or design file cannot be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Raised when a configuration or design file is not valid JSON.
    #[cfg(feature = "serde")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for fallible engine operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_message_names_field() {
        let err = DomainError::NonPositiveInput {
            field: "length",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "length must be strictly positive and finite, got 0");
    }

    #[test]
    fn domain_errors_convert_transparently() {
        let err: GroundingError = DomainError::MissingParameter("diameter").into();
        assert_eq!(err.to_string(), "missing parameter: diameter");
    }
}
