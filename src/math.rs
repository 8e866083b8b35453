//! Shared numerical primitives.

use crate::errors::DomainError;

/// Primary scalar type used across the crate.
pub type Scalar = f64;

/// Returns `value` unchanged when it is finite and strictly positive.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveInput`] naming `field` otherwise.
pub fn ensure_positive(field: &'static str, value: Scalar) -> Result<Scalar, DomainError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::NonPositiveInput { field, value })
    }
}

/// Rounds `value` to `places` decimal places for display.
///
/// Non-finite values pass through untouched.
#[must_use]
pub fn round_to(value: Scalar, places: u32) -> Scalar {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn ensure_positive_rejects_zero_negative_and_nan() {
        assert!(ensure_positive("length", 0.0).is_err());
        assert!(ensure_positive("length", -1.0).is_err());
        assert!(ensure_positive("length", Scalar::NAN).is_err());
        assert!(ensure_positive("length", Scalar::INFINITY).is_err());
        assert_relative_eq!(ensure_positive("length", 2.4).unwrap(), 2.4);
    }

    #[test]
    fn round_to_two_places() {
        assert_relative_eq!(round_to(35.789_501, 2), 35.79, epsilon = 1e-12);
        assert!(round_to(Scalar::INFINITY, 2).is_infinite());
    }
}
