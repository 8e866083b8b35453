//! Closed-form grounding resistance expressions.
//!
//! Every function here assumes its arguments were already checked for
//! positivity; the only validation performed is on the logarithmic
//! correction term, which collapses for geometries outside the formula's
//! range of validity.

use std::f64::consts::{E, PI};

use crate::constants::{DEFAULT_UTILIZATION_FACTOR, UTILIZATION_TABLE};
use crate::errors::DomainError;
use crate::math::Scalar;

/// Multi-rod array formula variants.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RodArrayModel {
    /// `R_single / (n · η(n))` with the tabulated utilization factor.
    #[default]
    UtilizationTable,
    /// `ρ/(2πnL) · (ln(4L/d) − 1 + 2(L/s) · ln(2n/π))`.
    LogarithmicCorrection,
}

impl RodArrayModel {
    /// Printable form of the expression.
    #[must_use]
    pub const fn expression(self) -> &'static str {
        match self {
            Self::UtilizationTable => "R = R_single / (n × η)",
            Self::LogarithmicCorrection => "R = ρ/(2πnL) × [ln(4L/d) − 1 + 2(L/s) × ln(2n/π)]",
        }
    }
}

/// Horizontal buried conductor formula variants.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConductorModel {
    /// Laurent: `ρ/(πL) · (ln(2L/√(d·h)) + 0.5)`.
    #[default]
    Laurent,
    /// Modified Dwight: `ρ/(2πL) · (ln(2L/d) + ln(L/(2h)) − 2 + 2h/L)`.
    ModifiedDwight,
}

impl ConductorModel {
    /// Printable form of the expression.
    #[must_use]
    pub const fn expression(self) -> &'static str {
        match self {
            Self::Laurent => "R = ρ/(πL) × [ln(2L/√(d·h)) + 0.5]",
            Self::ModifiedDwight => "R = ρ/(2πL) × [ln(2L/d) + ln(L/2h) − 2 + 2h/L]",
        }
    }
}

/// Expression used for a single vertical rod.
pub const SINGLE_ROD_EXPRESSION: &str = "R = ρ/(2πL) × [ln(4L/d) − 1]";
/// Expression used for a ground grid.
pub const GROUND_GRID_EXPRESSION: &str = "R = ρ × [1/Lt + 1/√(20A)] × [1 + 1/(1 + h√(A/10))]";

/// Largest diameter for which the single-rod formula stays positive, `4L/e`.
#[must_use]
pub fn slenderness_limit(length: Scalar) -> Scalar {
    4.0 * length / E
}

/// Utilization factor η for `count` rods in line.
///
/// Exact-match lookup; anything outside the table gets
/// [`DEFAULT_UTILIZATION_FACTOR`].
#[must_use]
pub fn utilization_factor(count: u32) -> Scalar {
    UTILIZATION_TABLE
        .iter()
        .find(|(n, _)| *n == count)
        .map_or(DEFAULT_UTILIZATION_FACTOR, |(_, eta)| *eta)
}

fn positive_term(
    electrode: &'static str,
    term: &'static str,
    value: Scalar,
) -> Result<Scalar, DomainError> {
    if value > 0.0 || value.is_nan() {
        Ok(value)
    } else {
        Err(DomainError::DegenerateGeometry {
            electrode,
            detail: format!("{term} evaluates to {value:.6}, expected a positive value"),
        })
    }
}

/// Dwight's single vertical rod, `ρ/(2πL) · (ln(4L/d) − 1)`.
///
/// # Errors
///
/// [`DomainError::DegenerateGeometry`] when `d ≥ 4L/e`.
pub fn single_rod(rho: Scalar, length: Scalar, diameter: Scalar) -> Result<Scalar, DomainError> {
    let shape = positive_term(
        "single rod",
        "ln(4L/d) - 1",
        ((4.0 * length) / diameter).ln() - 1.0,
    )?;
    Ok(rho / (2.0 * PI * length) * shape)
}

/// Rods in line using the utilization-factor table.
///
/// # Errors
///
/// Propagates [`single_rod`] failures.
pub fn rod_array_utilization(
    rho: Scalar,
    count: u32,
    length: Scalar,
    diameter: Scalar,
) -> Result<Scalar, DomainError> {
    let single = single_rod(rho, length, diameter)?;
    Ok(single / (Scalar::from(count) * utilization_factor(count)))
}

/// Rods in line with the logarithmic mutual-resistance correction.
///
/// # Errors
///
/// [`DomainError::DegenerateGeometry`] when the bracketed term is not positive.
pub fn rod_array_logarithmic(
    rho: Scalar,
    count: u32,
    length: Scalar,
    diameter: Scalar,
    spacing: Scalar,
) -> Result<Scalar, DomainError> {
    let n = Scalar::from(count);
    let bracket = ((4.0 * length) / diameter).ln() - 1.0
        + 2.0 * (length / spacing) * ((2.0 * n) / PI).ln();
    let bracket = positive_term(
        "rod array",
        "ln(4L/d) - 1 + 2(L/s)ln(2n/pi)",
        bracket,
    )?;
    Ok(rho / (2.0 * PI * n * length) * bracket)
}

/// Laurent's horizontal buried conductor.
///
/// # Errors
///
/// [`DomainError::DegenerateGeometry`] when `ln(2L/√(dh)) + 0.5 ≤ 0`.
pub fn buried_conductor_laurent(
    rho: Scalar,
    length: Scalar,
    diameter: Scalar,
    depth: Scalar,
) -> Result<Scalar, DomainError> {
    let shape = positive_term(
        "buried conductor",
        "ln(2L/sqrt(d*h)) + 0.5",
        ((2.0 * length) / (diameter * depth).sqrt()).ln() + 0.5,
    )?;
    Ok(rho / (PI * length) * shape)
}

/// Modified Dwight horizontal buried conductor.
///
/// # Errors
///
/// [`DomainError::DegenerateGeometry`] when the bracketed term is not positive.
pub fn buried_conductor_dwight(
    rho: Scalar,
    length: Scalar,
    diameter: Scalar,
    depth: Scalar,
) -> Result<Scalar, DomainError> {
    let bracket = ((2.0 * length) / diameter).ln() + (length / (2.0 * depth)).ln() - 2.0
        + (2.0 * depth) / length;
    let bracket = positive_term(
        "buried conductor",
        "ln(2L/d) + ln(L/2h) - 2 + 2h/L",
        bracket,
    )?;
    Ok(rho / (2.0 * PI * length) * bracket)
}

/// Schwarz-style ground grid approximation. Positive for any positive input.
#[must_use]
pub fn ground_grid(rho: Scalar, area: Scalar, total_length: Scalar, depth: Scalar) -> Scalar {
    let spread = 1.0 / total_length + 1.0 / (20.0 * area).sqrt();
    let depth_correction = 1.0 + 1.0 / (1.0 + depth * (area / 10.0).sqrt());
    rho * spread * depth_correction
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn utilization_lookup_is_exact_match() {
        assert_relative_eq!(utilization_factor(2), 0.85);
        assert_relative_eq!(utilization_factor(4), 0.65);
        assert_relative_eq!(utilization_factor(7), DEFAULT_UTILIZATION_FACTOR);
        assert_relative_eq!(utilization_factor(10), 0.45);
        assert_relative_eq!(utilization_factor(11), DEFAULT_UTILIZATION_FACTOR);
    }

    #[test]
    fn single_rod_reference_value() {
        let r = single_rod(100.0, 2.4, 0.016).unwrap();
        assert_relative_eq!(r, 35.789_501_339_453_67, max_relative = 1e-12);
    }

    #[test]
    fn single_rod_fails_beyond_slenderness_limit() {
        let limit = slenderness_limit(2.4);
        assert!(single_rod(100.0, 2.4, limit * 0.99).is_ok());
        assert!(matches!(
            single_rod(100.0, 2.4, limit * 1.01),
            Err(DomainError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn logarithmic_array_reference_value() {
        let r = rod_array_logarithmic(100.0, 4, 2.4, 0.016, 3.0).unwrap();
        assert_relative_eq!(r, 11.426_775_008_047_157, max_relative = 1e-12);
    }

    #[test]
    fn conductor_models_disagree() {
        let laurent = buried_conductor_laurent(100.0, 20.0, 0.01, 0.6).unwrap();
        let dwight = buried_conductor_dwight(100.0, 20.0, 0.01, 0.6).unwrap();
        assert_relative_eq!(laurent, 10.737_988_821_182_06, max_relative = 1e-12);
        assert_relative_eq!(dwight, 7.295_233_156_967_942, max_relative = 1e-12);
    }

    #[test]
    fn stubby_conductor_is_degenerate_in_both_models() {
        let laurent = buried_conductor_laurent(100.0, 0.1, 1.0, 1.0).unwrap_err();
        assert!(matches!(
            laurent,
            DomainError::DegenerateGeometry { electrode: "buried conductor", .. }
        ));

        let dwight = buried_conductor_dwight(100.0, 1.0, 4.0, 1.0).unwrap_err();
        assert!(matches!(
            dwight,
            DomainError::DegenerateGeometry { electrode: "buried conductor", .. }
        ));
    }

    #[test]
    fn grid_reference_value() {
        let r = ground_grid(100.0, 64.0, 32.0, 0.6);
        assert_relative_eq!(r, 8.271_290_650_936_942, max_relative = 1e-6);
    }
}
