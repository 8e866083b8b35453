//! Classification of a computed resistance against regulatory ceilings.

use std::fmt;

use crate::constants::{POWER_AND_LIGHTNING_LIMIT, SENSITIVE_EQUIPMENT_LIMIT, TELECOM_LIMIT};
use crate::math::Scalar;

/// Strictest application class a resistance qualifies for.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComplianceStatus {
    /// R ≤ 1 Ω.
    SensitiveEquipment,
    /// R ≤ 5 Ω.
    Telecom,
    /// R ≤ 10 Ω.
    PowerAndLightning,
    /// R > 10 Ω, or not a finite number.
    NonCompliant,
}

impl ComplianceStatus {
    /// Thresholds are inclusive and checked from the strictest upward.
    #[must_use]
    pub fn classify(resistance: Scalar) -> Self {
        if resistance <= SENSITIVE_EQUIPMENT_LIMIT {
            Self::SensitiveEquipment
        } else if resistance <= TELECOM_LIMIT {
            Self::Telecom
        } else if resistance <= POWER_AND_LIGHTNING_LIMIT {
            Self::PowerAndLightning
        } else {
            Self::NonCompliant
        }
    }

    /// Ceiling of this class in ohms; `None` for [`Self::NonCompliant`].
    #[must_use]
    pub const fn limit(self) -> Option<Scalar> {
        match self {
            Self::SensitiveEquipment => Some(SENSITIVE_EQUIPMENT_LIMIT),
            Self::Telecom => Some(TELECOM_LIMIT),
            Self::PowerAndLightning => Some(POWER_AND_LIGHTNING_LIMIT),
            Self::NonCompliant => None,
        }
    }

    /// True for every class except [`Self::NonCompliant`].
    #[must_use]
    pub const fn is_compliant(self) -> bool {
        !matches!(self, Self::NonCompliant)
    }

    /// One-line explanation for reports.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SensitiveEquipment => "meets the sensitive equipment limit (≤ 1 Ω)",
            Self::Telecom => "meets the telecommunications limit (≤ 5 Ω)",
            Self::PowerAndLightning => "meets the power and lightning protection limit (≤ 10 Ω)",
            Self::NonCompliant => "exceeds every regulatory limit (> 10 Ω)",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SensitiveEquipment => "sensitive equipment",
            Self::Telecom => "telecom",
            Self::PowerAndLightning => "power and lightning",
            Self::NonCompliant => "non-compliant",
        };
        f.write_str(label)
    }
}

/// Coarse qualitative rating used alongside the compliance class.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QualityRating {
    /// R ≤ 10 Ω.
    Excellent,
    /// R ≤ 25 Ω.
    Good,
    /// R ≤ 50 Ω.
    Acceptable,
    /// Anything higher.
    NeedsImprovement,
}

impl QualityRating {
    /// Rates a resistance in ohms.
    #[must_use]
    pub fn rate(resistance: Scalar) -> Self {
        if resistance <= 10.0 {
            Self::Excellent
        } else if resistance <= 25.0 {
            Self::Good
        } else if resistance <= 50.0 {
            Self::Acceptable
        } else {
            Self::NeedsImprovement
        }
    }
}

impl fmt::Display for QualityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Acceptable => "acceptable",
            Self::NeedsImprovement => "needs improvement",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive() {
        assert_eq!(ComplianceStatus::classify(1.0), ComplianceStatus::SensitiveEquipment);
        assert_eq!(ComplianceStatus::classify(1.0001), ComplianceStatus::Telecom);
        assert_eq!(ComplianceStatus::classify(5.0), ComplianceStatus::Telecom);
        assert_eq!(ComplianceStatus::classify(10.0), ComplianceStatus::PowerAndLightning);
        assert_eq!(ComplianceStatus::classify(10.0001), ComplianceStatus::NonCompliant);
    }

    #[test]
    fn non_finite_is_non_compliant() {
        assert_eq!(ComplianceStatus::classify(Scalar::INFINITY), ComplianceStatus::NonCompliant);
        assert_eq!(ComplianceStatus::classify(Scalar::NAN), ComplianceStatus::NonCompliant);
        assert_eq!(QualityRating::rate(Scalar::NAN), QualityRating::NeedsImprovement);
    }

    #[test]
    fn limits_match_classification() {
        for status in [
            ComplianceStatus::SensitiveEquipment,
            ComplianceStatus::Telecom,
            ComplianceStatus::PowerAndLightning,
        ] {
            let limit = status.limit().unwrap();
            assert_eq!(ComplianceStatus::classify(limit), status);
            assert!(status.is_compliant());
        }
        assert_eq!(ComplianceStatus::NonCompliant.limit(), None);
    }

    #[test]
    fn quality_rating_steps() {
        assert_eq!(QualityRating::rate(10.0), QualityRating::Excellent);
        assert_eq!(QualityRating::rate(25.0), QualityRating::Good);
        assert_eq!(QualityRating::rate(35.79), QualityRating::Acceptable);
        assert_eq!(QualityRating::rate(50.01), QualityRating::NeedsImprovement);
    }
}
