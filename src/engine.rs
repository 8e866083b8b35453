//! The grounding resistance engine.
//!
//! All entry points are pure: they take every input as a parameter and
//! return a fresh value. The free functions [`compute`], [`classify`],
//! [`suggest`] and [`minimum_count_for_target`] use the default
//! [`EngineConfig`]; [`GroundingEngine`] lets callers pick the formula models.

use tracing::{debug, warn};

use crate::compliance::{ComplianceStatus, QualityRating};
use crate::config::EngineConfig;
use crate::constants::{DEFAULT_UTILIZATION_FACTOR, UTILIZATION_TABLE_MAX_COUNT};
use crate::electrodes::{Electrode, ElectrodeConfiguration, RodArray};
use crate::errors::DomainError;
use crate::formulas::{self, RodArrayModel};
use crate::math::{ensure_positive, Scalar};
use crate::soil::SoilResistivity;
use crate::units::Resistance;

/// Intermediate values of the utilization-table rod-array formula.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RodArrayBreakdown {
    /// Resistance of one rod on its own (Ω).
    pub single_rod_resistance: Scalar,
    /// Utilization factor η applied for the rod count.
    pub utilization_factor: Scalar,
}

/// Outcome of one engine evaluation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ResistanceResult {
    /// Full-precision resistance in ohms; may be `+∞` for extreme inputs.
    pub resistance: Scalar,
    /// Geometry that produced it.
    pub electrode: ElectrodeConfiguration,
    /// Soil resistivity used.
    pub soil_resistivity: SoilResistivity,
    /// Strictest class the resistance satisfies.
    pub status: ComplianceStatus,
    /// Expression that was evaluated.
    pub expression: String,
    /// Single-rod resistance and η, for rod arrays evaluated with the table.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub breakdown: Option<RodArrayBreakdown>,
}

impl ResistanceResult {
    /// Typed view of [`Self::resistance`].
    #[must_use]
    pub const fn quantity(&self) -> Resistance {
        Resistance::new(self.resistance)
    }

    /// Qualitative rating of the resistance.
    #[must_use]
    pub fn rating(&self) -> QualityRating {
        QualityRating::rate(self.resistance)
    }

    /// Remediation hints; empty when the result is compliant.
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        suggest(&self.electrode, self.resistance)
    }
}

/// Evaluates electrode configurations with a fixed choice of formula models.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroundingEngine {
    config: EngineConfig,
}

impl GroundingEngine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes the grounding resistance of `electrode` in soil of resistivity `rho`.
    ///
    /// # Errors
    ///
    /// [`DomainError::NonPositiveInput`] when the geometry violates its
    /// invariants, [`DomainError::DegenerateGeometry`] when it is outside the
    /// formula's range of validity.
    pub fn compute(
        &self,
        electrode: &ElectrodeConfiguration,
        rho: SoilResistivity,
    ) -> Result<ResistanceResult, DomainError> {
        ensure_positive("soil_resistivity", rho.value())?;
        let shape = electrode.as_electrode();
        shape.validate()?;

        let resistance = shape.resistance(rho, &self.config)?;
        let breakdown = match electrode {
            ElectrodeConfiguration::RodArray(array)
                if self.config.rod_array_model == RodArrayModel::UtilizationTable =>
            {
                Some(RodArrayBreakdown {
                    single_rod_resistance: formulas::single_rod(rho.value(), array.length, array.diameter)?,
                    utilization_factor: formulas::utilization_factor(array.count),
                })
            }
            _ => None,
        };

        if !resistance.is_finite() {
            warn!(kind = %shape.kind(), "resistance is not finite, classifying as non-compliant");
        }
        let status = classify(resistance);
        debug!(
            kind = %shape.kind(),
            rho = rho.value(),
            resistance,
            ?status,
            "computed grounding resistance"
        );

        Ok(ResistanceResult {
            resistance,
            electrode: *electrode,
            soil_resistivity: rho,
            status,
            expression: shape.expression(&self.config).to_string(),
            breakdown,
        })
    }

    /// Smallest rod count that brings `array` down to the configured target.
    ///
    /// # Errors
    ///
    /// See [`minimum_count_for_target`].
    pub fn minimum_count(&self, array: &RodArray, rho: SoilResistivity) -> Result<u32, DomainError> {
        minimum_count_for_target(array, rho, self.config.target_resistance)
    }
}

/// Computes with the default formula models.
///
/// # Errors
///
/// See [`GroundingEngine::compute`].
pub fn compute(
    electrode: &ElectrodeConfiguration,
    rho: SoilResistivity,
) -> Result<ResistanceResult, DomainError> {
    GroundingEngine::default().compute(electrode, rho)
}

/// Threshold lookup; see [`ComplianceStatus::classify`].
#[must_use]
pub fn classify(resistance: Scalar) -> ComplianceStatus {
    ComplianceStatus::classify(resistance)
}

/// Remediation hints for a non-compliant resistance.
///
/// Returns an empty list unless `resistance` exceeds every ceiling. Otherwise
/// the shape-specific hints come first, followed by the generic ones.
#[must_use]
pub fn suggest(electrode: &ElectrodeConfiguration, resistance: Scalar) -> Vec<String> {
    if classify(resistance).is_compliant() {
        return Vec::new();
    }

    let mut hints: Vec<String> = match electrode {
        ElectrodeConfiguration::SingleRod(_) => vec![
            "Add more rods in parallel".to_string(),
            "Increase the rod length to 4-6 m".to_string(),
            "Use a larger rod diameter (e.g. 19 mm)".to_string(),
        ],
        ElectrodeConfiguration::RodArray(array) => vec![
            format!("Increase the number of rods to {}", array.count.saturating_add(2)),
            "Increase the rod length to 3-4 m".to_string(),
            "Reduce the spacing between rods to 2.0 m".to_string(),
        ],
        ElectrodeConfiguration::BuriedConductor(conductor) => vec![
            format!("Increase the conductor length to {:.1} m", conductor.length * 1.5),
            "Bury the conductor deeper (0.8-1.0 m)".to_string(),
            "Add vertical rods at the conductor ends".to_string(),
            "Use a larger conductor diameter".to_string(),
        ],
        ElectrodeConfiguration::GroundGrid(grid) => vec![
            format!("Increase the grid area to {:.1} m²", grid.area * 1.5),
            "Increase the total conductor length".to_string(),
            "Add vertical rods at the grid corners".to_string(),
        ],
    };
    hints.extend(
        [
            "Apply chemical soil treatment (chemical electrodes)",
            "Use deep-driven rods (6-12 m)",
            "Consider a conductive backfill compound",
        ]
        .map(String::from),
    );
    hints
}

/// Smallest rod count `n' ≥ array.count` whose utilization-table resistance
/// is at or below `target` ohms.
///
/// Counts up to the end of the table are checked one by one because `n·η(n)`
/// is not monotonic (7 rods fall back to η = 0.40). Past the table η is
/// constant and the bound is solved directly.
///
/// # Errors
///
/// [`DomainError::NonPositiveInput`] for an invalid array, resistivity or
/// target, [`DomainError::DegenerateGeometry`] if a single rod is degenerate,
/// and [`DomainError::TargetUnreachable`] when the count would not fit in a
/// `u32`.
pub fn minimum_count_for_target(
    array: &RodArray,
    rho: SoilResistivity,
    target: Scalar,
) -> Result<u32, DomainError> {
    array.validate()?;
    let target = ensure_positive("target_resistance", target)?;
    let single = formulas::single_rod(rho.value(), array.length, array.diameter)?;
    let meets = |count: u32| single / (Scalar::from(count) * formulas::utilization_factor(count)) <= target;

    if let Some(count) = (array.count..=UTILIZATION_TABLE_MAX_COUNT).find(|&n| meets(n)) {
        return Ok(count);
    }

    let first_untabulated = array.count.max(UTILIZATION_TABLE_MAX_COUNT + 1);
    let bound = (single / (DEFAULT_UTILIZATION_FACTOR * target)).ceil();
    if !bound.is_finite() || bound > Scalar::from(u32::MAX) {
        return Err(DomainError::TargetUnreachable { target });
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut count = (bound as u32).max(first_untabulated);
    // ceil() can land one short after rounding in the division
    while !meets(count) {
        count = count
            .checked_add(1)
            .ok_or(DomainError::TargetUnreachable { target })?;
    }
    debug!(from = array.count, to = count, target, "minimum rod count");
    Ok(count)
}
