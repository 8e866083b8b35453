//! Human-readable and JSON rendering of an engine result.

use std::fmt;

use crate::compliance::QualityRating;
use crate::electrodes::ElectrodeConfiguration;
use crate::engine::{GroundingEngine, ResistanceResult};
use crate::errors::DomainError;
use crate::formulas::{self, RodArrayModel};
use crate::math::{round_to, Scalar};
use crate::soil::SoilKind;
use crate::units::Resistance;

/// Rod count needed to reach the design target.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RodCountAdvice {
    /// Target ceiling (Ω).
    pub target: Scalar,
    /// Minimum number of rods.
    pub count: u32,
    /// Resistance with that many rods (Ω).
    pub resistance: Scalar,
}

/// Everything a front end shows for one calculation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Engine output.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub result: ResistanceResult,
    /// Resistance rounded to two decimals.
    pub resistance_rounded: Scalar,
    /// Soil category implied by the resistivity.
    pub soil: SoilKind,
    /// Qualitative rating.
    pub rating: QualityRating,
    /// Remediation hints, empty when compliant.
    pub suggestions: Vec<String>,
    /// Rod count advice, only for rod arrays above the engine's target.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub rod_count: Option<RodCountAdvice>,
}

impl Report {
    /// Assembles a report for `result`, using `engine` for follow-up advice.
    ///
    /// Rod-count advice is tabulated from the utilization factors, so it is
    /// only given when the engine uses that model for rod arrays.
    ///
    /// # Errors
    ///
    /// Propagates errors from the rod-count search.
    pub fn new(engine: &GroundingEngine, result: ResistanceResult) -> Result<Self, DomainError> {
        let config = engine.config();
        let target = config.target_resistance;
        let rod_count = match &result.electrode {
            ElectrodeConfiguration::RodArray(array)
                if config.rod_array_model == RodArrayModel::UtilizationTable
                    && result.resistance.is_finite()
                    && result.resistance > target =>
            {
                let count = engine.minimum_count(array, result.soil_resistivity)?;
                let single = formulas::single_rod(result.soil_resistivity.value(), array.length, array.diameter)?;
                Some(RodCountAdvice {
                    target,
                    count,
                    resistance: single / (Scalar::from(count) * formulas::utilization_factor(count)),
                })
            }
            _ => None,
        };

        Ok(Self {
            resistance_rounded: round_to(result.resistance, 2),
            soil: result.soil_resistivity.kind(),
            rating: result.rating(),
            suggestions: result.suggestions(),
            rod_count,
            result,
        })
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Serialization failures (non-finite floats are written as `null`).
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = &self.result;
        let electrode = result.electrode.as_electrode();
        let rule = "=".repeat(50);

        writeln!(f, "{rule}")?;
        writeln!(f, "GROUNDING RESISTANCE")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Electrode:        {}", electrode.kind())?;
        for (name, value) in electrode.describe() {
            writeln!(f, "  {name:<14}  {value}")?;
        }
        writeln!(f, "Soil resistivity: {} ({})", result.soil_resistivity, self.soil)?;
        writeln!(f, "Formula:          {}", result.expression)?;
        if let Some(breakdown) = &result.breakdown {
            writeln!(
                f,
                "  single rod      {:.2}",
                Resistance::new(breakdown.single_rod_resistance)
            )?;
            writeln!(f, "  utilization η   {}", breakdown.utilization_factor)?;
        }
        writeln!(f, "Resistance:       {:.2}", result.quantity())?;
        writeln!(f)?;
        writeln!(f, "Compliance:       {} ({})", result.status, result.status.description())?;
        writeln!(f, "Rating:           {}", self.rating)?;

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "Suggestions:")?;
            for hint in &self.suggestions {
                writeln!(f, "  - {hint}")?;
            }
        }

        if let Some(advice) = &self.rod_count {
            writeln!(f)?;
            writeln!(
                f,
                "Minimum rods for ≤ {}: {} (estimated {:.2})",
                Resistance::new(advice.target),
                advice.count,
                Resistance::new(advice.resistance)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::electrodes::{GroundGrid, RodArray};
    use crate::soil::SoilResistivity;

    fn report_for(electrode: ElectrodeConfiguration) -> Report {
        let engine = GroundingEngine::default();
        let result = engine
            .compute(&electrode, SoilResistivity::new(100.0).unwrap())
            .unwrap();
        Report::new(&engine, result).unwrap()
    }

    #[test]
    fn rod_array_report_includes_minimum_count() {
        let report = report_for(RodArray::new(4, 2.4, 0.016, 3.0).unwrap().into());
        let advice = report.rod_count.unwrap();
        assert_eq!(advice.count, 8);
        assert!(advice.resistance <= 10.0);
        assert!((report.resistance_rounded - 13.77).abs() < 1e-9);

        let text = report.to_string();
        assert!(text.contains("Resistance:       13.77 Ω"), "{text}");
        assert!(text.contains("utilization η   0.65"), "{text}");
        assert!(text.contains("Minimum rods for ≤ 10 Ω: 8"), "{text}");
        assert!(text.contains("Increase the number of rods to 6"), "{text}");
    }

    #[test]
    fn logarithmic_model_report_omits_table_based_advice() {
        let engine = GroundingEngine::new(
            EngineConfig::default()
                .with_rod_array_model(RodArrayModel::LogarithmicCorrection)
                .with_target_resistance(22.0),
        );
        let electrode = RodArray::new(2, 2.4, 0.016, 0.5).unwrap().into();
        let result = engine
            .compute(&electrode, SoilResistivity::new(100.0).unwrap())
            .unwrap();
        assert!(result.resistance > 22.0);

        let report = Report::new(&engine, result).unwrap();
        assert!(report.rod_count.is_none());
        assert!(!report.to_string().contains("Minimum rods"));
    }

    #[test]
    fn compliant_report_has_no_suggestions() {
        let report = report_for(GroundGrid::new(64.0, 32.0, 0.6).unwrap().into());
        assert!(report.suggestions.is_empty());
        assert!(report.rod_count.is_none());
        let text = report.to_string();
        assert!(text.contains("8.27 Ω"), "{text}");
        assert!(!text.contains("Suggestions"), "{text}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_report_is_flat() {
        let report = report_for(GroundGrid::new(64.0, 32.0, 0.6).unwrap().into());
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["status"], "power_and_lightning");
        assert_eq!(value["electrode"]["type"], "ground_grid");
        assert_eq!(value["resistance_rounded"], 8.27);
        assert!(value.get("rod_count").is_none());
    }
}
