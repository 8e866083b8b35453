//! Engine configuration: formula model selection and design target.

use crate::constants::POWER_AND_LIGHTNING_LIMIT;
use crate::errors::DomainError;
use crate::formulas::{ConductorModel, RodArrayModel};
use crate::math::{ensure_positive, Scalar};

/// Knobs that change how the engine evaluates a configuration.
///
/// Deserializes from JSON with every field optional:
///
/// ```json
/// { "rod_array_model": "logarithmic_correction", "target_resistance": 5.0 }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Multi-rod formula.
    pub rod_array_model: RodArrayModel,
    /// Buried conductor formula.
    pub conductor_model: ConductorModel,
    /// Design ceiling in ohms used for rod-count recommendations.
    pub target_resistance: Scalar,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rod_array_model: RodArrayModel::default(),
            conductor_model: ConductorModel::default(),
            target_resistance: POWER_AND_LIGHTNING_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Returns a copy with a different rod-array model.
    #[must_use]
    pub fn with_rod_array_model(mut self, model: RodArrayModel) -> Self {
        self.rod_array_model = model;
        self
    }

    /// Returns a copy with a different buried-conductor model.
    #[must_use]
    pub fn with_conductor_model(mut self, model: ConductorModel) -> Self {
        self.conductor_model = model;
        self
    }

    /// Returns a copy with a different design target.
    #[must_use]
    pub fn with_target_resistance(mut self, ohms: Scalar) -> Self {
        self.target_resistance = ohms;
        self
    }

    /// Checks the target is usable.
    ///
    /// # Errors
    ///
    /// [`DomainError::NonPositiveInput`] for a non-positive target.
    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("target_resistance", self.target_resistance)?;
        Ok(())
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Malformed JSON, unknown fields or a non-positive target.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, crate::errors::GroundingError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// I/O failures plus everything [`Self::from_json`] rejects.
    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, crate::errors::GroundingError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded engine configuration");
        Ok(config)
    }
}
