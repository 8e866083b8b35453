//! Persisted form of a calculation input.

use crate::electrodes::ElectrodeConfiguration;
#[cfg(feature = "serde")]
use crate::electrodes::{ElectrodeKind, ElectrodeParameters};
use crate::engine::{GroundingEngine, ResistanceResult};
use crate::errors::DomainError;
use crate::soil::SoilResistivity;

/// An electrode together with the soil it is driven into.
///
/// ```json
/// { "soil_resistivity": 100.0,
///   "electrode": { "type": "single_rod", "length": 2.4, "diameter": 0.016 } }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundingDesign {
    /// Soil resistivity (Ω·m).
    pub soil_resistivity: SoilResistivity,
    /// Electrode geometry.
    pub electrode: ElectrodeConfiguration,
}

impl GroundingDesign {
    /// Pairs an electrode with a soil.
    #[must_use]
    pub const fn new(electrode: ElectrodeConfiguration, soil_resistivity: SoilResistivity) -> Self {
        Self {
            soil_resistivity,
            electrode,
        }
    }

    /// Runs the design through `engine`.
    ///
    /// # Errors
    ///
    /// See [`GroundingEngine::compute`].
    pub fn evaluate(&self, engine: &GroundingEngine) -> Result<ResistanceResult, DomainError> {
        engine.compute(&self.electrode, self.soil_resistivity)
    }
}

/// On-disk layout read before the electrode tag is resolved.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct DesignFile {
    soil_resistivity: SoilResistivity,
    electrode: ElectrodeEntry,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ElectrodeEntry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(flatten)]
    parameters: ElectrodeParameters,
}

#[cfg(feature = "serde")]
impl GroundingDesign {
    /// Parses a design and validates its geometry.
    ///
    /// The `type` tag goes through [`ElectrodeKind`]'s parser, so an
    /// unrecognised electrode is reported as [`DomainError::InvalidVariant`].
    ///
    /// # Errors
    ///
    /// Malformed JSON, unknown electrode types, missing or invalid geometry.
    pub fn from_json(json: &str) -> Result<Self, crate::errors::GroundingError> {
        let file: DesignFile = serde_json::from_str(json)?;
        let kind: ElectrodeKind = file.electrode.kind.parse()?;
        let electrode = ElectrodeConfiguration::from_parameters(kind, &file.electrode.parameters)?;
        Ok(Self::new(electrode, file.soil_resistivity))
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Serialization failures.
    pub fn to_json(&self) -> Result<String, crate::errors::GroundingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a design file.
    ///
    /// # Errors
    ///
    /// I/O failures plus everything [`Self::from_json`] rejects.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, crate::errors::GroundingError> {
        let path = path.as_ref();
        let design = Self::from_json(&std::fs::read_to_string(path)?)?;
        tracing::debug!(path = %path.display(), kind = %design.electrode.kind(), "loaded design");
        Ok(design)
    }
}
