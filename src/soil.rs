//! Soil resistivity and coarse soil classification.

use std::fmt;

use crate::constants::{
    FARMLAND_RESISTIVITY, ROCK_RESISTIVITY, WET_CLAY_RESISTIVITY, WET_SAND_RESISTIVITY,
};
use crate::errors::DomainError;
use crate::math::{ensure_positive, Scalar};
use crate::units::Resistivity;

/// Bulk soil resistivity ρ in Ω·m. Always finite and strictly positive.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SoilResistivity(Resistivity);

impl SoilResistivity {
    /// Validates and wraps a resistivity in Ω·m.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveInput`] for zero, negative or
    /// non-finite values.
    pub fn new(ohm_metres: Scalar) -> Result<Self, DomainError> {
        let value = ensure_positive("soil_resistivity", ohm_metres)?;
        Ok(Self(Resistivity::new(value)))
    }

    /// Raw value in Ω·m.
    #[must_use]
    pub const fn value(&self) -> Scalar {
        self.0.value()
    }

    /// Typed quantity view.
    #[must_use]
    pub const fn quantity(&self) -> Resistivity {
        self.0
    }

    /// Soil type this resistivity most likely corresponds to.
    #[must_use]
    pub fn kind(&self) -> SoilKind {
        SoilKind::classify(self.value())
    }
}

impl TryFrom<Scalar> for SoilResistivity {
    type Error = DomainError;

    fn try_from(value: Scalar) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SoilResistivity> for Scalar {
    fn from(rho: SoilResistivity) -> Self {
        rho.value()
    }
}

impl fmt::Display for SoilResistivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Broad soil categories with representative resistivities.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoilKind {
    /// Wet clay, ρ ≤ 100 Ω·m.
    WetClay,
    /// Agricultural topsoil, ρ ≤ 500 Ω·m.
    Farmland,
    /// Wet sand, ρ ≤ 2000 Ω·m.
    WetSand,
    /// Rock, anything above 2000 Ω·m.
    Rock,
}

impl SoilKind {
    /// All kinds, from most to least conductive.
    pub const ALL: [Self; 4] = [Self::WetClay, Self::Farmland, Self::WetSand, Self::Rock];

    /// Picks the category for a resistivity in Ω·m (upper bounds inclusive).
    #[must_use]
    pub fn classify(ohm_metres: Scalar) -> Self {
        if ohm_metres <= 100.0 {
            Self::WetClay
        } else if ohm_metres <= 500.0 {
            Self::Farmland
        } else if ohm_metres <= 2_000.0 {
            Self::WetSand
        } else {
            Self::Rock
        }
    }

    /// Representative resistivity for this category.
    #[must_use]
    pub const fn typical_resistivity(self) -> SoilResistivity {
        let value = match self {
            Self::WetClay => WET_CLAY_RESISTIVITY,
            Self::Farmland => FARMLAND_RESISTIVITY,
            Self::WetSand => WET_SAND_RESISTIVITY,
            Self::Rock => ROCK_RESISTIVITY,
        };
        SoilResistivity(Resistivity::new(value))
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WetClay => "wet clay",
            Self::Farmland => "farmland",
            Self::WetSand => "wet sand",
            Self::Rock => "rock",
        }
    }
}

impl fmt::Display for SoilKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
