//! Electrode geometries and the closed set of supported shapes.

use std::fmt;
use std::str::FromStr;

use crate::config::EngineConfig;
use crate::errors::DomainError;
use crate::formulas::{self, ConductorModel, RodArrayModel};
use crate::math::{ensure_positive, Scalar};
use crate::soil::SoilResistivity;
use crate::units::{Area, Length};

/// Behaviour shared by every electrode shape.
pub trait Electrode {
    /// Tag identifying the shape.
    fn kind(&self) -> ElectrodeKind;

    /// Checks the positivity and shape invariants.
    ///
    /// # Errors
    ///
    /// [`DomainError::NonPositiveInput`] for the first offending field.
    fn validate(&self) -> Result<(), DomainError>;

    /// Evaluates the grounding resistance in ohms, assuming a valid geometry.
    ///
    /// # Errors
    ///
    /// [`DomainError::DegenerateGeometry`] when the formula leaves its valid range.
    fn resistance(&self, rho: SoilResistivity, config: &EngineConfig)
        -> Result<Scalar, DomainError>;

    /// Printable form of the expression `resistance` evaluates.
    fn expression(&self, config: &EngineConfig) -> &'static str;

    /// Labelled geometry values for reports.
    fn describe(&self) -> Vec<(&'static str, String)>;
}

/// Single vertical rod.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleRod {
    /// Driven length L (m).
    pub length: Scalar,
    /// Rod diameter d (m).
    pub diameter: Scalar,
}

impl SingleRod {
    /// Creates a validated rod.
    ///
    /// # Errors
    ///
    /// [`DomainError::NonPositiveInput`] if any field is not positive.
    pub fn new(length: Scalar, diameter: Scalar) -> Result<Self, DomainError> {
        let rod = Self { length, diameter };
        rod.validate()?;
        Ok(rod)
    }
}

impl Electrode for SingleRod {
    fn kind(&self) -> ElectrodeKind {
        ElectrodeKind::SingleRod
    }

    fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("length", self.length)?;
        ensure_positive("diameter", self.diameter)?;
        Ok(())
    }

    fn resistance(&self, rho: SoilResistivity, _config: &EngineConfig) -> Result<Scalar, DomainError> {
        formulas::single_rod(rho.value(), self.length, self.diameter)
    }

    fn expression(&self, _config: &EngineConfig) -> &'static str {
        formulas::SINGLE_ROD_EXPRESSION
    }

    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("length", Length::new(self.length).to_string()),
            ("diameter", Length::new(self.diameter).to_string()),
        ]
    }
}

/// Identical rods driven in a line.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RodArray {
    /// Number of rods n (≥ 2).
    pub count: u32,
    /// Length of each rod L (m).
    pub length: Scalar,
    /// Rod diameter d (m).
    pub diameter: Scalar,
    /// Distance between adjacent rods s (m).
    pub spacing: Scalar,
}

impl RodArray {
    /// Creates a validated array.
    ///
    /// # Errors
    ///
    /// [`DomainError::NonPositiveInput`] if a field is not positive or
    /// `count < 2`.
    pub fn new(count: u32, length: Scalar, diameter: Scalar, spacing: Scalar) -> Result<Self, DomainError> {
        let array = Self {
            count,
            length,
            diameter,
            spacing,
        };
        array.validate()?;
        Ok(array)
    }

    /// One rod of the array on its own.
    #[must_use]
    pub const fn single(&self) -> SingleRod {
        SingleRod {
            length: self.length,
            diameter: self.diameter,
        }
    }

    /// Same geometry with a different rod count.
    #[must_use]
    pub const fn with_count(&self, count: u32) -> Self {
        Self { count, ..*self }
    }
}

impl Electrode for RodArray {
    fn kind(&self) -> ElectrodeKind {
        ElectrodeKind::RodArray
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.count < 2 {
            return Err(DomainError::NonPositiveInput {
                field: "count",
                value: Scalar::from(self.count),
            });
        }
        ensure_positive("length", self.length)?;
        ensure_positive("diameter", self.diameter)?;
        ensure_positive("spacing", self.spacing)?;
        Ok(())
    }

    fn resistance(&self, rho: SoilResistivity, config: &EngineConfig) -> Result<Scalar, DomainError> {
        match config.rod_array_model {
            RodArrayModel::UtilizationTable => {
                formulas::rod_array_utilization(rho.value(), self.count, self.length, self.diameter)
            }
            RodArrayModel::LogarithmicCorrection => formulas::rod_array_logarithmic(
                rho.value(),
                self.count,
                self.length,
                self.diameter,
                self.spacing,
            ),
        }
    }

    fn expression(&self, config: &EngineConfig) -> &'static str {
        config.rod_array_model.expression()
    }

    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("count", self.count.to_string()),
            ("length", Length::new(self.length).to_string()),
            ("diameter", Length::new(self.diameter).to_string()),
            ("spacing", Length::new(self.spacing).to_string()),
        ]
    }
}

/// Horizontal conductor buried at constant depth.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuriedConductor {
    /// Conductor length L (m).
    pub length: Scalar,
    /// Conductor diameter d (m).
    pub diameter: Scalar,
    /// Burial depth h (m).
    pub depth: Scalar,
}

impl BuriedConductor {
    /// Creates a validated conductor.
    ///
    /// # Errors
    ///
    /// [`DomainError::NonPositiveInput`] if any field is not positive.
    pub fn new(length: Scalar, diameter: Scalar, depth: Scalar) -> Result<Self, DomainError> {
        let conductor = Self {
            length,
            diameter,
            depth,
        };
        conductor.validate()?;
        Ok(conductor)
    }
}

impl Electrode for BuriedConductor {
    fn kind(&self) -> ElectrodeKind {
        ElectrodeKind::BuriedConductor
    }

    fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("length", self.length)?;
        ensure_positive("diameter", self.diameter)?;
        ensure_positive("depth", self.depth)?;
        Ok(())
    }

    fn resistance(&self, rho: SoilResistivity, config: &EngineConfig) -> Result<Scalar, DomainError> {
        match config.conductor_model {
            ConductorModel::Laurent => {
                formulas::buried_conductor_laurent(rho.value(), self.length, self.diameter, self.depth)
            }
            ConductorModel::ModifiedDwight => {
                formulas::buried_conductor_dwight(rho.value(), self.length, self.diameter, self.depth)
            }
        }
    }

    fn expression(&self, config: &EngineConfig) -> &'static str {
        config.conductor_model.expression()
    }

    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("length", Length::new(self.length).to_string()),
            ("diameter", Length::new(self.diameter).to_string()),
            ("depth", Length::new(self.depth).to_string()),
        ]
    }
}

/// Buried mesh of conductors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundGrid {
    /// Area covered by the grid A (m²).
    pub area: Scalar,
    /// Total buried conductor length Lt (m).
    pub total_length: Scalar,
    /// Burial depth h (m).
    pub depth: Scalar,
}

impl GroundGrid {
    /// Creates a validated grid.
    ///
    /// # Errors
    ///
    /// [`DomainError::NonPositiveInput`] if any field is not positive.
    pub fn new(area: Scalar, total_length: Scalar, depth: Scalar) -> Result<Self, DomainError> {
        let grid = Self {
            area,
            total_length,
            depth,
        };
        grid.validate()?;
        Ok(grid)
    }
}

impl Electrode for GroundGrid {
    fn kind(&self) -> ElectrodeKind {
        ElectrodeKind::GroundGrid
    }

    fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("area", self.area)?;
        ensure_positive("total_length", self.total_length)?;
        ensure_positive("depth", self.depth)?;
        Ok(())
    }

    fn resistance(&self, rho: SoilResistivity, _config: &EngineConfig) -> Result<Scalar, DomainError> {
        Ok(formulas::ground_grid(
            rho.value(),
            self.area,
            self.total_length,
            self.depth,
        ))
    }

    fn expression(&self, _config: &EngineConfig) -> &'static str {
        formulas::GROUND_GRID_EXPRESSION
    }

    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("area", Area::new(self.area).to_string()),
            ("total_length", Length::new(self.total_length).to_string()),
            ("depth", Length::new(self.depth).to_string()),
        ]
    }
}

/// One of the four supported electrode shapes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElectrodeConfiguration {
    /// Single vertical rod.
    SingleRod(SingleRod),
    /// Rods in line.
    RodArray(RodArray),
    /// Horizontal buried conductor.
    BuriedConductor(BuriedConductor),
    /// Ground grid.
    GroundGrid(GroundGrid),
}

impl ElectrodeConfiguration {
    /// Borrows the shape behind the tag.
    #[must_use]
    pub fn as_electrode(&self) -> &dyn Electrode {
        match self {
            Self::SingleRod(rod) => rod,
            Self::RodArray(array) => array,
            Self::BuriedConductor(conductor) => conductor,
            Self::GroundGrid(grid) => grid,
        }
    }

    /// Tag of the wrapped shape.
    #[must_use]
    pub fn kind(&self) -> ElectrodeKind {
        self.as_electrode().kind()
    }

    /// Validates the wrapped shape.
    ///
    /// # Errors
    ///
    /// See [`Electrode::validate`].
    pub fn validate(&self) -> Result<(), DomainError> {
        self.as_electrode().validate()
    }

    /// Builds a validated configuration from loosely typed fields, as
    /// collected by a form or command line.
    ///
    /// # Errors
    ///
    /// [`DomainError::MissingParameter`] for a field the shape needs but
    /// `params` lacks, or any validation error of the shape itself.
    pub fn from_parameters(kind: ElectrodeKind, params: &ElectrodeParameters) -> Result<Self, DomainError> {
        fn required<T: Copy>(name: &'static str, value: Option<T>) -> Result<T, DomainError> {
            value.ok_or(DomainError::MissingParameter(name))
        }

        let config = match kind {
            ElectrodeKind::SingleRod => Self::SingleRod(SingleRod::new(
                required("length", params.length)?,
                required("diameter", params.diameter)?,
            )?),
            ElectrodeKind::RodArray => Self::RodArray(RodArray::new(
                required("count", params.count)?,
                required("length", params.length)?,
                required("diameter", params.diameter)?,
                required("spacing", params.spacing)?,
            )?),
            ElectrodeKind::BuriedConductor => Self::BuriedConductor(BuriedConductor::new(
                required("length", params.length)?,
                required("diameter", params.diameter)?,
                required("depth", params.depth)?,
            )?),
            ElectrodeKind::GroundGrid => Self::GroundGrid(GroundGrid::new(
                required("area", params.area)?,
                required("total_length", params.total_length)?,
                required("depth", params.depth)?,
            )?),
        };
        Ok(config)
    }
}

impl From<SingleRod> for ElectrodeConfiguration {
    fn from(rod: SingleRod) -> Self {
        Self::SingleRod(rod)
    }
}

impl From<RodArray> for ElectrodeConfiguration {
    fn from(array: RodArray) -> Self {
        Self::RodArray(array)
    }
}

impl From<BuriedConductor> for ElectrodeConfiguration {
    fn from(conductor: BuriedConductor) -> Self {
        Self::BuriedConductor(conductor)
    }
}

impl From<GroundGrid> for ElectrodeConfiguration {
    fn from(grid: GroundGrid) -> Self {
        Self::GroundGrid(grid)
    }
}

/// Optional geometry fields gathered from untyped input.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElectrodeParameters {
    /// Rod or conductor length (m).
    pub length: Option<Scalar>,
    /// Rod or conductor diameter (m).
    pub diameter: Option<Scalar>,
    /// Rod count.
    pub count: Option<u32>,
    /// Rod spacing (m).
    pub spacing: Option<Scalar>,
    /// Burial depth (m).
    pub depth: Option<Scalar>,
    /// Grid area (m²).
    pub area: Option<Scalar>,
    /// Total grid conductor length (m).
    pub total_length: Option<Scalar>,
}

/// Bare electrode tag.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElectrodeKind {
    /// Single vertical rod.
    SingleRod,
    /// Rods in line.
    RodArray,
    /// Horizontal buried conductor.
    BuriedConductor,
    /// Ground grid.
    GroundGrid,
}

impl ElectrodeKind {
    /// All tags in menu order.
    pub const ALL: [Self; 4] = [
        Self::SingleRod,
        Self::RodArray,
        Self::BuriedConductor,
        Self::GroundGrid,
    ];

    /// Kebab-case identifier accepted by [`FromStr`].
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::SingleRod => "single-rod",
            Self::RodArray => "rod-array",
            Self::BuriedConductor => "buried-conductor",
            Self::GroundGrid => "ground-grid",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleRod => "single vertical rod",
            Self::RodArray => "rods in line",
            Self::BuriedConductor => "buried horizontal conductor",
            Self::GroundGrid => "ground grid",
        }
    }
}

impl fmt::Display for ElectrodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ElectrodeKind {
    type Err = DomainError;

    /// Accepts the menu numbers `1`–`4` or a name such as `rod-array`,
    /// `rod_array` or `RodArray`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "1" | "singlerod" | "rod" => Ok(Self::SingleRod),
            "2" | "rodarray" | "rods" => Ok(Self::RodArray),
            "3" | "buriedconductor" | "conductor" => Ok(Self::BuriedConductor),
            "4" | "groundgrid" | "grid" => Ok(Self::GroundGrid),
            _ => Err(DomainError::InvalidVariant(s.to_string())),
        }
    }
}
