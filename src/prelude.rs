//! Convenience re-exports for grounding calculations.

pub use crate::compliance::{ComplianceStatus, QualityRating};
pub use crate::config::EngineConfig;
pub use crate::constants::*;
pub use crate::design::GroundingDesign;
pub use crate::electrodes::{
    BuriedConductor, Electrode, ElectrodeConfiguration, ElectrodeKind, ElectrodeParameters,
    GroundGrid, RodArray, SingleRod,
};
pub use crate::engine::{
    classify, compute, minimum_count_for_target, suggest, GroundingEngine, ResistanceResult,
    RodArrayBreakdown,
};
pub use crate::errors::{DomainError, GroundingError};
pub use crate::formulas::{utilization_factor, ConductorModel, RodArrayModel};
pub use crate::math::Scalar;
pub use crate::report::{Report, RodCountAdvice};
pub use crate::soil::{SoilKind, SoilResistivity};
pub use crate::sweep::{
    linspace, logspace, write_comparison_csv, write_sweep_csv, SoilComparison, SweepParameter,
    SweepPoint,
};
pub use crate::units::{Area, Length, Ohm, OhmMetre, Quantity, Resistance, Resistivity, Unit};
