//! Regulatory thresholds, empirical tables and typical soil values.
//!
//! ## Thresholds
//!
//! The compliance ceilings follow common utility practice as summarized in
//! IEEE Std 142 ("Green Book") and ABNT NBR 5419:
//! - ≤ 1 Ω for sensitive electronic equipment,
//! - ≤ 5 Ω for telecommunication sites,
//! - ≤ 10 Ω for power systems and lightning protection.
//!
//! ## Utilization factors
//!
//! The multi-rod utilization factors are empirical values for rods driven in
//! a straight line at a spacing roughly equal to the rod length. Counts not
//! present in the table fall back to [`DEFAULT_UTILIZATION_FACTOR`].
//!
//! ## References
//!
//! - H. B. Dwight, "Calculation of Resistances to Ground", AIEE Transactions, 1936.
//! - IEEE Std 80-2013, Guide for Safety in AC Substation Grounding (Schwarz / Laurent).
//! - IEEE Std 142-2007, Recommended Practice for Grounding of Industrial and Commercial Power Systems.

use crate::math::Scalar;

/// Ceiling for sensitive electronic equipment, in ohms (inclusive).
pub const SENSITIVE_EQUIPMENT_LIMIT: Scalar = 1.0;
/// Ceiling for telecommunication systems, in ohms (inclusive).
pub const TELECOM_LIMIT: Scalar = 5.0;
/// Ceiling for power systems and lightning protection, in ohms (inclusive).
pub const POWER_AND_LIGHTNING_LIMIT: Scalar = 10.0;

/// Utilization factor η by exact rod count.
pub const UTILIZATION_TABLE: [(u32, Scalar); 7] = [
    (2, 0.85),
    (3, 0.75),
    (4, 0.65),
    (5, 0.60),
    (6, 0.55),
    (8, 0.50),
    (10, 0.45),
];
/// Utilization factor used for any count missing from [`UTILIZATION_TABLE`].
pub const DEFAULT_UTILIZATION_FACTOR: Scalar = 0.40;
/// Largest count listed in [`UTILIZATION_TABLE`].
pub const UTILIZATION_TABLE_MAX_COUNT: u32 = 10;

/// Typical resistivity of wet clay (Ω·m).
pub const WET_CLAY_RESISTIVITY: Scalar = 50.0;
/// Typical resistivity of agricultural topsoil (Ω·m).
pub const FARMLAND_RESISTIVITY: Scalar = 150.0;
/// Typical resistivity of wet sand (Ω·m).
pub const WET_SAND_RESISTIVITY: Scalar = 1_000.0;
/// Typical resistivity of rock (Ω·m).
pub const ROCK_RESISTIVITY: Scalar = 5_000.0;

/// Rod length most often found in practice (m).
pub const STANDARD_ROD_LENGTH: Scalar = 2.4;
/// 5/8" copper-bonded rod diameter (m).
pub const STANDARD_ROD_DIAMETER: Scalar = 0.016;

/// Lower bound of the resistivity range explored by the default sweep (Ω·m).
pub const RESISTIVITY_SWEEP_MIN: Scalar = 10.0;
/// Upper bound of the resistivity range explored by the default sweep (Ω·m).
pub const RESISTIVITY_SWEEP_MAX: Scalar = 10_000.0;
