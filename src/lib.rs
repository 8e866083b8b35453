#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Regulatory thresholds, utilization factors and typical soil values.
pub mod constants;
/// Strongly typed unit helpers and quantity abstractions.
pub mod units;
/// Shared numerical utilities.
pub mod math;
/// Soil resistivity and soil classification.
pub mod soil;
/// Electrode shapes and their geometry.
pub mod electrodes;
/// Closed-form resistance expressions.
pub mod formulas;
/// Compliance classes and quality ratings.
pub mod compliance;
/// Engine configuration and formula model selection.
pub mod config;
/// The resistance engine, classification and remediation advice.
pub mod engine;
/// Persisted electrode + soil designs.
pub mod design;
/// Parameter sweeps and soil comparisons.
pub mod sweep;
/// Text and JSON reports.
pub mod report;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

pub use engine::{classify, compute, minimum_count_for_target, suggest};
