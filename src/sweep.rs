//! Parameter sweeps, soil comparisons and CSV export helpers.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::compliance::ComplianceStatus;
use crate::constants::{RESISTIVITY_SWEEP_MAX, RESISTIVITY_SWEEP_MIN};
use crate::electrodes::ElectrodeConfiguration;
use crate::engine::GroundingEngine;
use crate::errors::DomainError;
use crate::math::Scalar;
use crate::soil::{SoilKind, SoilResistivity};

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Generates `n` logarithmically spaced samples between `start` and `stop`.
///
/// # Errors
///
/// [`DomainError::NonPositiveInput`] unless both bounds are positive.
pub fn logspace(start: Scalar, stop: Scalar, n: usize) -> Result<Vec<Scalar>, DomainError> {
    crate::math::ensure_positive("start", start)?;
    crate::math::ensure_positive("stop", stop)?;
    Ok(linspace(start.log10(), stop.log10(), n)
        .into_iter()
        .map(|exponent| 10f64.powf(exponent))
        .collect())
}

/// Input varied by a sweep.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweepParameter {
    /// Soil resistivity (Ω·m).
    Resistivity,
    /// Rod or conductor length (m).
    Length,
    /// Rod or conductor diameter (m).
    Diameter,
    /// Burial depth (m).
    Depth,
    /// Grid area (m²).
    Area,
    /// Rod spacing (m).
    Spacing,
    /// Total grid conductor length (m).
    TotalLength,
}

impl SweepParameter {
    /// Column name used in CSV output.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Resistivity => "resistivity_ohm_m",
            Self::Length => "length_m",
            Self::Diameter => "diameter_m",
            Self::Depth => "depth_m",
            Self::Area => "area_m2",
            Self::Spacing => "spacing_m",
            Self::TotalLength => "total_length_m",
        }
    }

    /// Range swept when no bounds are given, if the parameter has one.
    #[must_use]
    pub const fn default_range(self) -> Option<(Scalar, Scalar)> {
        match self {
            Self::Resistivity => Some((RESISTIVITY_SWEEP_MIN, RESISTIVITY_SWEEP_MAX)),
            _ => None,
        }
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Resistivity => "resistivity",
            Self::Length => "length",
            Self::Diameter => "diameter",
            Self::Depth => "depth",
            Self::Area => "area",
            Self::Spacing => "spacing",
            Self::TotalLength => "total-length",
        };
        f.write_str(name)
    }
}

impl FromStr for SweepParameter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "resistivity" | "rho" => Ok(Self::Resistivity),
            "length" => Ok(Self::Length),
            "diameter" => Ok(Self::Diameter),
            "depth" => Ok(Self::Depth),
            "area" => Ok(Self::Area),
            "spacing" => Ok(Self::Spacing),
            "total-length" => Ok(Self::TotalLength),
            _ => Err(DomainError::InvalidVariant(s.to_string())),
        }
    }
}

impl ElectrodeConfiguration {
    /// Returns a copy with one geometry field replaced.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidVariant`] when the shape has no such field
    /// (resistivity is never an electrode field).
    pub fn with_parameter(&self, parameter: SweepParameter, value: Scalar) -> Result<Self, DomainError> {
        let mut updated = *self;
        let slot = match (&mut updated, parameter) {
            (Self::SingleRod(rod), SweepParameter::Length) => &mut rod.length,
            (Self::SingleRod(rod), SweepParameter::Diameter) => &mut rod.diameter,
            (Self::RodArray(array), SweepParameter::Length) => &mut array.length,
            (Self::RodArray(array), SweepParameter::Diameter) => &mut array.diameter,
            (Self::RodArray(array), SweepParameter::Spacing) => &mut array.spacing,
            (Self::BuriedConductor(conductor), SweepParameter::Length) => &mut conductor.length,
            (Self::BuriedConductor(conductor), SweepParameter::Diameter) => &mut conductor.diameter,
            (Self::BuriedConductor(conductor), SweepParameter::Depth) => &mut conductor.depth,
            (Self::GroundGrid(grid), SweepParameter::Area) => &mut grid.area,
            (Self::GroundGrid(grid), SweepParameter::TotalLength) => &mut grid.total_length,
            (Self::GroundGrid(grid), SweepParameter::Depth) => &mut grid.depth,
            (shape, parameter) => {
                return Err(DomainError::InvalidVariant(format!(
                    "{} has no {parameter} parameter",
                    shape.kind().id()
                )))
            }
        };
        *slot = value;
        Ok(updated)
    }
}

/// One evaluated sample.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// Value of the swept parameter.
    pub value: Scalar,
    /// Resulting resistance (Ω).
    pub resistance: Scalar,
    /// Compliance class of the resistance.
    pub status: ComplianceStatus,
}

/// Resistance at the typical resistivity of one soil type.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilComparison {
    /// Soil category.
    pub soil: SoilKind,
    /// Typical resistivity used.
    pub resistivity: SoilResistivity,
    /// Resulting resistance (Ω).
    pub resistance: Scalar,
}

impl GroundingEngine {
    /// Evaluates `electrode` once per entry of `values`, substituting the
    /// swept parameter.
    ///
    /// # Errors
    ///
    /// Stops at the first sample the engine rejects.
    pub fn sweep<I>(
        &self,
        electrode: &ElectrodeConfiguration,
        rho: SoilResistivity,
        parameter: SweepParameter,
        values: I,
    ) -> Result<Vec<SweepPoint>, DomainError>
    where
        I: IntoIterator<Item = Scalar>,
    {
        values
            .into_iter()
            .map(|value| {
                let result = match parameter {
                    SweepParameter::Resistivity => self.compute(electrode, SoilResistivity::new(value)?)?,
                    _ => self.compute(&electrode.with_parameter(parameter, value)?, rho)?,
                };
                Ok(SweepPoint {
                    value,
                    resistance: result.resistance,
                    status: result.status,
                })
            })
            .collect()
    }

    /// Evaluates `electrode` in every [`SoilKind`] at its typical resistivity.
    ///
    /// # Errors
    ///
    /// Propagates the engine's validation errors.
    pub fn compare_soils(&self, electrode: &ElectrodeConfiguration) -> Result<Vec<SoilComparison>, DomainError> {
        SoilKind::ALL
            .into_iter()
            .map(|soil| {
                let resistivity = soil.typical_resistivity();
                let result = self.compute(electrode, resistivity)?;
                Ok(SoilComparison {
                    soil,
                    resistivity,
                    resistance: result.resistance,
                })
            })
            .collect()
    }
}

/// Writes sweep samples as CSV with a header row.
pub fn write_sweep_csv<W: Write>(mut w: W, parameter: SweepParameter, points: &[SweepPoint]) -> io::Result<()> {
    writeln!(w, "{},resistance_ohm,status", parameter.column())?;
    for point in points {
        writeln!(w, "{:.16e},{:.16e},{:?}", point.value, point.resistance, point.status)?;
    }
    Ok(())
}

/// Writes a soil comparison as CSV with a header row.
pub fn write_comparison_csv<W: Write>(mut w: W, rows: &[SoilComparison]) -> io::Result<()> {
    writeln!(w, "soil,resistivity_ohm_m,resistance_ohm")?;
    for row in rows {
        writeln!(w, "{},{:.16e},{:.16e}", row.soil, row.resistivity.value(), row.resistance)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::electrodes::{GroundGrid, SingleRod};

    fn rod() -> ElectrodeConfiguration {
        SingleRod::new(2.4, 0.015).unwrap().into()
    }

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn logspace_spans_decades() {
        let v = logspace(10.0, 10_000.0, 4).unwrap();
        assert_eq!(v.len(), 4);
        assert_relative_eq!(v[0], 10.0, max_relative = 1e-12);
        assert_relative_eq!(v[1], 100.0, max_relative = 1e-12);
        assert_relative_eq!(v[3], 10_000.0, max_relative = 1e-12);
        assert!(logspace(0.0, 10.0, 3).is_err());
    }

    #[test]
    fn with_parameter_rejects_foreign_fields() {
        let err = rod().with_parameter(SweepParameter::Area, 10.0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidVariant(_)));
        assert!(rod().with_parameter(SweepParameter::Resistivity, 10.0).is_err());

        let grid: ElectrodeConfiguration = GroundGrid::new(64.0, 32.0, 0.6).unwrap().into();
        let deeper = grid.with_parameter(SweepParameter::Depth, 1.0).unwrap();
        assert_eq!(deeper, GroundGrid::new(64.0, 32.0, 1.0).unwrap().into());
    }

    #[test]
    fn length_sweep_is_decreasing() {
        let engine = GroundingEngine::default();
        let rho = SoilResistivity::new(100.0).unwrap();
        let points = engine
            .sweep(&rod(), rho, SweepParameter::Length, linspace(0.5, 10.0, 20))
            .unwrap();
        assert_eq!(points.len(), 20);
        assert!(points.windows(2).all(|w| w[1].resistance < w[0].resistance));
    }

    #[test]
    fn resistivity_sweep_is_linear() {
        let engine = GroundingEngine::default();
        let rho = SoilResistivity::new(100.0).unwrap();
        let points = engine
            .sweep(&rod(), rho, SweepParameter::Resistivity, [100.0, 200.0])
            .unwrap();
        assert_relative_eq!(points[1].resistance, 2.0 * points[0].resistance, max_relative = 1e-12);
    }

    #[test]
    fn sweep_stops_at_invalid_sample() {
        let engine = GroundingEngine::default();
        let rho = SoilResistivity::new(100.0).unwrap();
        let err = engine
            .sweep(&rod(), rho, SweepParameter::Length, [2.4, 0.0])
            .unwrap_err();
        assert!(matches!(err, DomainError::NonPositiveInput { field: "length", .. }));
    }

    #[test]
    fn soil_comparison_orders_by_resistivity() {
        let rows = GroundingEngine::default().compare_soils(&rod()).unwrap();
        assert_eq!(rows.len(), SoilKind::ALL.len());
        assert!(rows.windows(2).all(|w| w[1].resistance > w[0].resistance));
    }

    #[test]
    fn csv_has_header_and_rows() {
        let points = [SweepPoint {
            value: 2.4,
            resistance: 36.5,
            status: ComplianceStatus::NonCompliant,
        }];
        let mut buf = Vec::new();
        write_sweep_csv(&mut buf, SweepParameter::Length, &points).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("length_m,resistance_ohm,status"));
        assert!(lines.next().unwrap().ends_with(",NonCompliant"));
    }

    #[test]
    fn comparison_csv_lists_each_soil() {
        let rows = GroundingEngine::default().compare_soils(&rod()).unwrap();
        let mut buf = Vec::new();
        write_comparison_csv(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "soil,resistivity_ohm_m,resistance_ohm");
        assert_eq!(lines.len(), SoilKind::ALL.len() + 1);
        assert!(lines[1].starts_with("wet clay,"), "{text}");
    }

    #[test]
    fn only_resistivity_has_default_range() {
        assert_eq!(
            SweepParameter::Resistivity.default_range(),
            Some((RESISTIVITY_SWEEP_MIN, RESISTIVITY_SWEEP_MAX))
        );
        assert_eq!(SweepParameter::Length.default_range(), None);
    }

    #[test]
    fn parameter_names_round_trip() {
        for parameter in [
            SweepParameter::Resistivity,
            SweepParameter::Length,
            SweepParameter::Diameter,
            SweepParameter::Depth,
            SweepParameter::Area,
            SweepParameter::Spacing,
            SweepParameter::TotalLength,
        ] {
            assert_eq!(parameter.to_string().parse::<SweepParameter>().unwrap(), parameter);
        }
    }
}
