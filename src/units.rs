//! Strongly typed quantities tagged with a unit marker.
//!
//! A [`Quantity`] is a thin wrapper over a scalar that only knows which unit
//! it is expressed in. Formatting honours the precision flag, so
//! `format!("{:.2}", r)` renders `"35.79 Ω"`.

use std::fmt;
use std::marker::PhantomData;

use crate::math::Scalar;

/// Marker trait for units of measure.
pub trait Unit {
    /// Symbol printed after the value.
    const SYMBOL: &'static str;
}

/// Ohm (Ω).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ohm;

/// Ohm-metre (Ω·m), the unit of resistivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OhmMetre;

/// Metre (m).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Metre;

/// Square metre (m²).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SquareMetre;

impl Unit for Ohm {
    const SYMBOL: &'static str = "Ω";
}

impl Unit for OhmMetre {
    const SYMBOL: &'static str = "Ω·m";
}

impl Unit for Metre {
    const SYMBOL: &'static str = "m";
}

impl Unit for SquareMetre {
    const SYMBOL: &'static str = "m²";
}

/// A value tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Quantity<T, U> {
    value: T,
    unit: PhantomData<U>,
}

impl<T: Copy, U> Quantity<T, U> {
    /// Wraps a raw value.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }
}

impl<T: fmt::Display, U: Unit> fmt::Display for Quantity<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.value, U::SYMBOL),
            None => write!(f, "{} {}", self.value, U::SYMBOL),
        }
    }
}

/// Resistance in ohms.
pub type Resistance = Quantity<Scalar, Ohm>;
/// Resistivity in ohm-metres.
pub type Resistivity = Quantity<Scalar, OhmMetre>;
/// Length in metres.
pub type Length = Quantity<Scalar, Metre>;
/// Area in square metres.
pub type Area = Quantity<Scalar, SquareMetre>;
