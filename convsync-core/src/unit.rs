//! Unit definitions - scale to the group base unit plus display policy

use serde::{Serialize, Deserialize};

use crate::format::RoundingPolicy;

/// Linear-or-affine map between a unit and its group's base unit
/// (base = value * factor + offset).
///
/// The offset is only non-zero for non-proportional units such as
/// Fahrenheit; everything else is a plain factor through the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    /// Multiplier applied when converting into the base unit.
    pub factor: f64,
    /// Offset added after the factor.
    pub offset: f64,
}

impl Scale {
    /// The base unit's own scale.
    pub const IDENTITY: Scale = Scale { factor: 1.0, offset: 0.0 };

    /// Proportional scale (no offset).
    pub fn linear(factor: f64) -> Self {
        Scale { factor, offset: 0.0 }
    }

    /// Affine scale, for temperature-style units.
    pub fn affine(factor: f64, offset: f64) -> Self {
        Scale { factor, offset }
    }

    /// Convert a value in this unit to the group base unit.
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor + self.offset
    }

    /// Convert a base-unit value into this unit. Exact inverse of
    /// [`Scale::to_base`] up to floating-point error.
    pub fn from_base(&self, base: f64) -> f64 {
        (base - self.offset) / self.factor
    }

    /// A scale is usable when its parameters are finite and the factor is
    /// invertible.
    pub fn is_valid(&self) -> bool {
        self.factor.is_finite() && self.offset.is_finite() && self.factor != 0.0
    }
}

/// One unit of a conversion group: key, human-facing label, scale to the
/// base unit, and how converted values are rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDef {
    /// Unique identifier within the group (e.g. "m2", "ft2").
    pub key: String,
    /// Display label (e.g. "square meters").
    pub label: String,
    /// Map to/from the group base unit.
    pub scale: Scale,
    /// Rendering rule for values converted into this unit.
    pub policy: RoundingPolicy,
}

impl UnitDef {
    pub fn new(key: &str, label: &str, scale: Scale, policy: RoundingPolicy) -> Self {
        UnitDef {
            key: key.to_string(),
            label: label.to_string(),
            scale,
            policy,
        }
    }
}
