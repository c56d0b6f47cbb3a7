//! Conversion groups - the bidirectional synchronization engine
//!
//! A group owns the units sharing one base unit and a reentrancy lock.
//! Editing any unit fans the value out to every sibling: raw text is
//! parsed, routed through the base unit, converted into each other unit
//! and rendered under that unit's rounding policy. The lock is held for
//! the synchronous extent of one fan-out, so write-backs that re-emit
//! change events cannot re-trigger conversion.

use std::cell::Cell;
use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, trace};

use crate::format::{format, RoundingPolicy};
use crate::unit::{Scale, UnitDef};

/// Errors raised while assembling a group or converting between named
/// units. The edit path itself never errors; bad input is a silent no-op.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GroupError {
    /// Two units registered under the same key.
    #[error("duplicate unit key: {0}")]
    DuplicateUnit(String),
    /// The builder was finished without a base unit.
    #[error("group '{0}' has no base unit")]
    NoBaseUnit(String),
    /// A unit's scale has a zero or non-finite parameter.
    #[error("unit '{0}' has an invalid scale")]
    InvalidScale(String),
    /// Unknown unit key.
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
}

/// A set of units sharing one base unit and one reentrancy lock.
///
/// All configuration is immutable after [`GroupBuilder::build`]; the only
/// mutable state is the transient `locked` flag.
#[derive(Debug)]
pub struct ConversionGroup {
    name: String,
    base_key: String,
    units: Vec<UnitDef>,
    locked: Cell<bool>,
}

impl ConversionGroup {
    /// Start building a group.
    pub fn builder(name: &str) -> GroupBuilder {
        GroupBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key of the unit whose value is the canonical representation.
    pub fn base_key(&self) -> &str {
        &self.base_key
    }

    /// Units in display order.
    pub fn units(&self) -> &[UnitDef] {
        &self.units
    }

    /// Look up a unit by key.
    pub fn unit(&self, key: &str) -> Option<&UnitDef> {
        self.units.iter().find(|u| u.key == key)
    }

    /// Handle one edit event, streaming each sibling's display string
    /// through `write`.
    ///
    /// The lock is held across the `write` calls: if writing a display
    /// string back to a surface re-emits a change event that calls back
    /// into this group, the nested call is suppressed as a no-op. Text
    /// that does not parse to a finite number is ignored without taking
    /// the lock, as is an unknown `edited_key`. The edited unit itself is
    /// never written.
    pub fn fan_out<F>(&self, edited_key: &str, raw_input: &str, mut write: F)
    where
        F: FnMut(&str, &str),
    {
        if self.locked.get() {
            trace!(group = %self.name, unit = edited_key, "reentrant edit suppressed");
            return;
        }
        let Some(edited) = self.unit(edited_key) else {
            return;
        };
        let Ok(value) = raw_input.trim().parse::<f64>() else {
            return;
        };
        if !value.is_finite() {
            return;
        }

        self.locked.set(true);
        let base = edited.scale.to_base(value);
        debug!(group = %self.name, unit = edited_key, value, base, "fan-out");
        for unit in &self.units {
            if unit.key == edited_key {
                continue;
            }
            let text = format(unit.scale.from_base(base), unit.policy);
            write(&unit.key, &text);
        }
        self.locked.set(false);
    }

    /// Handle one edit event, collecting sibling display strings into a
    /// mapping. Unparsable input and reentrant calls yield an empty map.
    pub fn on_edit(&self, edited_key: &str, raw_input: &str) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        self.fan_out(edited_key, raw_input, |key, text| {
            out.insert(key.to_string(), text.to_string());
        });
        out
    }

    /// Convert a numeric value between two named units, routing through
    /// the base unit.
    pub fn convert(&self, from: &str, to: &str, value: f64) -> Result<f64, GroupError> {
        let from = self
            .unit(from)
            .ok_or_else(|| GroupError::UnknownUnit(from.to_string()))?;
        let to = self
            .unit(to)
            .ok_or_else(|| GroupError::UnknownUnit(to.to_string()))?;
        Ok(to.scale.from_base(from.scale.to_base(value)))
    }
}

/// Builder validating a group's static configuration.
#[derive(Debug)]
pub struct GroupBuilder {
    name: String,
    base_key: Option<String>,
    units: Vec<UnitDef>,
}

impl GroupBuilder {
    pub fn new(name: &str) -> Self {
        GroupBuilder {
            name: name.to_string(),
            base_key: None,
            units: Vec::new(),
        }
    }

    /// Register the base unit (identity scale).
    pub fn base(mut self, key: &str, label: &str, policy: RoundingPolicy) -> Self {
        self.base_key = Some(key.to_string());
        self.units.push(UnitDef::new(key, label, Scale::IDENTITY, policy));
        self
    }

    /// Register a non-base unit.
    pub fn unit(mut self, key: &str, label: &str, scale: Scale, policy: RoundingPolicy) -> Self {
        self.units.push(UnitDef::new(key, label, scale, policy));
        self
    }

    /// Validate and finish the group.
    pub fn build(self) -> Result<ConversionGroup, GroupError> {
        let base_key = self
            .base_key
            .ok_or_else(|| GroupError::NoBaseUnit(self.name.clone()))?;
        for (i, unit) in self.units.iter().enumerate() {
            if !unit.scale.is_valid() {
                return Err(GroupError::InvalidScale(unit.key.clone()));
            }
            if self.units[..i].iter().any(|u| u.key == unit.key) {
                return Err(GroupError::DuplicateUnit(unit.key.clone()));
            }
        }
        Ok(ConversionGroup {
            name: self.name,
            base_key,
            units: self.units,
            locked: Cell::new(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_group() -> ConversionGroup {
        ConversionGroup::builder("length")
            .base("m", "meters", RoundingPolicy::Trimmed(2))
            .unit("mm", "millimeters", Scale::linear(0.001), RoundingPolicy::Integer)
            .unit("km", "kilometers", Scale::linear(1000.0), RoundingPolicy::Trimmed(3))
            .build()
            .unwrap()
    }

    #[test]
    fn test_edit_fans_out_to_siblings() {
        let group = test_group();
        let out = group.on_edit("m", "1");
        assert_eq!(out.get("mm").map(String::as_str), Some("1000"));
        assert_eq!(out.get("km").map(String::as_str), Some("0.001"));
        assert!(!out.contains_key("m"), "edited field must not be overwritten");
    }

    #[test]
    fn test_edit_from_non_base_unit() {
        let group = test_group();
        let out = group.on_edit("km", "2.5");
        assert_eq!(out.get("m").map(String::as_str), Some("2500"));
        assert_eq!(out.get("mm").map(String::as_str), Some("2500000"));
    }

    #[test]
    fn test_unparsable_input_is_silent() {
        let group = test_group();
        assert!(group.on_edit("m", "abc").is_empty());
        assert!(group.on_edit("m", "").is_empty());
        assert!(group.on_edit("m", "1.2.3").is_empty());
        assert!(group.on_edit("m", "inf").is_empty());
        assert!(group.on_edit("m", "NaN").is_empty());
    }

    #[test]
    fn test_unknown_unit_is_silent() {
        let group = test_group();
        assert!(group.on_edit("furlong", "1").is_empty());
    }

    #[test]
    fn test_whitespace_tolerated() {
        let group = test_group();
        let out = group.on_edit("m", "  1.5 ");
        assert_eq!(out.get("mm").map(String::as_str), Some("1500"));
    }

    #[test]
    fn test_zero_and_negative_propagate() {
        let group = test_group();
        assert_eq!(group.on_edit("m", "0").get("km").map(String::as_str), Some("0"));
        assert_eq!(group.on_edit("m", "-500").get("km").map(String::as_str), Some("-0.5"));
    }

    #[test]
    fn test_no_op_edit_is_idempotent() {
        let group = test_group();
        let first = group.on_edit("km", "0.001");
        let second = group.on_edit("km", "0.001");
        assert_eq!(first, second);
    }

    #[test]
    fn test_reentrant_call_returns_empty() {
        let group = test_group();
        let mut nested_checked = false;
        group.fan_out("m", "1", |key, text| {
            // a write-back that immediately edits the sibling must be a no-op
            assert!(group.on_edit(key, text).is_empty());
            nested_checked = true;
        });
        assert!(nested_checked);
        // lock released after the fan-out completes
        assert!(!group.on_edit("m", "1").is_empty());
    }

    #[test]
    fn test_convert_between_units() {
        let group = test_group();
        let km = group.convert("mm", "km", 2_000_000.0).unwrap();
        assert!((km - 2.0).abs() < 1e-9);
        assert_eq!(
            group.convert("m", "furlong", 1.0),
            Err(GroupError::UnknownUnit("furlong".to_string()))
        );
    }

    #[test]
    fn test_builder_rejects_duplicate_keys() {
        let err = ConversionGroup::builder("g")
            .base("m", "meters", RoundingPolicy::Trimmed(2))
            .unit("m", "meters again", Scale::linear(2.0), RoundingPolicy::Integer)
            .build()
            .unwrap_err();
        assert_eq!(err, GroupError::DuplicateUnit("m".to_string()));
    }

    #[test]
    fn test_builder_requires_base() {
        let err = ConversionGroup::builder("g")
            .unit("mm", "millimeters", Scale::linear(0.001), RoundingPolicy::Integer)
            .build()
            .unwrap_err();
        assert_eq!(err, GroupError::NoBaseUnit("g".to_string()));
    }

    #[test]
    fn test_builder_rejects_invalid_scale() {
        let err = ConversionGroup::builder("g")
            .base("m", "meters", RoundingPolicy::Trimmed(2))
            .unit("broken", "broken", Scale::linear(0.0), RoundingPolicy::Integer)
            .build()
            .unwrap_err();
        assert_eq!(err, GroupError::InvalidScale("broken".to_string()));
    }
}
