//! Convsync Core - Linked-Field Unit Conversion Engine
//!
//! Generic bidirectional synchronization for groups of fields that show
//! one physical quantity in several units. Editing any field converts
//! its value through the group's base unit, fans it out to every
//! sibling, and renders each per that unit's rounding policy, while a
//! per-group reentrancy lock keeps write-backs from re-triggering
//! conversion.
//!
//! Building blocks:
//! - [`RoundingPolicy`] / [`format`] - per-unit display rendering
//! - [`Scale`] / [`UnitDef`] - static unit configuration
//! - [`ConversionGroup`] - the synchronization engine
//! - [`FieldBinding`] - in-memory surfaces wired to a group

mod format;
mod unit;
mod group;
mod binding;

pub use format::{format, RoundingPolicy, SMALL_MAGNITUDE};
pub use unit::{Scale, UnitDef};
pub use group::{ConversionGroup, GroupBuilder, GroupError};
pub use binding::FieldBinding;
