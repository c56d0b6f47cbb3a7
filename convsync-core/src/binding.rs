//! Field binding - in-memory surfaces wired to a conversion group
//!
//! Each unit gets one editable text surface. A user edit stores the raw
//! text and fans out; every sibling write-back goes through the same
//! change path a user edit would take, so the binding is structurally
//! re-entrant and relies on the group lock to absorb the echo.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::group::ConversionGroup;

/// Binds a [`ConversionGroup`] to a set of editable text surfaces.
pub struct FieldBinding {
    group: ConversionGroup,
    surfaces: RefCell<BTreeMap<String, String>>,
}

impl FieldBinding {
    /// Create a binding with one empty surface per unit.
    pub fn new(group: ConversionGroup) -> Self {
        let surfaces = group
            .units()
            .iter()
            .map(|u| (u.key.clone(), String::new()))
            .collect();
        FieldBinding {
            group,
            surfaces: RefCell::new(surfaces),
        }
    }

    pub fn group(&self) -> &ConversionGroup {
        &self.group
    }

    /// A user edited the surface for `key`: store the raw text and update
    /// every sibling surface with its converted display string.
    pub fn edit(&self, key: &str, text: &str) {
        if !self.surfaces.borrow().contains_key(key) {
            return;
        }
        self.surfaces
            .borrow_mut()
            .insert(key.to_string(), text.to_string());
        self.changed(key, text);
    }

    /// The change path shared by user edits and programmatic write-backs.
    /// Sibling surfaces are written inside the fan-out, so the change
    /// events those writes re-emit arrive while the group lock is held
    /// and are absorbed as no-ops.
    fn changed(&self, key: &str, text: &str) {
        self.group.fan_out(key, text, |sibling, display| {
            self.surfaces
                .borrow_mut()
                .insert(sibling.to_string(), display.to_string());
            self.changed(sibling, display);
        });
    }

    /// Current text of a surface.
    pub fn text(&self, key: &str) -> Option<String> {
        self.surfaces.borrow().get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::RoundingPolicy;
    use crate::unit::Scale;

    fn binding() -> FieldBinding {
        let group = ConversionGroup::builder("mass")
            .base("kg", "kilograms", RoundingPolicy::Fixed(3))
            .unit("g", "grams", Scale::linear(0.001), RoundingPolicy::Integer)
            .unit("lb", "pounds", Scale::linear(1.0 / 2.20462), RoundingPolicy::Trimmed(2))
            .build()
            .unwrap();
        FieldBinding::new(group)
    }

    #[test]
    fn test_edit_updates_siblings() {
        let b = binding();
        b.edit("kg", "2");
        assert_eq!(b.text("kg").as_deref(), Some("2"));
        assert_eq!(b.text("g").as_deref(), Some("2000"));
        assert_eq!(b.text("lb").as_deref(), Some("4.41"));
    }

    #[test]
    fn test_edited_surface_keeps_raw_text() {
        let b = binding();
        b.edit("g", "1500.");
        // the field being typed in is never reformatted under the user
        assert_eq!(b.text("g").as_deref(), Some("1500."));
        assert_eq!(b.text("kg").as_deref(), Some("1.500"));
    }

    #[test]
    fn test_unparsable_edit_leaves_siblings_untouched() {
        let b = binding();
        b.edit("kg", "2");
        b.edit("kg", "2x");
        assert_eq!(b.text("kg").as_deref(), Some("2x"));
        assert_eq!(b.text("g").as_deref(), Some("2000"));
    }

    #[test]
    fn test_unknown_surface_ignored() {
        let b = binding();
        b.edit("stone", "4");
        assert_eq!(b.text("stone"), None);
    }

    #[test]
    fn test_reentrant_write_back_settles() {
        let b = binding();
        // the recursive change path must terminate and leave a consistent
        // set of surfaces
        b.edit("lb", "10");
        assert_eq!(b.text("lb").as_deref(), Some("10"));
        assert_eq!(b.text("kg").as_deref(), Some("4.536"));
        assert_eq!(b.text("g").as_deref(), Some("4536"));
    }
}
