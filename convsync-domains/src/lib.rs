//! Convsync Domains - Concrete Quantity Tables
//!
//! Six instances of the generic engine, one per quantity:
//! - Length (mm, cm, m, km, in, ft, yd, mi)
//! - Area (m2, ft2, ha, acres)
//! - Mass (g, kg, lb, oz)
//! - Volume (l, ml, gal, cup, floz)
//! - Temperature (c, f)
//! - Currency (cad, eur, usd, btc, sats)
//!
//! Each module exposes `group()`; [`DomainRegistry`] aggregates all six.

pub mod length;
pub mod area;
pub mod mass;
pub mod volume;
pub mod temperature;
pub mod currency;

use convsync_core::{ConversionGroup, GroupError};

/// All shipped conversion groups, built once at startup.
///
/// Groups carry their own reentrancy lock, so the registry is plain
/// per-caller state rather than a process-wide static.
pub struct DomainRegistry {
    groups: Vec<ConversionGroup>,
}

impl DomainRegistry {
    /// Build every domain table. Fails only on a misconfigured table,
    /// which the shipped tables never are.
    pub fn new() -> Result<Self, GroupError> {
        Ok(DomainRegistry {
            groups: vec![
                length::group()?,
                area::group()?,
                mass::group()?,
                volume::group()?,
                temperature::group()?,
                currency::group()?,
            ],
        })
    }

    /// Look up a group by domain name.
    pub fn get(&self, name: &str) -> Option<&ConversionGroup> {
        self.groups.iter().find(|g| g.name() == name)
    }

    /// Domain names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name()).collect()
    }

    pub fn groups(&self) -> &[ConversionGroup] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_builds_all_domains() {
        let registry = DomainRegistry::new().unwrap();
        assert_eq!(
            registry.names(),
            vec!["length", "area", "mass", "volume", "temperature", "currency"]
        );
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = DomainRegistry::new().unwrap();
        assert_eq!(registry.get("mass").unwrap().base_key(), "kg");
        assert!(registry.get("pressure").is_none());
    }

    #[test]
    fn test_unparsable_input_is_silent_in_every_domain() {
        let registry = DomainRegistry::new().unwrap();
        for group in registry.groups() {
            let base = group.base_key().to_string();
            assert!(group.on_edit(&base, "abc").is_empty(), "{}", group.name());
        }
    }

    #[test]
    fn test_binding_over_temperature() {
        use convsync_core::FieldBinding;
        let binding = FieldBinding::new(temperature::group().unwrap());
        binding.edit("c", "0");
        assert_eq!(binding.text("f").as_deref(), Some("32.0"));
        binding.edit("f", "212");
        assert_eq!(binding.text("c").as_deref(), Some("100.0"));
        assert_eq!(binding.text("f").as_deref(), Some("212"));
    }

    #[test]
    fn test_groups_are_independent() {
        let registry = DomainRegistry::new().unwrap();
        let length = registry.get("length").unwrap();
        let mass = registry.get("mass").unwrap();
        // a fan-out in one group must not lock out another
        length.fan_out("m", "1", |_, _| {
            assert!(!mass.on_edit("kg", "1").is_empty());
        });
    }
}
