//! Mass - kilogram base with gram, pound and ounce

use convsync_core::{ConversionGroup, GroupError, RoundingPolicy, Scale};

const LB_PER_KG: f64 = 2.20462;
const OZ_PER_KG: f64 = 35.27396;

/// Build the mass group. Kilograms keep three fixed decimals; grams show
/// whole numbers once past 10.
pub fn group() -> Result<ConversionGroup, GroupError> {
    ConversionGroup::builder("mass")
        .base("kg", "kilograms", RoundingPolicy::Fixed(3))
        .unit(
            "g",
            "grams",
            Scale::linear(0.001),
            RoundingPolicy::WholeAbove { threshold: 10.0, decimals: 1 },
        )
        .unit("lb", "pounds", Scale::linear(1.0 / LB_PER_KG), RoundingPolicy::Trimmed(2))
        .unit("oz", "ounces", Scale::linear(1.0 / OZ_PER_KG), RoundingPolicy::Trimmed(2))
        .build()
}
