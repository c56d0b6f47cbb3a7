//! Volume - liter base with metric and US kitchen units

use convsync_core::{ConversionGroup, GroupError, RoundingPolicy, Scale};

const GAL_PER_L: f64 = 0.264172;
const CUP_PER_L: f64 = 4.22675;
const FLOZ_PER_L: f64 = 33.814;

/// Build the volume group. Liters keep three fixed decimals, milliliters
/// are whole numbers, the US units get two trimmed decimals.
pub fn group() -> Result<ConversionGroup, GroupError> {
    ConversionGroup::builder("volume")
        .base("l", "liters", RoundingPolicy::Fixed(3))
        .unit("ml", "milliliters", Scale::linear(0.001), RoundingPolicy::Integer)
        .unit("gal", "US gallons", Scale::linear(1.0 / GAL_PER_L), RoundingPolicy::Trimmed(2))
        .unit("cup", "US cups", Scale::linear(1.0 / CUP_PER_L), RoundingPolicy::Trimmed(2))
        .unit(
            "floz",
            "US fluid ounces",
            Scale::linear(1.0 / FLOZ_PER_L),
            RoundingPolicy::Trimmed(2),
        )
        .build()
}
