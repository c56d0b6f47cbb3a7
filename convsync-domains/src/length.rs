//! Length - metric and imperial units over a meter base

use convsync_core::{ConversionGroup, GroupError, RoundingPolicy, Scale};

/// Build the length group. Millimeters display as whole numbers,
/// kilometers and miles get three decimals, everything else two.
pub fn group() -> Result<ConversionGroup, GroupError> {
    ConversionGroup::builder("length")
        .base("m", "meters", RoundingPolicy::Trimmed(2))
        .unit("mm", "millimeters", Scale::linear(0.001), RoundingPolicy::Integer)
        .unit("cm", "centimeters", Scale::linear(0.01), RoundingPolicy::Trimmed(2))
        .unit("km", "kilometers", Scale::linear(1000.0), RoundingPolicy::Trimmed(3))
        .unit("in", "inches", Scale::linear(0.0254), RoundingPolicy::Trimmed(2))
        .unit("ft", "feet", Scale::linear(0.3048), RoundingPolicy::Trimmed(2))
        .unit("yd", "yards", Scale::linear(0.9144), RoundingPolicy::Trimmed(2))
        .unit("mi", "miles", Scale::linear(1609.344), RoundingPolicy::Trimmed(3))
        .build()
}
