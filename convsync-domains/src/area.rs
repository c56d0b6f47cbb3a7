//! Area - square meters base with imperial and agrarian units

use convsync_core::{ConversionGroup, GroupError, RoundingPolicy, Scale};

/// Square meters per acre is quoted the way the site always did: as the
/// reciprocal of acres-per-square-meter.
const ACRES_PER_M2: f64 = 0.000247105;

/// Build the area group. Hectares and acres are tiny per square meter, so
/// both use the adaptive small-magnitude rendering; square feet switch to
/// whole numbers once readings get large.
pub fn group() -> Result<ConversionGroup, GroupError> {
    ConversionGroup::builder("area")
        .base("m2", "square meters", RoundingPolicy::Trimmed(2))
        .unit(
            "ft2",
            "square feet",
            Scale::linear(0.092903),
            RoundingPolicy::WholeAbove { threshold: 100.0, decimals: 1 },
        )
        .unit("ha", "hectares", Scale::linear(10000.0), RoundingPolicy::AdaptiveSmall(4))
        .unit(
            "acres",
            "acres",
            Scale::linear(1.0 / ACRES_PER_M2),
            RoundingPolicy::AdaptiveSmall(4),
        )
        .build()
}
