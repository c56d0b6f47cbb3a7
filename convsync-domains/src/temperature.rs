//! Temperature - the two-unit affine group
//!
//! Celsius is the base; Fahrenheit is the one unit in the workspace whose
//! scale carries an offset (F = C * 9/5 + 32). Both directions display
//! with one fixed decimal.

use convsync_core::{ConversionGroup, GroupError, RoundingPolicy, Scale};

/// Celsius degrees per Fahrenheit degree.
const F_FACTOR: f64 = 5.0 / 9.0;

/// Build the temperature group. The offset is written as `-32 * factor`
/// so that 32 F maps to exactly 0 C in f64 (scaling a double by 32 is
/// exact).
pub fn group() -> Result<ConversionGroup, GroupError> {
    ConversionGroup::builder("temperature")
        .base("c", "degrees Celsius", RoundingPolicy::Fixed(1))
        .unit(
            "f",
            "degrees Fahrenheit",
            Scale::affine(F_FACTOR, -32.0 * F_FACTOR),
            RoundingPolicy::Fixed(1),
        )
        .build()
}
