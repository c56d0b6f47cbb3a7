//! Display formatting - rounding policies and number rendering

use serde::{Serialize, Deserialize};

/// Magnitudes below this get extra decimals under [`RoundingPolicy::AdaptiveSmall`].
pub const SMALL_MAGNITUDE: f64 = 0.0001;

/// Decimal counts at or above this are rendered verbatim, never trimmed.
/// Cryptocurrency-scale precision expects all decimals kept (e.g. BTC's 8).
const NO_TRIM_DECIMALS: u8 = 6;

/// How a unit renders a converted value.
///
/// The policy is static per-unit data, not derived from the value at call
/// time; only `AdaptiveSmall` and `WholeAbove` inspect the value, and only
/// as part of their own fixed rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Exactly `n` decimal places, trailing zeros kept.
    Fixed(u8),
    /// Round to the nearest whole number.
    Integer,
    /// Up to `n` decimals with trailing zeros (and a bare point) stripped.
    /// Trimming is disabled for `n >= 6`.
    Trimmed(u8),
    /// Like `Trimmed(n)`, but magnitudes below `1e-4` render with `n + 2`
    /// fixed decimals so they do not collapse to zero.
    AdaptiveSmall(u8),
    /// Whole number once the value exceeds `threshold`, otherwise
    /// `Trimmed(decimals)`. Used where large readings are conventionally
    /// shown as integers (square feet, grams).
    WholeAbove { threshold: f64, decimals: u8 },
}

/// Render a finite value under a rounding policy.
///
/// Every finite input produces a string; NaN and infinities are excluded
/// upstream by the engine's parse step.
pub fn format(value: f64, policy: RoundingPolicy) -> String {
    match policy {
        RoundingPolicy::Fixed(n) => format!("{:.*}", n as usize, value),
        RoundingPolicy::Integer => format!("{:.0}", value),
        RoundingPolicy::Trimmed(n) => trimmed(value, n),
        RoundingPolicy::AdaptiveSmall(n) => {
            if value != 0.0 && value.abs() < SMALL_MAGNITUDE {
                format!("{:.*}", n as usize + 2, value)
            } else {
                trimmed(value, n)
            }
        }
        RoundingPolicy::WholeAbove { threshold, decimals } => {
            if value > threshold {
                format!("{:.0}", value)
            } else {
                trimmed(value, decimals)
            }
        }
    }
}

/// Render with up to `max_decimals` decimals, stripping trailing zeros.
fn trimmed(value: f64, max_decimals: u8) -> String {
    let rendered = format!("{:.*}", max_decimals as usize, value);
    if max_decimals == 0 || max_decimals >= NO_TRIM_DECIMALS {
        return rendered;
    }
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
