//! Currency - Canadian dollar base with static reference rates
//!
//! Rates are compile-time constants, not fetched. Satoshis are the only
//! integer-valued unit in the workspace; Bitcoin keeps the conventional
//! eight decimals untrimmed.

use convsync_core::{ConversionGroup, GroupError, RoundingPolicy, Scale};

pub const CAD_TO_EUR: f64 = 0.68;
pub const CAD_TO_USD: f64 = 0.73;
/// 1 BTC = 95 000 CAD.
pub const CAD_TO_BTC: f64 = 1.0 / 95000.0;
/// Satoshis per bitcoin.
pub const SATS_PER_BTC: f64 = 1e8;

/// Build the currency group.
pub fn group() -> Result<ConversionGroup, GroupError> {
    ConversionGroup::builder("currency")
        .base("cad", "Canadian dollars", RoundingPolicy::Trimmed(2))
        .unit("eur", "euros", Scale::linear(1.0 / CAD_TO_EUR), RoundingPolicy::Trimmed(2))
        .unit("usd", "US dollars", Scale::linear(1.0 / CAD_TO_USD), RoundingPolicy::Trimmed(2))
        .unit("btc", "bitcoin", Scale::linear(1.0 / CAD_TO_BTC), RoundingPolicy::Fixed(8))
        .unit(
            "sats",
            "satoshis",
            Scale::linear(1.0 / (CAD_TO_BTC * SATS_PER_BTC)),
            RoundingPolicy::Integer,
        )
        .build()
}
