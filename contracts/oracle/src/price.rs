use harbor::{ error::HarborResult, math::mul_div_floor, types::{ PriceReading, PriceSource } };
use soroban_sdk::{ log, Env };

use crate::storage::PriceState;

/// Picks the price a reader should see at `now`.
///
/// The primary price wins while it is non-zero and no older than `freshness_threshold`.
/// After that the manual fallback is served, and with neither the reading is unavailable.
pub fn resolve(state: &PriceState, now: u64, freshness_threshold: u64) -> PriceReading {
    let age = now.saturating_sub(state.updated_at);

    if state.price > 0 && age <= freshness_threshold {
        return PriceReading {
            price: state.price,
            updated_at: state.updated_at,
            source: PriceSource::Primary,
        };
    }

    if state.fallback_price > 0 {
        return PriceReading {
            price: state.fallback_price,
            updated_at: state.updated_at,
            source: PriceSource::Fallback,
        };
    }

    PriceReading::unavailable()
}

/// Values `amount` of the `from` asset in units of the `to` asset.
///
/// Both prices share the same quote and precision, so the precision cancels out.
/// An unusable price on either side yields 0.
pub fn convert(
    env: &Env,
    amount: i128,
    from: &PriceReading,
    to: &PriceReading
) -> HarborResult<i128> {
    if amount == 0 {
        return Ok(0);
    }

    if !from.is_usable() || !to.is_usable() {
        log!(env, "Oracle: Convert: price unknown, from {} to {}", from.price, to.price);
        return Ok(0);
    }

    mul_div_floor(env, amount, from.price, to.price)
}
