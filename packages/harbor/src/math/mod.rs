pub mod casting;
pub mod safe_math;

use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{ log, Env };

use crate::{
    constants::{ BPS_DENOMINATOR, SECONDS_PER_YEAR },
    error::{ ErrorCode, HarborResult },
};

use casting::Cast;
use safe_math::SafeMath;

/// `value * numerator / denominator`, rounded down.
pub fn mul_div_floor(env: &Env, value: i128, numerator: i128, denominator: i128) -> HarborResult<i128> {
    value.fixed_mul_floor(numerator, denominator).ok_or_else(|| {
        log!(env, "mul_div_floor overflow: {} * {} / {}", value, numerator, denominator);
        ErrorCode::MathError
    })
}

/// Portion of `value` expressed in basis points, rounded down.
pub fn apply_bps(env: &Env, value: i128, bps: u32) -> HarborResult<i128> {
    mul_div_floor(env, value, bps as i128, BPS_DENOMINATOR)
}

/// Simple (non-compounding) yield of `principal` at an annual `rate_bps` over `elapsed` seconds.
///
/// `principal * rate_bps * elapsed / (10_000 * SECONDS_PER_YEAR)`
pub fn accrue_simple(env: &Env, principal: i128, rate_bps: u32, elapsed: u64) -> HarborResult<i128> {
    if principal <= 0 || rate_bps == 0 || elapsed == 0 {
        return Ok(0);
    }

    let rate_time = rate_bps.cast::<i128>(env)?.safe_mul(elapsed.cast::<i128>(env)?, env)?;
    let denominator = BPS_DENOMINATOR.safe_mul(SECONDS_PER_YEAR.cast::<i128>(env)?, env)?;

    mul_div_floor(env, principal, rate_time, denominator)
}
