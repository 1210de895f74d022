use crate::error::StateError;
use crate::math::math_helpers::{f64_to_u256, u256_to_f64, u512_to_f64, widen};
use crate::{Q96, RESOLUTION, U512};
use alloy_primitives::U256;

pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = -MIN_TICK;

/// Price ratio between two adjacent ticks.
pub const TICK_BASE: f64 = 1.0001;

/// Returns the Q64.96 sqrt price at `tick`, i.e. `trunc(1.0001^(tick/2) · 2^96)`,
/// or `StateError::TickOutOfBounds` outside `[MIN_TICK, MAX_TICK]`.
///
/// The exponentiation runs in `f64`; the scaling by `2^96` is exact, so the
/// only rounding is the one `powf` performs. The result is strictly
/// increasing in `tick`.
pub fn sqrt_price_at_tick(tick: i32) -> Result<U256, StateError> {
    if tick.unsigned_abs() > MAX_TICK as u32 {
        return Err(StateError::TickOutOfBounds);
    }

    let sqrt_price = TICK_BASE.powf(f64::from(tick) / 2.0);
    let scaled = sqrt_price * 2f64.powi(RESOLUTION as i32);

    // Bounded by 2^160 for in-range ticks, so the conversion cannot fail.
    f64_to_u256(scaled).map_err(|_| StateError::TickOutOfBounds)
}

/// Returns `floor(ln(price) / ln(1.0001))` for `price = (sqrt_price / 2^96)^2`,
/// clamped to `[MIN_TICK, MAX_TICK]`.
///
/// This is only an approximate inverse of [`sqrt_price_at_tick`]: log/exp
/// roundoff can land one tick off on exact boundaries.
pub fn tick_at_sqrt_price(sqrt_price_x96: U256) -> Result<i32, StateError> {
    if sqrt_price_x96.is_zero() {
        return Err(StateError::SqrtPriceIsZero);
    }

    let sqrt_price = u256_to_f64(sqrt_price_x96) / u256_to_f64(Q96);
    let price = sqrt_price * sqrt_price;
    let tick = (price.ln() / TICK_BASE.ln()).floor();

    Ok(tick.clamp(f64::from(MIN_TICK), f64::from(MAX_TICK)) as i32)
}

/// Exact price scaled by `2^192` (`sqrt_price²`).
#[inline]
pub fn price_x192(sqrt_price_x96: U256) -> U512 {
    let sqrt_price = widen(sqrt_price_x96);
    sqrt_price * sqrt_price
}

/// Integer part of the token1/token0 price, `floor((sqrt_price / 2^96)^2)`.
pub fn price_from_sqrt_price(sqrt_price_x96: U256) -> U512 {
    price_x192(sqrt_price_x96) >> (2 * RESOLUTION as usize)
}

/// Relative change between two Q192 prices, in percent.
///
/// Returns `None` when `initial` is zero.
pub fn price_change_percent(initial_x192: U512, final_x192: U512) -> Option<f64> {
    if initial_x192.is_zero() {
        return None;
    }
    let (diff, negative) = if final_x192 >= initial_x192 {
        (final_x192 - initial_x192, false)
    } else {
        (initial_x192 - final_x192, true)
    };
    let percent = u512_to_f64(diff) / u512_to_f64(initial_x192) * 100.0;
    Some(if negative { -percent } else { percent })
}
