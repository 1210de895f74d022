use crate::error::MathError;
use crate::math::math_helpers::{mul_div, mul_div_rounding_up, narrow, widen};
use crate::math::sqrt_price_math::{amount_in_to_cross, get_amount_0_delta, get_amount_1_delta};
use crate::{Q96, U512};
use alloy_primitives::U256;

/// Result of swapping inside a single liquidity interval.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SwapStep {
    /// Price after the step: the target when it was reached, otherwise the
    /// price the remaining input could actually buy.
    pub sqrt_price_next_x96: U256,
    pub amount_in: U256,
    pub amount_out: U256,
    pub reached_target: bool,
}

impl SwapStep {
    #[inline]
    fn no_op(sqrt_price_current_x96: U256) -> Self {
        Self {
            sqrt_price_next_x96: sqrt_price_current_x96,
            amount_in: U256::ZERO,
            amount_out: U256::ZERO,
            reached_target: false,
        }
    }
}

/// Computes an exact-input swap from `sqrt_price_current_x96` toward
/// `sqrt_price_target_x96` with constant `liquidity`.
///
/// The target is reached iff the input needed to get there is
/// `<= amount_remaining` (equality counts as reaching). Otherwise the
/// whole `amount_remaining` is consumed, the achieved price is solved in
/// closed form, and the output is recomputed from that price.
///
/// A target on the wrong side of the current price, or zero liquidity,
/// yields a no-op step.
pub fn compute_swap_step(
    sqrt_price_current_x96: U256,
    sqrt_price_target_x96: U256,
    liquidity: u128,
    amount_remaining: U256,
    zero_for_one: bool,
) -> Result<SwapStep, MathError> {
    if liquidity == 0 {
        return Ok(SwapStep::no_op(sqrt_price_current_x96));
    }

    if zero_for_one {
        if sqrt_price_current_x96 <= sqrt_price_target_x96 {
            return Ok(SwapStep::no_op(sqrt_price_current_x96));
        }

        let amount_in = amount_in_to_cross(
            sqrt_price_current_x96,
            sqrt_price_target_x96,
            liquidity,
            true,
        )?;
        if amount_in <= amount_remaining {
            return Ok(SwapStep {
                sqrt_price_next_x96: sqrt_price_target_x96,
                amount_in,
                amount_out: get_amount_1_delta(
                    sqrt_price_target_x96,
                    sqrt_price_current_x96,
                    liquidity,
                )?,
                reached_target: true,
            });
        }

        // L·(√Pc − √Pn)·2^96 = a·√Pc·√Pn  =>  √Pn = L·√Pc·2^96 / (L·2^96 + a·√Pc),
        // rounded up so the price never moves further than the input pays for
        let liquidity_x96 = U512::from(liquidity) * widen(Q96);
        let denominator = liquidity_x96 + widen(amount_remaining) * widen(sqrt_price_current_x96);
        let sqrt_price_new_x96 = narrow(mul_div_rounding_up(
            liquidity_x96,
            widen(sqrt_price_current_x96),
            denominator,
        )?)?
        .max(sqrt_price_target_x96);

        Ok(SwapStep {
            sqrt_price_next_x96: sqrt_price_new_x96,
            amount_in: amount_remaining,
            amount_out: get_amount_1_delta(sqrt_price_new_x96, sqrt_price_current_x96, liquidity)?,
            reached_target: false,
        })
    } else {
        if sqrt_price_target_x96 <= sqrt_price_current_x96 {
            return Ok(SwapStep::no_op(sqrt_price_current_x96));
        }

        let amount_in = amount_in_to_cross(
            sqrt_price_current_x96,
            sqrt_price_target_x96,
            liquidity,
            false,
        )?;
        if amount_in <= amount_remaining {
            return Ok(SwapStep {
                sqrt_price_next_x96: sqrt_price_target_x96,
                amount_in,
                amount_out: get_amount_0_delta(
                    sqrt_price_current_x96,
                    sqrt_price_target_x96,
                    liquidity,
                )?,
                reached_target: true,
            });
        }

        // a = L·(√Pn − √Pc) / 2^96  =>  √Pn = √Pc + a·2^96 / L
        let price_delta = narrow(mul_div(
            widen(amount_remaining),
            widen(Q96),
            U512::from(liquidity),
        )?)?
        .min(sqrt_price_target_x96 - sqrt_price_current_x96);
        let sqrt_price_new_x96 = sqrt_price_current_x96 + price_delta;

        Ok(SwapStep {
            sqrt_price_next_x96: sqrt_price_new_x96,
            amount_in: amount_remaining,
            amount_out: get_amount_0_delta(sqrt_price_current_x96, sqrt_price_new_x96, liquidity)?,
            reached_target: false,
        })
    }
}
