use crate::error::MathError;
use crate::math::math_helpers::{mul_div, mul_mul_div, narrow, widen};
use crate::{Q96, U512};
use alloy_primitives::U256;

/// Token0 amount between two sqrt prices for a given liquidity,
/// `floor(L · (√Pb − √Pa) · 2^96 / (√Pa · √Pb))`.
///
/// The prices may be passed in either order. A zero lower price is a
/// `DivisionByZero`.
pub fn get_amount_0_delta(
    mut sqrt_ratio_a_x96: U256,
    mut sqrt_ratio_b_x96: U256,
    liquidity: u128,
) -> Result<U256, MathError> {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    };
    if liquidity == 0 || sqrt_ratio_a_x96 == sqrt_ratio_b_x96 {
        return Ok(U256::ZERO);
    }

    let denominator = widen(sqrt_ratio_a_x96) * widen(sqrt_ratio_b_x96);
    narrow(mul_mul_div(
        U512::from(liquidity),
        widen(sqrt_ratio_b_x96 - sqrt_ratio_a_x96),
        widen(Q96),
        denominator,
    )?)
}

/// Token1 amount between two sqrt prices for a given liquidity,
/// `floor(L · (√Pb − √Pa) / 2^96)`.
pub fn get_amount_1_delta(
    mut sqrt_ratio_a_x96: U256,
    mut sqrt_ratio_b_x96: U256,
    liquidity: u128,
) -> Result<U256, MathError> {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    };

    narrow(mul_div(
        U512::from(liquidity),
        widen(sqrt_ratio_b_x96 - sqrt_ratio_a_x96),
        widen(Q96),
    )?)
}

/// Minimum input needed to push the price from `sqrt_price_current_x96` all
/// the way to `sqrt_price_target_x96`.
///
/// For `zero_for_one` the input is token0 and the target must sit below the
/// current price; otherwise the input is token1 and the target must sit
/// above. A target on the wrong side, or zero liquidity, needs nothing and
/// returns zero.
///
/// Grows with liquidity and with the distance between the two prices.
pub fn amount_in_to_cross(
    sqrt_price_current_x96: U256,
    sqrt_price_target_x96: U256,
    liquidity: u128,
    zero_for_one: bool,
) -> Result<U256, MathError> {
    if liquidity == 0 {
        return Ok(U256::ZERO);
    }

    if zero_for_one {
        if sqrt_price_current_x96 <= sqrt_price_target_x96 {
            return Ok(U256::ZERO);
        }
        get_amount_0_delta(sqrt_price_target_x96, sqrt_price_current_x96, liquidity)
    } else {
        if sqrt_price_target_x96 <= sqrt_price_current_x96 {
            return Ok(U256::ZERO);
        }
        get_amount_1_delta(sqrt_price_current_x96, sqrt_price_target_x96, liquidity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::tick_math::sqrt_price_at_tick;
    use std::str::FromStr;

    const PRICE_1: &str = "79228162514264337593543950336";
    const PRICE_1_21: &str = "87150978765690771352898345369";

    #[test]
    fn test_get_amount_0_delta() {
        // returns 0 if liquidity is 0
        let amount_0 = get_amount_0_delta(
            U256::from_str(PRICE_1).unwrap(),
            U256::from_str(PRICE_1_21).unwrap(),
            0,
        );
        assert_eq!(amount_0.unwrap(), U256::ZERO);

        // returns 0 if prices are equal
        let amount_0 = get_amount_0_delta(
            U256::from_str(PRICE_1).unwrap(),
            U256::from_str(PRICE_1).unwrap(),
            1e18 as u128,
        );
        assert_eq!(amount_0.unwrap(), U256::ZERO);

        // returns 0.1 amount0 for price of 1 to 1.21, rounded down
        let amount_0 = get_amount_0_delta(
            U256::from_str(PRICE_1).unwrap(),
            U256::from_str(PRICE_1_21).unwrap(),
            1e18 as u128,
        )
        .unwrap();
        assert_eq!(amount_0, U256::from_str("90909090909090909").unwrap());

        // argument order does not matter
        let swapped = get_amount_0_delta(
            U256::from_str(PRICE_1_21).unwrap(),
            U256::from_str(PRICE_1).unwrap(),
            1e18 as u128,
        )
        .unwrap();
        assert_eq!(swapped, amount_0);
    }

    #[test]
    fn get_amount_0_delta_works_for_prices_that_overflow_u256_products() {
        let amount_0 = get_amount_0_delta(
            U256::from_str("2787593149816327892691964784081045188247552").unwrap(),
            U256::from_str("22300745198530623141535718272648361505980416").unwrap(),
            1e18 as u128,
        )
        .unwrap();
        assert!(amount_0 > U256::ZERO);
    }

    #[test]
    fn get_amount_0_delta_zero_price_is_division_by_zero() {
        let result = get_amount_0_delta(U256::ZERO, U256::from_str(PRICE_1).unwrap(), 1);
        assert_eq!(result, Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_get_amount_1_delta() {
        let amount_1 = get_amount_1_delta(
            U256::from_str(PRICE_1).unwrap(),
            U256::from_str(PRICE_1_21).unwrap(),
            0,
        );
        assert_eq!(amount_1.unwrap(), U256::ZERO);

        // returns 0.1 amount1 for price of 1 to 1.21, rounded down
        let amount_1 = get_amount_1_delta(
            U256::from_str(PRICE_1).unwrap(),
            U256::from_str(PRICE_1_21).unwrap(),
            1e18 as u128,
        )
        .unwrap();
        assert_eq!(amount_1, U256::from_str("99999999999999999").unwrap());
    }

    #[test]
    fn amount_in_to_cross_is_zero_for_wrong_direction_or_no_liquidity() {
        let low = sqrt_price_at_tick(-60).unwrap();
        let high = sqrt_price_at_tick(60).unwrap();

        assert_eq!(amount_in_to_cross(high, low, 0, true).unwrap(), U256::ZERO);
        assert_eq!(amount_in_to_cross(low, high, 1_000, true).unwrap(), U256::ZERO);
        assert_eq!(amount_in_to_cross(high, low, 1_000, false).unwrap(), U256::ZERO);
        assert_eq!(amount_in_to_cross(low, low, 1_000, false).unwrap(), U256::ZERO);
    }

    #[test]
    fn amount_in_to_cross_is_monotonic_in_liquidity() {
        let current = sqrt_price_at_tick(0).unwrap();
        let below = sqrt_price_at_tick(-600).unwrap();
        let above = sqrt_price_at_tick(600).unwrap();

        let mut previous_down = U256::ZERO;
        let mut previous_up = U256::ZERO;
        for liquidity in [1u128, 1_000, 1_000_000, 10u128.pow(18), 10u128.pow(30)] {
            let down = amount_in_to_cross(current, below, liquidity, true).unwrap();
            let up = amount_in_to_cross(current, above, liquidity, false).unwrap();
            assert!(down >= previous_down);
            assert!(up >= previous_up);
            previous_down = down;
            previous_up = up;
        }
        assert!(previous_down > U256::ZERO);
        assert!(previous_up > U256::ZERO);
    }

    #[test]
    fn amount_in_to_cross_is_monotonic_in_price_gap() {
        let liquidity = 5 * 10u128.pow(22);
        let current = sqrt_price_at_tick(91713).unwrap();

        let mut previous_down = U256::ZERO;
        let mut previous_up = U256::ZERO;
        for gap in [1, 10, 60, 200, 5_000] {
            let down = amount_in_to_cross(
                current,
                sqrt_price_at_tick(91713 - gap).unwrap(),
                liquidity,
                true,
            )
            .unwrap();
            let up = amount_in_to_cross(
                current,
                sqrt_price_at_tick(91713 + gap).unwrap(),
                liquidity,
                false,
            )
            .unwrap();
            assert!(down > previous_down);
            assert!(up > previous_up);
            previous_down = down;
            previous_up = up;
        }
    }

    #[test]
    fn amount_in_to_cross_matches_hand_computed_multiples_of_q96() {
        // √P 1 -> 2 with L = 12 costs 12 token1; 2 -> 1 costs 6 token0.
        let one = Q96;
        let two = Q96 * U256::from(2u8);
        assert_eq!(amount_in_to_cross(one, two, 12, false).unwrap(), U256::from(12u8));
        assert_eq!(amount_in_to_cross(two, one, 12, true).unwrap(), U256::from(6u8));
    }
}
