/// Applies a tick's `liquidity_net` to the active liquidity when the price
/// crosses that tick.
///
/// `liquidity_net` is defined for crossings in the increasing-price
/// direction, so it is added when `zero_for_one` is false and subtracted
/// otherwise. The result saturates at `0` and `u128::MAX` instead of
/// failing: an inconsistent snapshot must not abort a quote.
pub fn cross_tick_liquidity(liquidity: u128, liquidity_net: i128, zero_for_one: bool) -> u128 {
    let magnitude = liquidity_net.unsigned_abs();
    let adds = (liquidity_net >= 0) != zero_for_one;

    if adds {
        liquidity.saturating_add(magnitude)
    } else {
        liquidity.saturating_sub(magnitude)
    }
}
