use crate::error::SwapError;
use crate::U256_E6;
use alloy_primitives::U256;

/// Fee denominator: fees are quoted in parts per million ("pips").
pub const FEE_DENOMINATOR: u32 = 1_000_000;

/// Tick spacing for the standard fee tiers (0.01%, 0.05%, 0.3%, 1%).
/// Any other fee falls back to a spacing of one tick.
pub const fn tick_spacing_for_fee(fee_pips: u32) -> i32 {
    match fee_pips {
        100 => 1,
        500 => 10,
        3000 => 60,
        10000 => 200,
        _ => 1,
    }
}

/// Deducts the pool fee from an exact input,
/// `floor(amount_in · (10^6 − fee) / 10^6)`.
///
/// Fails with `InvalidInput` for a fee of 100% or more and with
/// `FeeExhaustion` when nothing is left to swap.
pub fn amount_after_fee(amount_in: U256, fee_pips: u32) -> Result<U256, SwapError> {
    if fee_pips >= FEE_DENOMINATOR {
        return Err(SwapError::InvalidInput(format!(
            "fee of {fee_pips} pips is not below {FEE_DENOMINATOR}"
        )));
    }

    let multiplier = U256::from(FEE_DENOMINATOR - fee_pips);
    let after_fee = amount_in
        .checked_mul(multiplier)
        .map(|scaled| scaled / U256_E6)
        // only inputs near U256::MAX overflow; divide first for those
        .unwrap_or_else(|| amount_in / U256_E6 * multiplier);

    if after_fee.is_zero() {
        return Err(SwapError::FeeExhaustion {
            amount_in,
            fee_pips,
        });
    }
    Ok(after_fee)
}
