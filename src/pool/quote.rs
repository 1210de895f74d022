use crate::config::QuoterConfig;
use crate::error::{Error, SwapError};
use crate::math::fee_math::amount_after_fee;
use crate::math::tick_math::{price_change_percent, price_from_sqrt_price, price_x192};
use crate::pool::provider::TickDataProvider;
use crate::pool::state::PoolState;
use crate::pool::swap::{SwapLoop, SwapOutcome, SwapStatus};
use crate::U512;
use alloy_primitives::U256;

/// Caller-facing result of an exact-input quote.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteResult {
    pub amount_out: U256,
    /// Gross input as requested.
    pub amount_in: U256,
    pub amount_in_after_fee: U256,
    /// Fee-adjusted input the pool could not absorb.
    pub amount_remaining: U256,
    pub new_sqrt_price_x96: U256,
    pub new_tick: i32,
    /// `floor(price)` before the swap, token1 per token0.
    pub initial_price: U512,
    pub final_price: U512,
    /// Signed relative price change in percent.
    pub price_impact_percent: f64,
    pub crossed_ticks: u32,
    pub iterations: u32,
    pub status: SwapStatus,
}

impl QuoteResult {
    #[inline]
    pub fn is_fully_filled(&self) -> bool {
        self.amount_remaining.is_zero()
    }

    /// Turns a partially filled quote into an error.
    pub fn ensure_filled(self) -> Result<Self, SwapError> {
        if self.is_fully_filled() {
            return Ok(self);
        }
        match self.status {
            SwapStatus::IterationLimitReached => Err(SwapError::IterationLimitReached {
                max_iterations: self.iterations,
                amount_remaining: self.amount_remaining,
            }),
            _ => Err(SwapError::InsufficientLiquidity {
                amount_remaining: self.amount_remaining,
            }),
        }
    }
}

/// Formats the terminal state of a swap loop run against `pool`.
pub fn assemble_quote(
    pool: &PoolState,
    amount_in: U256,
    amount_in_after_fee: U256,
    outcome: &SwapOutcome,
) -> Result<QuoteResult, SwapError> {
    let initial_x192 = price_x192(pool.slot0.sqrt_price_x96);
    let final_x192 = price_x192(outcome.state.sqrt_price_x96);
    let price_impact_percent =
        price_change_percent(initial_x192, final_x192).ok_or(SwapError::ZeroInitialPrice)?;

    Ok(QuoteResult {
        amount_out: outcome.state.amount_calculated,
        amount_in,
        amount_in_after_fee,
        amount_remaining: outcome.state.amount_remaining,
        new_sqrt_price_x96: outcome.state.sqrt_price_x96,
        new_tick: outcome.state.tick,
        initial_price: price_from_sqrt_price(pool.slot0.sqrt_price_x96),
        final_price: price_from_sqrt_price(outcome.state.sqrt_price_x96),
        price_impact_percent,
        crossed_ticks: outcome.state.crossed_ticks,
        iterations: outcome.iterations,
        status: outcome.status,
    })
}

/// Quotes with a configured [`SwapLoop`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SwapSimulator {
    swap_loop: SwapLoop,
}

impl SwapSimulator {
    pub fn new(swap_loop: SwapLoop) -> Self {
        Self { swap_loop }
    }

    pub fn from_config(config: &QuoterConfig) -> Self {
        Self::new(SwapLoop::new(config.max_iterations))
    }

    #[inline]
    pub fn swap_loop(&self) -> &SwapLoop {
        &self.swap_loop
    }

    /// Validates the request, deducts the pool fee, runs the swap loop and
    /// assembles the quote. Never mutates `pool`.
    pub fn simulate<T: TickDataProvider + ?Sized>(
        &self,
        pool: &PoolState,
        ticks: &T,
        zero_for_one: bool,
        amount_in: U256,
    ) -> Result<QuoteResult, Error> {
        if amount_in.is_zero() {
            return Err(SwapError::InvalidInput("amountIn must be positive".to_string()).into());
        }
        if !pool.is_initialized() {
            return Err(SwapError::Uninitialized.into());
        }

        let amount_in_after_fee = amount_after_fee(amount_in, pool.fee_pips)?;
        let outcome = self
            .swap_loop
            .run(pool, ticks, zero_for_one, amount_in_after_fee)?;

        Ok(assemble_quote(pool, amount_in, amount_in_after_fee, &outcome)?)
    }
}

/// [`SwapSimulator::simulate`] with the default iteration cap.
pub fn simulate_swap<T: TickDataProvider + ?Sized>(
    pool: &PoolState,
    ticks: &T,
    zero_for_one: bool,
    amount_in: U256,
) -> Result<QuoteResult, Error> {
    SwapSimulator::default().simulate(pool, ticks, zero_for_one, amount_in)
}
