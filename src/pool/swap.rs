use crate::error::Error;
use crate::math::liquidity_math::cross_tick_liquidity;
use crate::math::sqrt_price_math::amount_in_to_cross;
use crate::math::swap_math::compute_swap_step;
use crate::math::tick_math::{sqrt_price_at_tick, tick_at_sqrt_price, MAX_TICK, MIN_TICK};
use crate::pool::provider::{NextTick, TickDataProvider};
use crate::pool::state::PoolState;
use alloy_primitives::U256;
use tracing::{debug, trace};

pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Why the traversal stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwapStatus {
    /// Only observable from inside `SwapLoop::run`.
    Running,
    /// All input consumed, the last step ended exactly on a boundary.
    Completed,
    /// All input consumed strictly inside an interval.
    StalledWithinInterval,
    /// Input left but no step can make progress: active liquidity is zero
    /// with nothing initialized ahead, or the price range edge was reached.
    LiquidityExhausted,
    /// The iteration cap was hit with input left.
    IterationLimitReached,
}

impl SwapStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapStatus::Running => "running",
            SwapStatus::Completed => "completed",
            SwapStatus::StalledWithinInterval => "stalled_within_interval",
            SwapStatus::LiquidityExhausted => "liquidity_exhausted",
            SwapStatus::IterationLimitReached => "iteration_limit_reached",
        }
    }
}

impl std::fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// the running state of the traversal, returned to the caller once it stops
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SwapState {
    // input still to be swapped, after fees
    pub amount_remaining: U256,
    // output accumulated so far
    pub amount_calculated: U256,
    // current sqrt(price)
    pub sqrt_price_x96: U256,
    // the tick associated with the current price
    pub tick: i32,
    // the current liquidity in range
    pub liquidity: u128,
    pub crossed_ticks: u32,
}

#[derive(Default)]
struct StepComputations {
    // the price at the beginning of the step
    sqrt_price_start_x96: U256,
    // the next tick to swap to from the current tick in the swap direction
    tick_next: i32,
    // whether tick_next came from the provider rather than the spacing fallback
    initialized: bool,
    // sqrt(price) for tick_next
    sqrt_price_next_x96: U256,
    // input needed to reach sqrt_price_next_x96
    threshold: U256,
    amount_in: U256,
    amount_out: U256,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SwapOutcome {
    pub state: SwapState,
    pub status: SwapStatus,
    pub iterations: u32,
}

/// Exact-input tick traversal with a hard iteration cap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SwapLoop {
    max_iterations: u32,
}

impl Default for SwapLoop {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS)
    }
}

impl SwapLoop {
    /// A cap of `0` is raised to `1`.
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
        }
    }

    #[inline]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Swaps `amount_remaining` (already net of fees) through `pool`,
    /// crossing initialized ticks reported by `ticks` until the input runs
    /// out, no step can make progress, or the iteration cap is reached.
    ///
    /// Ticks follow the on-chain convention. Crossing boundary `B` upward
    /// leaves `tick == B`, crossing it downward leaves `tick == B - 1`, and
    /// in both cases the price sits exactly on `sqrt_price_at_tick(B)`. A
    /// downward swap starting with `tick == B` on that price therefore
    /// crosses `B` first, and an upward swap from `tick == B - 1` on that
    /// price crosses it back without consuming input.
    pub fn run<T: TickDataProvider + ?Sized>(
        &self,
        pool: &PoolState,
        ticks: &T,
        zero_for_one: bool,
        amount_remaining: U256,
    ) -> Result<SwapOutcome, Error> {
        let tick_spacing = pool.tick_spacing();

        let mut state = SwapState {
            amount_remaining,
            amount_calculated: U256::ZERO,
            sqrt_price_x96: pool.slot0.sqrt_price_x96,
            tick: pool.slot0.tick,
            liquidity: pool.liquidity,
            crossed_ticks: 0,
        };
        let mut status = SwapStatus::Running;
        let mut iterations = 0u32;

        while status == SwapStatus::Running && iterations < self.max_iterations {
            if state.amount_remaining.is_zero() {
                status = SwapStatus::Completed;
                break;
            }
            iterations += 1;

            let mut step = StepComputations {
                sqrt_price_start_x96: state.sqrt_price_x96,
                ..Default::default()
            };

            (step.tick_next, step.initialized) =
                match ticks.next_initialized_tick(&pool.address, state.tick, zero_for_one)? {
                    NextTick::Initialized(tick) => (tick, true),
                    NextTick::NoneFound if zero_for_one => {
                        (state.tick.saturating_sub(tick_spacing), false)
                    }
                    NextTick::NoneFound => (state.tick.saturating_add(tick_spacing), false),
                };
            step.tick_next = step.tick_next.clamp(MIN_TICK, MAX_TICK);
            step.sqrt_price_next_x96 = sqrt_price_at_tick(step.tick_next)?;

            let already_past = if zero_for_one {
                step.sqrt_price_next_x96 >= state.sqrt_price_x96
            } else {
                step.sqrt_price_next_x96 <= state.sqrt_price_x96
            };

            let at_edge = step.tick_next == if zero_for_one { MIN_TICK } else { MAX_TICK };

            let reached_target = if already_past || state.liquidity == 0 {
                // nothing to swap on the way; move only if a real boundary is ahead
                if (already_past && at_edge) || (!already_past && !step.initialized) {
                    status = SwapStatus::LiquidityExhausted;
                    break;
                }
                true
            } else {
                step.threshold = amount_in_to_cross(
                    state.sqrt_price_x96,
                    step.sqrt_price_next_x96,
                    state.liquidity,
                    zero_for_one,
                )?;
                trace!(
                    target: "swap",
                    iteration = iterations,
                    tick = state.tick,
                    tick_next = step.tick_next,
                    liquidity = state.liquidity,
                    threshold = %step.threshold,
                    amount_remaining = %state.amount_remaining,
                    "swap step"
                );

                let swap_step = compute_swap_step(
                    state.sqrt_price_x96,
                    step.sqrt_price_next_x96,
                    state.liquidity,
                    state.amount_remaining,
                    zero_for_one,
                )?;
                step.amount_in = swap_step.amount_in;
                step.amount_out = swap_step.amount_out;

                state.amount_remaining -= step.amount_in;
                state.amount_calculated = state.amount_calculated.saturating_add(step.amount_out);
                state.sqrt_price_x96 = swap_step.sqrt_price_next_x96;

                swap_step.reached_target
            };

            if reached_target {
                state.sqrt_price_x96 = step.sqrt_price_next_x96;
                state.tick = if zero_for_one && step.tick_next > MIN_TICK {
                    step.tick_next - 1
                } else {
                    step.tick_next
                };

                let liquidity_before = state.liquidity;
                if let Some(info) = ticks.tick(&pool.address, step.tick_next)? {
                    state.liquidity =
                        cross_tick_liquidity(state.liquidity, info.liquidity_net, zero_for_one);
                }
                state.crossed_ticks += 1;

                debug!(
                    target: "swap",
                    tick = step.tick_next,
                    liquidity_before,
                    liquidity_after = state.liquidity,
                    amount_in = %step.amount_in,
                    amount_out = %step.amount_out,
                    "crossed tick"
                );
            } else if step.amount_in.is_zero() {
                status = SwapStatus::LiquidityExhausted;
            } else {
                let tick = tick_at_sqrt_price(state.sqrt_price_x96)?;
                state.tick = if zero_for_one {
                    tick.clamp(step.tick_next, state.tick.max(step.tick_next))
                } else {
                    tick.clamp(state.tick.min(step.tick_next - 1), step.tick_next - 1)
                };
                status = SwapStatus::StalledWithinInterval;

                trace!(
                    target: "swap",
                    sqrt_price_start = %step.sqrt_price_start_x96,
                    sqrt_price_end = %state.sqrt_price_x96,
                    tick = state.tick,
                    "stalled within interval"
                );
            }
        }

        if status == SwapStatus::Running {
            status = if state.amount_remaining.is_zero() {
                SwapStatus::Completed
            } else {
                SwapStatus::IterationLimitReached
            };
        }

        debug!(
            target: "swap",
            %status,
            iterations,
            crossed_ticks = state.crossed_ticks,
            amount_out = %state.amount_calculated,
            amount_remaining = %state.amount_remaining,
            tick = state.tick,
            "swap loop finished"
        );

        Ok(SwapOutcome {
            state,
            status,
            iterations,
        })
    }
}
