use crate::config::QuoterConfig;
use crate::error::{Error, SwapError};
use crate::pool::provider::{PoolStateProvider, TickDataProvider};
use crate::pool::quote::{QuoteResult, SwapSimulator};
use crate::pool::state::PoolState;
use crate::serde_helpers::{u256_decimal, u512_decimal};
use crate::U512;
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Exact-input quote request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub token_in: Address,
    pub token_out: Address,
    #[serde(with = "u256_decimal")]
    pub amount_in: U256,
    /// Quote against this pool instead of the deepest one for the pair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_address: Option<Address>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    #[serde(with = "u256_decimal")]
    pub amount_out: U256,
    #[serde(with = "u256_decimal")]
    pub amount_in: U256,
    pub pool_address: Address,
    pub price_impact: f64,
    #[serde(rename = "newSqrtPriceX96", with = "u256_decimal")]
    pub new_sqrt_price_x96: U256,
    pub new_tick: i32,
    #[serde(with = "u512_decimal")]
    pub initial_price: U512,
    #[serde(with = "u512_decimal")]
    pub final_price: U512,
    pub crossed_ticks: u32,
    #[serde(with = "u256_decimal")]
    pub amount_remaining: U256,
    pub status: String,
    /// The whole input was filled.
    pub success: bool,
    pub simulated: bool,
}

impl QuoteResponse {
    pub fn new(pool_address: Address, quote: &QuoteResult) -> Self {
        Self {
            amount_out: quote.amount_out,
            amount_in: quote.amount_in,
            pool_address,
            price_impact: quote.price_impact_percent,
            new_sqrt_price_x96: quote.new_sqrt_price_x96,
            new_tick: quote.new_tick,
            initial_price: quote.initial_price,
            final_price: quote.final_price,
            crossed_ticks: quote.crossed_ticks,
            amount_remaining: quote.amount_remaining,
            status: quote.status.to_string(),
            success: quote.is_fully_filled(),
            simulated: true,
        }
    }
}

/// Resolves pools through a [`PoolStateProvider`] and quotes them against a
/// [`TickDataProvider`].
///
/// The quoter holds no mutable state; share it freely when both providers
/// are `Sync`.
#[derive(Clone, Debug)]
pub struct Quoter<P, T> {
    pools: P,
    ticks: T,
    simulator: SwapSimulator,
}

impl<P, T> Quoter<P, T>
where
    P: PoolStateProvider,
    T: TickDataProvider,
{
    pub fn new(pools: P, ticks: T) -> Self {
        Self {
            pools,
            ticks,
            simulator: SwapSimulator::default(),
        }
    }

    pub fn from_config(pools: P, ticks: T, config: &QuoterConfig) -> Self {
        Self {
            pools,
            ticks,
            simulator: SwapSimulator::from_config(config),
        }
    }

    pub fn pools(&self) -> &P {
        &self.pools
    }

    pub fn ticks(&self) -> &T {
        &self.ticks
    }

    /// Resolves the pool for `request` and quotes it.
    ///
    /// Without an explicit `pool_address`, the pool with the most active
    /// liquidity for the pair is used.
    #[instrument(
        skip(self, request),
        fields(token_in = %request.token_in, token_out = %request.token_out, amount_in = %request.amount_in)
    )]
    pub fn quote(&self, request: &QuoteRequest) -> Result<QuoteResponse, Error> {
        if request.token_in == request.token_out {
            return Err(
                SwapError::InvalidInput("tokenIn and tokenOut must differ".to_string()).into(),
            );
        }

        let pool = match request.pool_address {
            Some(address) => self.pools.pool(&address)?,
            None => {
                let pool = self
                    .pools
                    .find_best_pool(request.token_in, request.token_out)?;
                debug!(pool = %pool.address, liquidity = pool.liquidity, "selected best pool");
                pool
            }
        };

        if !pool.trades_pair(request.token_in, request.token_out) {
            return Err(SwapError::InvalidInput(format!(
                "pool {} does not trade {} / {}",
                pool.address, request.token_in, request.token_out
            ))
            .into());
        }

        let quote = self.quote_pool(&pool, request.token_in, request.amount_in)?;
        if !quote.is_fully_filled() {
            warn!(
                pool = %pool.address,
                status = %quote.status,
                amount_remaining = %quote.amount_remaining,
                "quote only partially filled"
            );
        }

        Ok(QuoteResponse::new(pool.address, &quote))
    }

    /// Quotes `amount_in` of `token_in` against `pool`. The direction is
    /// token0 → token1 iff `token_in` is the pool's token0.
    pub fn quote_pool(
        &self,
        pool: &PoolState,
        token_in: Address,
        amount_in: U256,
    ) -> Result<QuoteResult, Error> {
        if token_in != pool.token0 && token_in != pool.token1 {
            return Err(SwapError::InvalidInput(format!(
                "token {token_in} is not traded by pool {}",
                pool.address
            ))
            .into());
        }
        let zero_for_one = token_in == pool.token0;

        debug!(
            pool = %pool.address,
            zero_for_one,
            fee_pips = pool.fee_pips,
            liquidity = pool.liquidity,
            sqrt_price_x96 = %pool.slot0.sqrt_price_x96,
            tick = pool.slot0.tick,
            "quoting pool"
        );

        self.simulator
            .simulate(pool, &self.ticks, zero_for_one, amount_in)
    }
}
