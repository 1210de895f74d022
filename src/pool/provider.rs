use crate::error::ProviderError;
use crate::pool::state::{PoolState, TickInfo};
use crate::FastMap;
use alloy_primitives::Address;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Outcome of a next-initialized-tick lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NextTick {
    Initialized(i32),
    NoneFound,
}

/// Source of pool snapshots.
pub trait PoolStateProvider {
    /// Loads the current snapshot of `pool`.
    ///
    /// Fails with `PoolNotFound` for unknown pools and with
    /// `PoolUninitialized` when the pool has no price or no liquidity.
    fn pool(&self, pool: &Address) -> Result<PoolState, ProviderError>;

    /// The initialized pool trading `token_in` / `token_out` (in either
    /// order) with the most active liquidity.
    fn find_best_pool(
        &self,
        token_in: Address,
        token_out: Address,
    ) -> Result<PoolState, ProviderError>;
}

/// Source of per-tick liquidity data for a pool.
pub trait TickDataProvider {
    /// Next initialized tick in the swap direction.
    ///
    /// For `zero_for_one` (price decreasing) this is the greatest
    /// initialized tick `<= from_tick`; otherwise the smallest initialized
    /// tick `> from_tick`.
    fn next_initialized_tick(
        &self,
        pool: &Address,
        from_tick: i32,
        zero_for_one: bool,
    ) -> Result<NextTick, ProviderError>;

    /// Liquidity data stored for `tick`, if any.
    fn tick(&self, pool: &Address, tick: i32) -> Result<Option<TickInfo>, ProviderError>;
}

impl<T: TickDataProvider + ?Sized> TickDataProvider for &T {
    fn next_initialized_tick(
        &self,
        pool: &Address,
        from_tick: i32,
        zero_for_one: bool,
    ) -> Result<NextTick, ProviderError> {
        (**self).next_initialized_tick(pool, from_tick, zero_for_one)
    }

    fn tick(&self, pool: &Address, tick: i32) -> Result<Option<TickInfo>, ProviderError> {
        (**self).tick(pool, tick)
    }
}

impl<P: PoolStateProvider + ?Sized> PoolStateProvider for &P {
    fn pool(&self, pool: &Address) -> Result<PoolState, ProviderError> {
        (**self).pool(pool)
    }

    fn find_best_pool(
        &self,
        token_in: Address,
        token_out: Address,
    ) -> Result<PoolState, ProviderError> {
        (**self).find_best_pool(token_in, token_out)
    }
}

/// Pool snapshots held in memory, keyed by pool address.
#[derive(Clone, Debug, Default)]
pub struct InMemoryPools {
    pools: FastMap<Address, PoolState>,
}

impl InMemoryPools {
    pub fn insert(&mut self, pool: PoolState) -> Option<PoolState> {
        self.pools.insert(pool.address, pool)
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

impl FromIterator<PoolState> for InMemoryPools {
    fn from_iter<I: IntoIterator<Item = PoolState>>(iter: I) -> Self {
        let mut pools = Self::default();
        for pool in iter {
            pools.insert(pool);
        }
        pools
    }
}

impl PoolStateProvider for InMemoryPools {
    fn pool(&self, pool: &Address) -> Result<PoolState, ProviderError> {
        let state = self
            .pools
            .get(pool)
            .ok_or(ProviderError::PoolNotFound(*pool))?;

        if !state.is_initialized() {
            return Err(ProviderError::PoolUninitialized(*pool));
        }
        Ok(state.clone())
    }

    fn find_best_pool(
        &self,
        token_in: Address,
        token_out: Address,
    ) -> Result<PoolState, ProviderError> {
        self.pools
            .values()
            .filter(|pool| pool.trades_pair(token_in, token_out) && pool.is_initialized())
            // ties go to the lower address so the choice does not depend on map order
            .max_by(|a, b| {
                a.liquidity
                    .cmp(&b.liquidity)
                    .then_with(|| b.address.cmp(&a.address))
            })
            .cloned()
            .ok_or(ProviderError::NoPoolForPair {
                token_in,
                token_out,
            })
    }
}

/// Initialized ticks held in memory, ordered per pool for range lookups.
#[derive(Clone, Debug, Default)]
pub struct TickTable {
    ticks: FastMap<Address, BTreeMap<i32, TickInfo>>,
}

impl TickTable {
    /// Stores `info` for `pool`. Ticks with zero gross liquidity are kept
    /// (their `liquidity_net` is still readable) but never reported as
    /// initialized.
    pub fn insert(&mut self, pool: Address, info: TickInfo) -> Option<TickInfo> {
        self.ticks
            .entry(pool)
            .or_default()
            .insert(info.tick_index, info)
    }

    pub fn ticks(&self, pool: &Address) -> impl Iterator<Item = &TickInfo> + '_ {
        self.ticks.get(pool).into_iter().flat_map(|ticks| ticks.values())
    }
}

impl TickDataProvider for TickTable {
    fn next_initialized_tick(
        &self,
        pool: &Address,
        from_tick: i32,
        zero_for_one: bool,
    ) -> Result<NextTick, ProviderError> {
        let Some(ticks) = self.ticks.get(pool) else {
            return Ok(NextTick::NoneFound);
        };

        let found = if zero_for_one {
            ticks
                .range(..=from_tick)
                .rev()
                .find(|(_, info)| info.is_initialized())
        } else {
            ticks
                .range((Bound::Excluded(from_tick), Bound::Unbounded))
                .find(|(_, info)| info.is_initialized())
        };

        Ok(found.map_or(NextTick::NoneFound, |(&tick, _)| NextTick::Initialized(tick)))
    }

    fn tick(&self, pool: &Address, tick: i32) -> Result<Option<TickInfo>, ProviderError> {
        Ok(self
            .ticks
            .get(pool)
            .and_then(|ticks| ticks.get(&tick))
            .copied())
    }
}
