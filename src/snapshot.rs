//! JSON snapshots of pool and tick state.
//!
//! A snapshot is the offline stand-in for whatever store keeps pools and
//! ticks up to date: load one, split it into an [`InMemoryPools`] and a
//! [`TickTable`], and hand both to a [`Quoter`](crate::Quoter).
//!
//! ```json
//! {
//!   "pools": [{
//!     "address": "0x…", "token0": "0x…", "token1": "0x…",
//!     "feePips": 3000, "liquidity": "1000000",
//!     "sqrtPriceX96": "79228162514264337593543950336", "tick": 0
//!   }],
//!   "ticks": [{
//!     "pool": "0x…",
//!     "ticks": [{ "tickIndex": -60, "liquidityGross": "10", "liquidityNet": "10" }]
//!   }]
//! }
//! ```

use crate::error::ConfigError;
use crate::pool::provider::{InMemoryPools, TickTable};
use crate::pool::state::{PoolState, TickInfo};
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    #[serde(default)]
    pub pools: Vec<PoolState>,
    #[serde(default)]
    pub ticks: Vec<PoolTicks>,
}

/// Initialized ticks of one pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolTicks {
    pub pool: Address,
    pub ticks: Vec<TickInfo>,
}

impl PoolSnapshot {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let snapshot: PoolSnapshot =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        snapshot.validate()?;

        Ok(snapshot)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for pool in &self.pools {
            if pool.token0 == pool.token1 {
                return Err(ConfigError::Invalid(format!(
                    "pool {} trades a token against itself",
                    pool.address
                )));
            }
        }
        Ok(())
    }

    /// Splits the snapshot into its providers. Token pairs are re-sorted so
    /// `token0` is always the numerically smaller address.
    pub fn into_providers(self) -> (InMemoryPools, TickTable) {
        let pools = self
            .pools
            .into_iter()
            .map(|pool| {
                let mut sorted =
                    PoolState::new(pool.address, pool.token0, pool.token1, pool.fee_pips);
                sorted.liquidity = pool.liquidity;
                sorted.slot0 = pool.slot0;
                sorted
            })
            .collect();

        let mut ticks = TickTable::default();
        for entry in self.ticks {
            for info in entry.ticks {
                ticks.insert(entry.pool, info);
            }
        }

        (pools, ticks)
    }
}
