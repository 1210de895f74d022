use crate::math::fee_math::tick_spacing_for_fee;
use crate::serde_helpers::{i128_decimal, u128_decimal, u256_decimal};
use alloy_primitives::{Address, U160, U256};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot0 {
    #[serde(with = "u256_decimal")]
    pub sqrt_price_x96: U256,
    pub tick: i32,
}

/// Read-only snapshot of a pool, as handed over by a `PoolStateProvider`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolState {
    pub address: Address,
    pub token0: Address,
    pub token1: Address,
    /// Swap fee in parts per million.
    pub fee_pips: u32,
    /// Active liquidity in the interval containing the current price.
    #[serde(with = "u128_decimal")]
    pub liquidity: u128,
    #[serde(flatten)]
    pub slot0: Slot0,
}

impl PoolState {
    /// Creates an empty snapshot with `(token0, token1)` in canonical order.
    ///
    /// `slot0` and `liquidity` start at zero; a pool left that way is
    /// rejected as uninitialized when quoted.
    pub fn new(address: Address, token0: Address, token1: Address, fee_pips: u32) -> Self {
        let (token0, token1) = sort_tokens(token0, token1);

        Self {
            address,
            token0,
            token1,
            fee_pips,
            liquidity: 0u128,
            slot0: Slot0::default(),
        }
    }

    #[inline]
    pub fn tick_spacing(&self) -> i32 {
        tick_spacing_for_fee(self.fee_pips)
    }

    /// A pool can be quoted only once both its price and its active
    /// liquidity are non-zero.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.liquidity != 0 && !self.slot0.sqrt_price_x96.is_zero()
    }

    /// Whether the pool trades exactly the `token_a` / `token_b` pair, in
    /// either order.
    pub fn trades_pair(&self, token_a: Address, token_b: Address) -> bool {
        (self.token0 == token_a && self.token1 == token_b)
            || (self.token0 == token_b && self.token1 == token_a)
    }
}

/// Per-boundary liquidity data.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickInfo {
    pub tick_index: i32,
    /// Total liquidity referencing this tick; non-zero means initialized.
    #[serde(with = "u128_decimal")]
    pub liquidity_gross: u128,
    /// Liquidity added when the price crosses this tick upward.
    #[serde(with = "i128_decimal")]
    pub liquidity_net: i128,
}

impl TickInfo {
    #[inline]
    pub fn new(tick_index: i32, liquidity_gross: u128, liquidity_net: i128) -> Self {
        Self {
            tick_index,
            liquidity_gross,
            liquidity_net,
        }
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.liquidity_gross != 0
    }
}

/// Converts an `Address` into its `U160` numeric representation.
#[inline(always)]
pub fn address_to_u160(address: Address) -> U160 {
    address.into()
}

/// Returns the token pair sorted by numeric address, as pools store them.
pub fn sort_tokens(token0: Address, token1: Address) -> (Address, Address) {
    if address_to_u160(token0) < address_to_u160(token1) {
        (token0, token1)
    } else {
        (token1, token0)
    }
}
