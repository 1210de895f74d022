//! Exact-input swap quoting for Uniswap V3 style concentrated-liquidity pools.
//!
//! This crate exposes:
//! - Fixed-point math (`math::*`): tick ↔ sqrt-price conversion, amount
//!   deltas, the crossing threshold and the single-interval swap step.
//! - The tick traversal loop (`pool::swap::SwapLoop`) and quote assembly
//!   (`pool::quote`), driven by pluggable pool/tick providers.
//! - A small service layer (`quoter::Quoter`) that resolves pools, parses
//!   requests and renders decimal-string responses.
//!
//! Nothing here mutates pool state: every quote works on an immutable
//! snapshot supplied by the caller.
//!
//! # Examples
//!
//! ## Pure math
//! ```no_run
//! use clmm_swap_quote::{math::tick_math, Q96, RESOLUTION};
//!
//! let sqrt_price = tick_math::sqrt_price_at_tick(0).unwrap();
//! assert_eq!(sqrt_price, Q96);
//! assert_eq!(RESOLUTION, 96);
//! ```
//!
//! ## Quoting against an in-memory pool
//! ```no_run
//! use clmm_swap_quote::{
//!     math::tick_math::sqrt_price_at_tick,
//!     pool::{simulate_swap, PoolState, Slot0, TickInfo, TickTable},
//!     Address, U256,
//! };
//!
//! let pool_address = Address::repeat_byte(0x10);
//! let token0 = Address::repeat_byte(0x01);
//! let token1 = Address::repeat_byte(0x02);
//!
//! let mut pool = PoolState::new(pool_address, token0, token1, 3000);
//! pool.slot0 = Slot0 { sqrt_price_x96: sqrt_price_at_tick(0).unwrap(), tick: 0 };
//! pool.liquidity = 1_000_000_000_000_000_000u128;
//!
//! let mut ticks = TickTable::default();
//! ticks.insert(pool_address, TickInfo::new(-600, 1_000_000_000_000_000_000, 1_000_000_000_000_000_000));
//!
//! let quote = simulate_swap(&pool, &ticks, true, U256::from(1_000_000_000u64)).unwrap();
//! println!("amount out: {}, impact: {}%", quote.amount_out, quote.price_impact_percent);
//! ```

pub use alloy_primitives::{Address, U256};

pub mod config;
pub mod error;
mod hash;
pub mod math;
pub mod pool;
pub mod quoter;
pub mod serde_helpers;
pub mod snapshot;

pub use hash::FastMap;
pub use pool::quote::{simulate_swap, QuoteResult, SwapSimulator};
pub use pool::swap::{SwapLoop, SwapStatus};
pub use quoter::Quoter;

/// 512-bit intermediate used where `a * b * c` products outgrow `U256`.
pub type U512 = alloy_primitives::Uint<512, 8>;

const U256_E6: U256 = U256::from_limbs([1000000, 0, 0, 0]);

pub const RESOLUTION: u8 = 96;
pub const Q96: U256 = U256::from_limbs([0, 4294967296, 0, 0]);
