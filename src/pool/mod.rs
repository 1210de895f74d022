pub mod provider;
pub mod quote;
pub mod state;
pub mod swap;

pub use provider::{InMemoryPools, NextTick, PoolStateProvider, TickDataProvider, TickTable};
pub use quote::{assemble_quote, simulate_swap, QuoteResult, SwapSimulator};
pub use state::{PoolState, Slot0, TickInfo};
pub use swap::{SwapLoop, SwapOutcome, SwapStatus};
