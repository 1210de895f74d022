use alloy_primitives::{Address, U256};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    #[error("Math error - overflow")]
    Overflow,
    #[error("Math error - division by zero")]
    DivisionByZero,
    #[error("Math error - floating point value is not finite")]
    NotFinite,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// Logarithm of a zero price is undefined.
    #[error("State error - sqrtPrice is 0")]
    SqrtPriceIsZero,

    #[error("State error - tick out of bounds")]
    TickOutOfBounds,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SwapError {
    #[error("Swap error - invalid input: {0}")]
    InvalidInput(String),

    #[error("Swap error - pool is uninitialized (liquidity or price is 0)")]
    Uninitialized,

    #[error("Swap error - fee of {fee_pips} pips leaves nothing of amountIn {amount_in}")]
    FeeExhaustion { amount_in: U256, fee_pips: u32 },

    #[error("Swap error - initial price is 0, price impact is undefined")]
    ZeroInitialPrice,

    #[error("Swap error - iteration limit of {max_iterations} reached with {amount_remaining} unfilled")]
    IterationLimitReached {
        max_iterations: u32,
        amount_remaining: U256,
    },

    #[error("Swap error - insufficient liquidity, {amount_remaining} unfilled")]
    InsufficientLiquidity { amount_remaining: U256 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider error - pool {0} not found")]
    PoolNotFound(Address),

    #[error("Provider error - pool {0} is uninitialized")]
    PoolUninitialized(Address),

    #[error("Provider error - no pool for pair {token_in} / {token_out}")]
    NoPoolForPair { token_in: Address, token_out: Address },

    #[error("Provider error - {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config error - failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error - failed to parse: {0}")]
    Parse(String),

    #[error("Config error - invalid value: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MathError(#[from] crate::error::MathError),

    #[error(transparent)]
    StateError(#[from] crate::error::StateError),

    #[error(transparent)]
    SwapError(#[from] crate::error::SwapError),

    #[error(transparent)]
    ProviderError(#[from] crate::error::ProviderError),

    #[error(transparent)]
    ConfigError(#[from] crate::error::ConfigError),
}
