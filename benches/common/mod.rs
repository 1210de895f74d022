#![allow(dead_code)]

use clmm_swap_quote::math::fee_math::amount_after_fee;
use clmm_swap_quote::math::sqrt_price_math::{
    amount_in_to_cross, get_amount_0_delta, get_amount_1_delta,
};
use clmm_swap_quote::math::swap_math::compute_swap_step;
use clmm_swap_quote::math::tick_math::{sqrt_price_at_tick, tick_at_sqrt_price};
use clmm_swap_quote::pool::{PoolState, Slot0, TickInfo, TickTable};
use clmm_swap_quote::{Address, SwapLoop, U256};
use criterion::{black_box, BenchmarkId, Criterion};

pub const LIQUIDITY: u128 = 1_000_000_000_000_000_000_000;

pub fn pool_address() -> Address {
    Address::repeat_byte(0x10)
}

/// Pool at tick 0 with `count` positions stacked every `spacing` ticks on
/// both sides of the price.
pub fn ladder_pool(count: i32, spacing: i32) -> (PoolState, TickTable) {
    let mut pool = PoolState::new(
        pool_address(),
        Address::repeat_byte(0x01),
        Address::repeat_byte(0x02),
        3000,
    );
    pool.liquidity = LIQUIDITY;
    pool.slot0 = Slot0 {
        sqrt_price_x96: sqrt_price_at_tick(0).unwrap(),
        tick: 0,
    };

    let mut ticks = TickTable::default();
    for i in 1..=count {
        let net = (LIQUIDITY / 100) as i128;
        ticks.insert(pool_address(), TickInfo::new(-i * spacing, net as u128, net));
        ticks.insert(pool_address(), TickInfo::new(i * spacing, net as u128, -net));
    }
    (pool, ticks)
}

pub fn bench_tick_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_math");
    for tick in [-887_272, -60_000, 0, 60_000, 887_272] {
        group.bench_with_input(BenchmarkId::new("sqrt_price_at_tick", tick), &tick, |b, &t| {
            b.iter(|| sqrt_price_at_tick(black_box(t)).unwrap())
        });
    }
    let sqrt_price = sqrt_price_at_tick(12_345).unwrap();
    group.bench_function("tick_at_sqrt_price", |b| {
        b.iter(|| tick_at_sqrt_price(black_box(sqrt_price)).unwrap())
    });
    group.finish();
}

pub fn bench_sqrt_price_math(c: &mut Criterion) {
    let lower = sqrt_price_at_tick(-600).unwrap();
    let upper = sqrt_price_at_tick(600).unwrap();

    let mut group = c.benchmark_group("sqrt_price_math");
    group.bench_function("get_amount_0_delta", |b| {
        b.iter(|| get_amount_0_delta(black_box(lower), black_box(upper), LIQUIDITY).unwrap())
    });
    group.bench_function("get_amount_1_delta", |b| {
        b.iter(|| get_amount_1_delta(black_box(lower), black_box(upper), LIQUIDITY).unwrap())
    });
    group.bench_function("amount_in_to_cross", |b| {
        b.iter(|| amount_in_to_cross(black_box(upper), black_box(lower), LIQUIDITY, true).unwrap())
    });
    group.finish();
}

pub fn bench_swap_math(c: &mut Criterion) {
    let current = sqrt_price_at_tick(0).unwrap();
    let target = sqrt_price_at_tick(-60).unwrap();
    let small = U256::from(1_000_000u64);
    let large = U256::MAX;

    let mut group = c.benchmark_group("swap_math");
    group.bench_function("compute_swap_step/partial", |b| {
        b.iter(|| compute_swap_step(black_box(current), target, LIQUIDITY, small, true).unwrap())
    });
    group.bench_function("compute_swap_step/reached", |b| {
        b.iter(|| compute_swap_step(black_box(current), target, LIQUIDITY, large, true).unwrap())
    });
    group.bench_function("amount_after_fee", |b| {
        b.iter(|| amount_after_fee(black_box(small), 3000).unwrap())
    });
    group.finish();
}

pub fn bench_swap_loop(c: &mut Criterion) {
    let (pool, ticks) = ladder_pool(200, 60);
    let swap_loop = SwapLoop::default();

    let mut group = c.benchmark_group("swap_loop");
    for exponent in [18u8, 21, 23] {
        let amount = U256::from(10u8).pow(U256::from(exponent));
        group.bench_with_input(BenchmarkId::new("zero_for_one", exponent), &amount, |b, &a| {
            b.iter(|| swap_loop.run(&pool, &ticks, true, black_box(a)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("one_for_zero", exponent), &amount, |b, &a| {
            b.iter(|| swap_loop.run(&pool, &ticks, false, black_box(a)).unwrap())
        });
    }
    group.finish();
}
