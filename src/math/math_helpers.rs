use crate::error::MathError;
use crate::U512;
use alloy_primitives::U256;

/// Widens a `U256` into the 512-bit intermediate domain.
#[inline(always)]
pub fn widen(value: U256) -> U512 {
    U512::from_limbs_slice(value.as_limbs())
}

/// Narrows a 512-bit intermediate back to `U256`, failing with
/// `MathError::Overflow` when the high limbs are non-zero.
#[inline(always)]
pub fn narrow(value: U512) -> Result<U256, MathError> {
    U256::checked_from_limbs_slice(value.as_limbs()).ok_or(MathError::Overflow)
}

/// Computes `floor(a * b / denominator)` with a 512-bit product.
///
/// Unlike chaining two `U256` divisions this floors once over the exact
/// rational.
#[inline(always)]
pub fn mul_div(a: U512, b: U512, denominator: U512) -> Result<U512, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let product = a.checked_mul(b).ok_or(MathError::Overflow)?;
    Ok(product / denominator)
}

/// `ceil(a * b / denominator)` with a 512-bit product.
#[inline(always)]
pub fn mul_div_rounding_up(a: U512, b: U512, denominator: U512) -> Result<U512, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let product = a.checked_mul(b).ok_or(MathError::Overflow)?;
    let (quotient, remainder) = product.div_rem(denominator);
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        quotient.checked_add(U512::from(1u8)).ok_or(MathError::Overflow)
    }
}

/// `floor(a * b * c / denominator)`; the three-factor form shows up in
/// every token0 amount (`L · Δ√P · 2^96 / (√Pa · √Pb)`).
#[inline(always)]
pub fn mul_mul_div(a: U512, b: U512, c: U512, denominator: U512) -> Result<U512, MathError> {
    let ab = a.checked_mul(b).ok_or(MathError::Overflow)?;
    mul_div(ab, c, denominator)
}

/// Lossy conversion of a 512-bit integer to `f64`, keeping the top 64
/// significant bits and scaling by the dropped power of two.
pub fn u512_to_f64(value: U512) -> f64 {
    let bits = value.bit_len();
    if bits <= 64 {
        return value.as_limbs()[0] as f64;
    }
    let shift = bits - 64;
    let top = (value >> shift).as_limbs()[0] as f64;
    top * 2f64.powi(shift as i32)
}

#[inline(always)]
pub fn u256_to_f64(value: U256) -> f64 {
    u512_to_f64(widen(value))
}

/// Converts a non-negative finite `f64` into `U256`, truncating the
/// fractional part toward zero.
pub fn f64_to_u256(value: f64) -> Result<U256, MathError> {
    if !value.is_finite() || value < 0.0 {
        return Err(MathError::NotFinite);
    }
    let value = value.trunc();
    if value < 1.0 {
        return Ok(U256::ZERO);
    }

    // f64 = mantissa * 2^exponent with a 53-bit integer mantissa.
    let bits = value.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i32 - 1075;
    let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);

    if exponent >= 0 {
        let exponent = exponent as usize;
        if exponent + 53 > 256 {
            return Err(MathError::Overflow);
        }
        Ok(U256::from(mantissa) << exponent)
    } else {
        Ok(U256::from(mantissa >> (-exponent) as u32))
    }
}
