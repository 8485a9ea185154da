use anchor_lang::prelude::*;

use crate::error::ErrorCode;

const LOW_64: u128 = u64::MAX as u128;

/// `(a * b) >> 64` over the full 256-bit product. `None` when the shifted
/// result does not fit in 128 bits.
pub fn mul_shr64(a: u128, b: u128, round_up: bool) -> Option<u128> {
    let (a_hi, a_lo) = (a >> 64, a & LOW_64);
    let (b_hi, b_lo) = (b >> 64, b & LOW_64);

    let lo = a_lo * b_lo;
    let result = (a_hi * b_hi)
        .checked_mul(1_u128 << 64)?
        .checked_add(a_hi * b_lo)?
        .checked_add(a_lo * b_hi)?
        .checked_add(lo >> 64)?;

    if round_up && lo & LOW_64 != 0 {
        result.checked_add(1)
    } else {
        Some(result)
    }
}

/// Price of currency0 in currency1 units, Q64.64.
pub fn price_x64_from_sqrt(sqrt_price_x64: u128) -> Result<u128> {
    let price = mul_shr64(sqrt_price_x64, sqrt_price_x64, false)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    require!(price > 0, ErrorCode::InvalidMarketPrice);
    Ok(price)
}

/// Converts a currency0 amount into currency1 at `price_x64`.
pub fn currency0_to_currency1(amount0: u64, price_x64: u128, round_up: bool) -> Result<u64> {
    let value = mul_shr64(amount0 as u128, price_x64, round_up)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    u64::try_from(value).map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Converts a currency1 amount into currency0 at `price_x64`.
pub fn currency1_to_currency0(amount1: u64, price_x64: u128, round_up: bool) -> Result<u64> {
    require!(price_x64 > 0, ErrorCode::InvalidMarketPrice);
    let numerator = (amount1 as u128) << 64;
    let mut value = numerator / price_x64;
    if round_up && numerator % price_x64 != 0 {
        value = value
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    }
    u64::try_from(value).map_err(|_| error!(ErrorCode::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_X64: u128 = 1 << 64;

    #[test]
    fn mul_shr64_matches_small_products() {
        assert_eq!(mul_shr64(ONE_X64, ONE_X64, false), Some(ONE_X64));
        assert_eq!(mul_shr64(3, ONE_X64 / 2, false), Some(1));
        assert_eq!(mul_shr64(3, ONE_X64 / 2, true), Some(2));
        assert_eq!(mul_shr64(u128::MAX, u128::MAX, false), None);
    }

    #[test]
    fn unit_sqrt_price_is_parity() {
        let price = price_x64_from_sqrt(ONE_X64).unwrap();
        assert_eq!(price, ONE_X64);
        assert_eq!(currency0_to_currency1(1_000, price, false).unwrap(), 1_000);
        assert_eq!(currency1_to_currency0(1_000, price, true).unwrap(), 1_000);
    }

    #[test]
    fn conversions_round_in_requested_direction() {
        // price of 2 currency1 per currency0
        let price = 2 * ONE_X64;
        assert_eq!(currency1_to_currency0(5, price, false).unwrap(), 2);
        assert_eq!(currency1_to_currency0(5, price, true).unwrap(), 3);
        assert_eq!(currency0_to_currency1(5, price, false).unwrap(), 10);
    }

    #[test]
    fn zero_price_is_rejected() {
        assert_eq!(
            price_x64_from_sqrt(1).unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::InvalidMarketPrice)
        );
        assert_eq!(
            currency1_to_currency0(1, 0, false).unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::InvalidMarketPrice)
        );
    }
}
