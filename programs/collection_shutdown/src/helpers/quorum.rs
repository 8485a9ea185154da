use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_SHUTDOWN_TOKENS, SHUTDOWN_QUORUM_PERCENT},
    error::ErrorCode,
};

/// Largest supply at which a shutdown may start, in base units.
pub fn shutdown_threshold(token_unit: u64) -> Result<u64> {
    MAX_SHUTDOWN_TOKENS
        .checked_mul(token_unit)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

pub fn quorum_for_supply(supply: u64) -> Result<u64> {
    ((supply as u128)
        .checked_mul(SHUTDOWN_QUORUM_PERCENT as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?)
    .checked_div(100)
    .ok_or_else(|| error!(ErrorCode::MathOverflow))
    .map(|v| v as u64)
}

/// Supply the quorum was derived from. Claims are shared over this rather
/// than over the votes cast, so holders who never voted keep their share.
pub fn claim_denominator(quorum_votes: u64) -> Result<u128> {
    (quorum_votes as u128)
        .checked_mul(100)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        .checked_div(SHUTDOWN_QUORUM_PERCENT as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

pub fn claim_share(available_claim: u64, votes: u64, quorum_votes: u64) -> Result<u64> {
    let denominator = claim_denominator(quorum_votes)?;
    require!(denominator > 0, ErrorCode::MathOverflow);
    let share = (available_claim as u128)
        .checked_mul(votes as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        .checked_div(denominator)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    u64::try_from(share).map_err(|_| error!(ErrorCode::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: u64 = 1_000_000_000;

    #[test]
    fn threshold_scales_with_unit() {
        assert_eq!(shutdown_threshold(UNIT).unwrap(), 4 * UNIT);
        assert_eq!(shutdown_threshold(1_000 * UNIT).unwrap(), 4_000 * UNIT);
        assert!(shutdown_threshold(u64::MAX).is_err());
    }

    #[test]
    fn quorum_is_half_of_supply() {
        assert_eq!(quorum_for_supply(4 * UNIT).unwrap(), 2 * UNIT);
        assert_eq!(quorum_for_supply(3).unwrap(), 1);
        assert_eq!(quorum_for_supply(u64::MAX).unwrap(), u64::MAX / 2);
    }

    #[test]
    fn share_is_of_supply_not_votes() {
        // 2 settlement tokens over a 4-token supply, 1 token escrowed
        assert_eq!(claim_share(2 * UNIT, UNIT, 2 * UNIT).unwrap(), UNIT / 2);
    }

    #[test]
    fn share_truncates() {
        assert_eq!(claim_share(10, 1, 1).unwrap(), 5);
        assert_eq!(claim_share(1, 1, 2).unwrap(), 0);
    }

    #[test]
    fn share_without_quorum_fails() {
        assert!(claim_share(10, 1, 0).is_err());
    }
}
