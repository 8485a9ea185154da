use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_DENOMINATION, ONE_TOKEN},
    error::ErrorCode,
    state::GlobalConfig,
};

pub fn require_owner(owner: &Signer<'_>, global_config: &Account<GlobalConfig>) -> Result<()> {
    require_keys_eq!(owner.key(), global_config.owner, ErrorCode::Unauthorized);
    Ok(())
}

pub fn require_not_paused(global_config: &GlobalConfig) -> Result<()> {
    require!(!global_config.global_pause, ErrorCode::GlobalPaused);
    Ok(())
}

/// Base units of collection token minted per deposited asset.
pub fn token_unit(denomination: u8) -> Result<u64> {
    require!(
        denomination <= MAX_DENOMINATION,
        ErrorCode::InvalidDenomination
    );
    10_u64
        .checked_pow(denomination as u32)
        .and_then(|scale| scale.checked_mul(ONE_TOKEN))
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_unit_scales_with_denomination() {
        assert_eq!(token_unit(0).unwrap(), 1_000_000_000);
        assert_eq!(token_unit(3).unwrap(), 1_000_000_000_000);
    }

    #[test]
    fn token_unit_rejects_large_denomination() {
        assert_eq!(
            token_unit(MAX_DENOMINATION + 1).unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::InvalidDenomination)
        );
    }
}
