use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::FeeConfig};

pub fn require_owner(owner: &Signer<'_>, fee_config: &Account<FeeConfig>) -> Result<()> {
    require_keys_eq!(owner.key(), fee_config.owner, ErrorCode::Unauthorized);
    Ok(())
}

pub fn require_not_paused(global_config: &collection_registry::GlobalConfig) -> Result<()> {
    require!(!global_config.global_pause, ErrorCode::GlobalPaused);
    Ok(())
}

/// Retired collections take no further trades or fee deposits.
pub fn require_active(collection: &collection_registry::Collection) -> Result<()> {
    require!(collection.is_active(), ErrorCode::CollectionNotActive);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_registry::{Collection, CollectionStatus};

    fn collection(status: CollectionStatus) -> Collection {
        Collection {
            collection_id: Pubkey::new_unique(),
            ctoken_mint: Pubkey::new_unique(),
            ctoken_vault: Pubkey::new_unique(),
            denomination: 0,
            status,
            asset_count: 1,
            listing_count: 0,
            protected_listing_count: 0,
            bump: 255,
        }
    }

    #[test]
    fn retired_collection_blocks_trading() {
        assert!(require_active(&collection(CollectionStatus::Active)).is_ok());
        assert_eq!(
            require_active(&collection(CollectionStatus::Retired)).unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::CollectionNotActive)
        );
    }
}
