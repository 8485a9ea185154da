use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Pools are only opened by the registry's shutdown authority.
pub fn require_shutdown_authority(
    owner: &Pubkey,
    global_config: &collection_registry::GlobalConfig,
) -> Result<()> {
    require_keys_eq!(*owner, global_config.shutdown_authority, ErrorCode::Unauthorized);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global_config(shutdown_authority: Pubkey) -> collection_registry::GlobalConfig {
        collection_registry::GlobalConfig {
            owner: Pubkey::new_unique(),
            global_pause: false,
            shutdown_authority,
            listings_authority: Pubkey::new_unique(),
            vault_authority_bump: 255,
            created_at: 0,
            last_updated_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn only_shutdown_authority_opens_pools() {
        let authority = Pubkey::new_unique();
        let config = global_config(authority);
        assert!(require_shutdown_authority(&authority, &config).is_ok());
        assert_eq!(
            require_shutdown_authority(&Pubkey::new_unique(), &config).unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::Unauthorized)
        );
    }
}
