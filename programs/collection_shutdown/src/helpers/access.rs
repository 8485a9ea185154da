use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::ShutdownConfig};

pub fn require_owner(owner: &Signer<'_>, config: &Account<ShutdownConfig>) -> Result<()> {
    require_keys_eq!(owner.key(), config.owner, ErrorCode::Unauthorized);
    Ok(())
}

pub fn require_not_paused(global_config: &collection_registry::GlobalConfig) -> Result<()> {
    require!(!global_config.global_pause, ErrorCode::GlobalPaused);
    Ok(())
}

pub fn require_active(collection: &collection_registry::Collection) -> Result<()> {
    require!(collection.is_active(), ErrorCode::CollectionNotActive);
    Ok(())
}
