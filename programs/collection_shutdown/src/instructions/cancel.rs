use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{
    error::ErrorCode,
    events::ShutdownCancelled,
    helpers::{require_not_paused, shutdown_threshold},
    state::{CollectionShutdown, ShutdownConfig},
};

/// Anyone may cancel a reached quorum once supply has grown past the
/// shutdown threshold.
pub fn handler(ctx: Context<Cancel>) -> Result<()> {
    require_not_paused(&ctx.accounts.registry_global_config)?;

    let threshold = shutdown_threshold(ctx.accounts.collection.token_unit()?)?;
    let supply = ctx.accounts.ctoken_mint.supply;

    let record = &mut ctx.accounts.collection_shutdown;
    record.lock()?;
    record.cancel(supply, threshold)?;

    msg!("shutdown cancelled for {}: supply={}", record.collection_id, supply);
    emit!(ShutdownCancelled {
        collection_id: record.collection_id,
    });
    record.unlock();
    Ok(())
}

#[derive(Accounts)]
pub struct Cancel<'info> {
    pub caller: Signer<'info>,
    #[account(
        seeds = [b"shutdown-config"],
        bump = shutdown_config.bump,
    )]
    pub shutdown_config: Box<Account<'info, ShutdownConfig>>,
    #[account(address = shutdown_config.registry_global_config)]
    pub registry_global_config: Box<Account<'info, collection_registry::GlobalConfig>>,
    #[account(
        constraint = collection.collection_id == collection_shutdown.collection_id @ ErrorCode::CollectionMismatch,
    )]
    pub collection: Box<Account<'info, collection_registry::Collection>>,
    #[account(address = collection_shutdown.ctoken_mint)]
    pub ctoken_mint: Box<Account<'info, Mint>>,
    #[account(
        mut,
        seeds = [b"collection-shutdown", collection_shutdown.collection_id.as_ref()],
        bump = collection_shutdown.bump,
    )]
    pub collection_shutdown: Box<Account<'info, CollectionShutdown>>,
}
