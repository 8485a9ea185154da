use anchor_lang::prelude::*;

use crate::{
    helpers::accrue_pool_proceeds,
    state::{CollectionShutdown, LiquidationPoolBinding},
};

/// Pulls new liquidation sales into the collection's claimable proceeds.
pub fn handler(ctx: Context<RecordProceeds>) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    let record = &mut ctx.accounts.collection_shutdown;
    record.lock()?;
    accrue_pool_proceeds(record, pool_key, &ctx.accounts.pool)?;
    record.unlock();
    Ok(())
}

#[derive(Accounts)]
pub struct RecordProceeds<'info> {
    pub pool: Account<'info, liquidation_pool::LiquidationPool>,
    #[account(
        seeds = [b"pool-binding", pool.key().as_ref()],
        bump = pool_binding.bump,
    )]
    pub pool_binding: Account<'info, LiquidationPoolBinding>,
    #[account(
        mut,
        seeds = [b"collection-shutdown", pool_binding.collection_id.as_ref()],
        bump = collection_shutdown.bump,
    )]
    pub collection_shutdown: Account<'info, CollectionShutdown>,
}
