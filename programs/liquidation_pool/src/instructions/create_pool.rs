use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::{
    error::ErrorCode, events::LiquidationPoolCreated, helpers::require_shutdown_authority,
    state::LiquidationPool,
};

pub fn handler(
    ctx: Context<CreatePool>,
    collection_id: Pubkey,
    asset_count: u32,
    start_price: u64,
    duration_secs: i64,
) -> Result<()> {
    require_shutdown_authority(&ctx.accounts.owner.key(), &ctx.accounts.global_config)?;
    require!(asset_count > 0, ErrorCode::InvalidAmount);
    require!(start_price > 0, ErrorCode::InvalidAmount);
    require!(duration_secs > 0, ErrorCode::InvalidDuration);

    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;
    pool.owner = ctx.accounts.owner.key();
    pool.collection_id = collection_id;
    pool.settlement_mint = ctx.accounts.settlement_mint.key();
    pool.proceeds_account = ctx.accounts.proceeds_account.key();
    pool.start_price = start_price;
    pool.end_price = 0;
    pool.start_ts = Clock::get()?.unix_timestamp;
    pool.duration_secs = duration_secs;
    pool.asset_count = asset_count;
    pool.sold_count = 0;
    pool.total_proceeds = 0;
    pool.bump = ctx.bumps.pool;

    emit!(LiquidationPoolCreated {
        pool: pool_key,
        collection_id,
        asset_count,
        start_price,
        duration_secs,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(collection_id: Pubkey)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    pub owner: Signer<'info>,
    #[account(
        seeds = [b"global-config"],
        bump = global_config.bump,
        seeds::program = collection_registry::ID,
    )]
    pub global_config: Account<'info, collection_registry::GlobalConfig>,
    #[account(
        init,
        payer = payer,
        seeds = [b"liquidation-pool", collection_id.as_ref()],
        bump,
        space = 8 + LiquidationPool::INIT_SPACE,
    )]
    pub pool: Account<'info, LiquidationPool>,
    pub settlement_mint: Account<'info, Mint>,
    #[account(
        constraint = proceeds_account.mint == settlement_mint.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub proceeds_account: Account<'info, TokenAccount>,
    pub system_program: Program<'info, System>,
}
