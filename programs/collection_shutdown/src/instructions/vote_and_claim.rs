use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    error::ErrorCode,
    events::ShutdownClaimed,
    helpers::{
        accrue_pool_proceeds, burn_from_holder, liquidation_sold_through, pay_claim,
        require_not_paused,
    },
    state::{CollectionShutdown, ShutdownConfig},
};

/// Claim path for holders who never escrowed: burns the whole balance and
/// pays the same share without touching the vote tally.
pub fn handler<'info>(ctx: Context<'_, '_, '_, 'info, VoteAndClaim<'info>>) -> Result<()> {
    require_not_paused(&ctx.accounts.registry_global_config)?;

    let accounts = ctx.accounts;
    let votes = accounts.holder_ctoken_account.amount;
    require!(votes > 0, ErrorCode::NoVotes);
    let pool_key = accounts.pool.key();

    let record = &mut accounts.collection_shutdown;
    record.lock()?;
    require!(
        record.liquidation_pool.is_some(),
        ErrorCode::ShutdownNotExecuted
    );
    accrue_pool_proceeds(record, pool_key, &accounts.pool)?;

    let sold_through = liquidation_sold_through(
        ctx.remaining_accounts,
        &record.collection_id,
        &record.pending_asset_ids,
        &pool_key,
    )?;
    let amount = record.settle_claim(votes, sold_through)?;
    require!(
        accounts.claim_vault.amount >= amount,
        ErrorCode::InsufficientClaimVault
    );
    record.exit(&crate::ID)?;

    burn_from_holder(
        &accounts.token_program,
        &accounts.ctoken_mint,
        &accounts.holder_ctoken_account,
        &accounts.holder,
        votes,
    )?;
    pay_claim(
        &accounts.token_program,
        &accounts.claim_vault,
        &accounts.holder_settlement_account,
        &accounts.shutdown_authority,
        accounts.shutdown_config.shutdown_authority_bump,
        amount,
    )?;

    emit!(ShutdownClaimed {
        collection_id: record.collection_id,
        claimant: accounts.holder.key(),
        votes,
        amount,
    });
    record.unlock();
    Ok(())
}

#[derive(Accounts)]
pub struct VoteAndClaim<'info> {
    pub holder: Signer<'info>,
    #[account(
        seeds = [b"shutdown-config"],
        bump = shutdown_config.bump,
    )]
    pub shutdown_config: Box<Account<'info, ShutdownConfig>>,
    #[account(address = shutdown_config.registry_global_config)]
    pub registry_global_config: Box<Account<'info, collection_registry::GlobalConfig>>,
    #[account(
        mut,
        seeds = [b"collection-shutdown", collection_shutdown.collection_id.as_ref()],
        bump = collection_shutdown.bump,
    )]
    pub collection_shutdown: Box<Account<'info, CollectionShutdown>>,
    pub pool: Box<Account<'info, liquidation_pool::LiquidationPool>>,
    #[account(mut, address = collection_shutdown.ctoken_mint)]
    pub ctoken_mint: Box<Account<'info, Mint>>,
    #[account(
        mut,
        constraint = holder_ctoken_account.owner == holder.key() @ ErrorCode::InvalidTokenAccount,
        constraint = holder_ctoken_account.mint == collection_shutdown.ctoken_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub holder_ctoken_account: Box<Account<'info, TokenAccount>>,
    /// CHECK: PDA owning the claim vault.
    #[account(seeds = [b"shutdown-authority"], bump = shutdown_config.shutdown_authority_bump)]
    pub shutdown_authority: UncheckedAccount<'info>,
    #[account(mut, address = shutdown_config.claim_vault)]
    pub claim_vault: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = holder_settlement_account.owner == holder.key() @ ErrorCode::InvalidTokenAccount,
        constraint = holder_settlement_account.mint == shutdown_config.settlement_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub holder_settlement_account: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
}
