use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    error::ErrorCode,
    events::ShutdownClaimed,
    helpers::{
        accrue_pool_proceeds, burn_escrow, liquidation_sold_through, pay_claim,
        require_not_paused,
    },
    state::{CollectionShutdown, ShutdownConfig, ShutdownVoter},
};

/// Burns the caller's escrowed votes for their share of liquidation
/// proceeds. Records for the pool's unsold assets go in remaining accounts.
pub fn handler<'info>(ctx: Context<'_, '_, '_, 'info, Claim<'info>>) -> Result<()> {
    require_not_paused(&ctx.accounts.registry_global_config)?;

    let accounts = ctx.accounts;
    let votes = accounts.shutdown_voter.take_all()?;
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

    let bump = accounts.shutdown_config.shutdown_authority_bump;
    burn_escrow(
        &accounts.token_program,
        &accounts.ctoken_mint,
        &accounts.escrow_vault,
        &accounts.shutdown_authority,
        bump,
        votes,
    )?;
    pay_claim(
        &accounts.token_program,
        &accounts.claim_vault,
        &accounts.claimant_token_account,
        &accounts.shutdown_authority,
        bump,
        amount,
    )?;

    emit!(ShutdownClaimed {
        collection_id: record.collection_id,
        claimant: accounts.claimant.key(),
        votes,
        amount,
    });
    record.unlock();
    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub claimant: Signer<'info>,
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
    #[account(
        mut,
        seeds = [
            b"shutdown-voter",
            collection_shutdown.collection_id.as_ref(),
            claimant.key().as_ref(),
        ],
        bump = shutdown_voter.bump,
        close = claimant,
    )]
    pub shutdown_voter: Box<Account<'info, ShutdownVoter>>,
    pub pool: Box<Account<'info, liquidation_pool::LiquidationPool>>,
    #[account(mut, address = collection_shutdown.ctoken_mint)]
    pub ctoken_mint: Box<Account<'info, Mint>>,
    #[account(mut, address = collection_shutdown.escrow_vault)]
    pub escrow_vault: Box<Account<'info, TokenAccount>>,
    /// CHECK: PDA owning the escrow and claim vaults.
    #[account(seeds = [b"shutdown-authority"], bump = shutdown_config.shutdown_authority_bump)]
    pub shutdown_authority: UncheckedAccount<'info>,
    #[account(mut, address = shutdown_config.claim_vault)]
    pub claim_vault: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = claimant_token_account.owner == claimant.key() @ ErrorCode::InvalidTokenAccount,
        constraint = claimant_token_account.mint == shutdown_config.settlement_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub claimant_token_account: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
}
