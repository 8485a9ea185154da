use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    error::ErrorCode,
    events::ShutdownStarted,
    helpers::{require_active, require_not_paused, shutdown_threshold},
    instructions::vote::{bind_voter, cast_vote},
    state::{CollectionShutdown, ShutdownConfig, ShutdownVoter},
};

/// Opens a shutdown for a small collection and casts the caller's vote.
pub fn handler(ctx: Context<Start>) -> Result<()> {
    require_not_paused(&ctx.accounts.registry_global_config)?;
    require_active(&ctx.accounts.collection)?;

    let accounts = ctx.accounts;
    let collection_id = accounts.collection.collection_id;
    let threshold = shutdown_threshold(accounts.collection.token_unit()?)?;
    let supply = accounts.ctoken_mint.supply;

    let record = &mut accounts.collection_shutdown;
    record.initialize(
        collection_id,
        accounts.ctoken_mint.key(),
        accounts.escrow_vault.key(),
        ctx.bumps.collection_shutdown,
    );
    record.lock()?;
    let quorum_votes = record.begin(supply, threshold)?;
    record.exit(&crate::ID)?;

    msg!(
        "shutdown started for {}: supply={} quorum={}",
        collection_id,
        supply,
        quorum_votes
    );
    emit!(ShutdownStarted {
        collection_id,
        quorum_votes,
    });

    bind_voter(
        &mut accounts.shutdown_voter,
        collection_id,
        accounts.holder.key(),
        ctx.bumps.shutdown_voter,
    );
    cast_vote(
        &mut accounts.collection_shutdown,
        &mut accounts.shutdown_voter,
        &accounts.holder,
        &accounts.holder_token_account,
        &accounts.escrow_vault,
        &accounts.token_program,
    )?;
    accounts.collection_shutdown.unlock();
    Ok(())
}

#[derive(Accounts)]
pub struct Start<'info> {
    #[account(mut)]
    pub holder: Signer<'info>,
    #[account(
        seeds = [b"shutdown-config"],
        bump = shutdown_config.bump,
    )]
    pub shutdown_config: Box<Account<'info, ShutdownConfig>>,
    #[account(address = shutdown_config.registry_global_config)]
    pub registry_global_config: Box<Account<'info, collection_registry::GlobalConfig>>,
    pub collection: Box<Account<'info, collection_registry::Collection>>,
    #[account(address = collection.ctoken_mint)]
    pub ctoken_mint: Box<Account<'info, Mint>>,
    #[account(
        init_if_needed,
        payer = holder,
        seeds = [b"collection-shutdown", collection.collection_id.as_ref()],
        bump,
        space = 8 + CollectionShutdown::INIT_SPACE,
    )]
    pub collection_shutdown: Box<Account<'info, CollectionShutdown>>,
    /// CHECK: PDA signing registry and liquidation pool calls.
    #[account(seeds = [b"shutdown-authority"], bump = shutdown_config.shutdown_authority_bump)]
    pub shutdown_authority: UncheckedAccount<'info>,
    #[account(
        init_if_needed,
        payer = holder,
        seeds = [b"escrow", collection.collection_id.as_ref()],
        bump,
        token::mint = ctoken_mint,
        token::authority = shutdown_authority,
    )]
    pub escrow_vault: Box<Account<'info, TokenAccount>>,
    #[account(
        init_if_needed,
        payer = holder,
        seeds = [
            b"shutdown-voter",
            collection.collection_id.as_ref(),
            holder.key().as_ref(),
        ],
        bump,
        space = 8 + ShutdownVoter::INIT_SPACE,
    )]
    pub shutdown_voter: Box<Account<'info, ShutdownVoter>>,
    #[account(
        mut,
        constraint = holder_token_account.owner == holder.key() @ ErrorCode::InvalidTokenAccount,
        constraint = holder_token_account.mint == collection.ctoken_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub holder_token_account: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
