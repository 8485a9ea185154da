use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    error::ErrorCode,
    events::ShutdownVoteReclaimed,
    helpers::{release_escrow, require_not_paused},
    state::{CollectionShutdown, ShutdownConfig, ShutdownVoter},
};

pub fn handler(ctx: Context<ReclaimVote>) -> Result<()> {
    require_not_paused(&ctx.accounts.registry_global_config)?;

    let record = &mut ctx.accounts.collection_shutdown;
    record.lock()?;
    let votes = ctx.accounts.shutdown_voter.take_all()?;
    record.reclaim(votes)?;
    record.exit(&crate::ID)?;

    release_escrow(
        &ctx.accounts.token_program,
        &ctx.accounts.escrow_vault,
        &ctx.accounts.voter_token_account,
        &ctx.accounts.shutdown_authority,
        ctx.accounts.shutdown_config.shutdown_authority_bump,
        votes,
    )?;

    emit!(ShutdownVoteReclaimed {
        collection_id: record.collection_id,
        voter: ctx.accounts.voter.key(),
        votes,
    });
    record.unlock();
    Ok(())
}

#[derive(Accounts)]
pub struct ReclaimVote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,
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
            voter.key().as_ref(),
        ],
        bump = shutdown_voter.bump,
        close = voter,
    )]
    pub shutdown_voter: Box<Account<'info, ShutdownVoter>>,
    #[account(mut, address = collection_shutdown.escrow_vault)]
    pub escrow_vault: Box<Account<'info, TokenAccount>>,
    /// CHECK: PDA owning the escrow vault.
    #[account(seeds = [b"shutdown-authority"], bump = shutdown_config.shutdown_authority_bump)]
    pub shutdown_authority: UncheckedAccount<'info>,
    #[account(
        mut,
        constraint = voter_token_account.owner == voter.key() @ ErrorCode::InvalidTokenAccount,
        constraint = voter_token_account.mint == collection_shutdown.ctoken_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub voter_token_account: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
}
