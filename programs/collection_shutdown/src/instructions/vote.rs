use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    error::ErrorCode,
    events::{ShutdownQuorumReached, ShutdownVoted},
    helpers::{escrow_tokens, require_not_paused},
    state::{CollectionShutdown, ShutdownConfig, ShutdownVoter},
};

pub fn handler(ctx: Context<Vote>) -> Result<()> {
    require_not_paused(&ctx.accounts.registry_global_config)?;

    let accounts = ctx.accounts;
    accounts.collection_shutdown.lock()?;
    accounts.collection_shutdown.exit(&crate::ID)?;
    bind_voter(
        &mut accounts.shutdown_voter,
        accounts.collection_shutdown.collection_id,
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

pub(crate) fn bind_voter(voter: &mut ShutdownVoter, collection_id: Pubkey, holder: Pubkey, bump: u8) {
    voter.collection_id = collection_id;
    voter.voter = holder;
    voter.bump = bump;
}

/// Escrows the holder's entire balance as votes.
pub(crate) fn cast_vote<'info>(
    record: &mut CollectionShutdown,
    voter: &mut ShutdownVoter,
    holder: &Signer<'info>,
    holder_token_account: &Account<'info, TokenAccount>,
    escrow_vault: &Account<'info, TokenAccount>,
    token_program: &Program<'info, Token>,
) -> Result<u64> {
    let votes = holder_token_account.amount;
    require!(votes > 0, ErrorCode::NoVotes);

    let reached = record.record_vote(votes)?;
    voter.add(votes)?;
    escrow_tokens(token_program, holder_token_account, escrow_vault, holder, votes)?;

    emit!(ShutdownVoted {
        collection_id: record.collection_id,
        voter: holder.key(),
        votes,
    });
    if reached {
        msg!(
            "shutdown quorum reached: {}/{}",
            record.shutdown_votes,
            record.quorum_votes
        );
        emit!(ShutdownQuorumReached {
            collection_id: record.collection_id,
        });
    }
    Ok(votes)
}

#[derive(Accounts)]
pub struct Vote<'info> {
    #[account(mut)]
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
    #[account(mut, address = collection_shutdown.escrow_vault)]
    pub escrow_vault: Box<Account<'info, TokenAccount>>,
    #[account(
        init_if_needed,
        payer = holder,
        seeds = [
            b"shutdown-voter",
            collection_shutdown.collection_id.as_ref(),
            holder.key().as_ref(),
        ],
        bump,
        space = 8 + ShutdownVoter::INIT_SPACE,
    )]
    pub shutdown_voter: Box<Account<'info, ShutdownVoter>>,
    #[account(
        mut,
        constraint = holder_token_account.owner == holder.key() @ ErrorCode::InvalidTokenAccount,
        constraint = holder_token_account.mint == collection_shutdown.ctoken_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub holder_token_account: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
