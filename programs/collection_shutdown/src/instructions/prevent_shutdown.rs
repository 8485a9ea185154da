use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    events::ShutdownPreventionToggled,
    helpers::require_owner,
    state::{CollectionShutdown, ShutdownConfig},
};

pub fn handler(ctx: Context<PreventShutdown>, prevented: bool) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.shutdown_config)?;

    let collection_id = ctx.accounts.collection.collection_id;
    let record = &mut ctx.accounts.collection_shutdown;
    record.initialize(
        collection_id,
        ctx.accounts.ctoken_mint.key(),
        ctx.accounts.escrow_vault.key(),
        ctx.bumps.collection_shutdown,
    );
    record.set_prevented(prevented)?;

    emit!(ShutdownPreventionToggled {
        collection_id,
        prevented,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct PreventShutdown<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(
        seeds = [b"shutdown-config"],
        bump = shutdown_config.bump,
    )]
    pub shutdown_config: Box<Account<'info, ShutdownConfig>>,
    pub collection: Box<Account<'info, collection_registry::Collection>>,
    #[account(address = collection.ctoken_mint)]
    pub ctoken_mint: Box<Account<'info, Mint>>,
    #[account(
        init_if_needed,
        payer = owner,
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
        payer = owner,
        seeds = [b"escrow", collection.collection_id.as_ref()],
        bump,
        token::mint = ctoken_mint,
        token::authority = shutdown_authority,
    )]
    pub escrow_vault: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
