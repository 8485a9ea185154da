use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::state::{ShutdownConfig, ShutdownConfigParams};

pub fn handler(ctx: Context<InitializeShutdown>, params: ShutdownConfigParams) -> Result<()> {
    params.validate()?;

    let config = &mut ctx.accounts.shutdown_config;
    config.owner = ctx.accounts.owner.key();
    config.registry_global_config = ctx.accounts.registry_global_config.key();
    config.settlement_mint = ctx.accounts.settlement_mint.key();
    config.claim_vault = ctx.accounts.claim_vault.key();
    config.apply(&params);
    config.shutdown_authority_bump = ctx.bumps.shutdown_authority;
    config.bump = ctx.bumps.shutdown_config;

    msg!(
        "shutdown engine initialized: authority={}",
        ctx.accounts.shutdown_authority.key()
    );
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeShutdown<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    pub registry_global_config: Account<'info, collection_registry::GlobalConfig>,
    pub settlement_mint: Account<'info, Mint>,
    #[account(
        init,
        payer = owner,
        seeds = [b"shutdown-config"],
        bump,
        space = 8 + ShutdownConfig::INIT_SPACE,
    )]
    pub shutdown_config: Account<'info, ShutdownConfig>,
    /// CHECK: PDA signing registry and liquidation pool calls.
    #[account(seeds = [b"shutdown-authority"], bump)]
    pub shutdown_authority: UncheckedAccount<'info>,
    #[account(
        init,
        payer = owner,
        seeds = [b"claim-vault"],
        bump,
        token::mint = settlement_mint,
        token::authority = shutdown_authority,
    )]
    pub claim_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
