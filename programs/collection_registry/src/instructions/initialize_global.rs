use anchor_lang::prelude::*;

use crate::state::GlobalConfig;

pub fn handler(
    ctx: Context<InitializeGlobal>,
    shutdown_authority: Pubkey,
    listings_authority: Pubkey,
    paused: bool,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let global = &mut ctx.accounts.global_config;
    global.owner = ctx.accounts.owner.key();
    global.global_pause = paused;
    global.shutdown_authority = shutdown_authority;
    global.listings_authority = listings_authority;
    global.vault_authority_bump = ctx.bumps.vault_authority;
    global.created_at = now;
    global.last_updated_at = now;
    global.bump = ctx.bumps.global_config;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeGlobal<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(
        init,
        payer = owner,
        seeds = [b"global-config"],
        bump,
        space = 8 + GlobalConfig::INIT_SPACE,
    )]
    pub global_config: Account<'info, GlobalConfig>,
    /// CHECK: PDA signing for collection token mints and vault accounts.
    #[account(seeds = [b"vault-authority"], bump)]
    pub vault_authority: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}
