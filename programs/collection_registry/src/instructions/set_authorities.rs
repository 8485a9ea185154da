use anchor_lang::prelude::*;

use crate::{helpers::require_owner, state::GlobalConfig};

pub fn handler(
    ctx: Context<SetAuthorities>,
    shutdown_authority: Pubkey,
    listings_authority: Pubkey,
) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.global_config)?;

    let global = &mut ctx.accounts.global_config;
    global.shutdown_authority = shutdown_authority;
    global.listings_authority = listings_authority;
    global.last_updated_at = Clock::get()?.unix_timestamp;

    Ok(())
}

#[derive(Accounts)]
pub struct SetAuthorities<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"global-config"],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,
}
