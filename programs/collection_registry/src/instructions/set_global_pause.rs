use anchor_lang::prelude::*;

use crate::{events::GlobalPauseSet, helpers::require_owner, state::GlobalConfig};

pub fn handler(ctx: Context<SetGlobalPause>, paused: bool) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.global_config)?;

    ctx.accounts.global_config.global_pause = paused;
    ctx.accounts.global_config.last_updated_at = Clock::get()?.unix_timestamp;

    msg!("global pause set to {}", paused);
    emit!(GlobalPauseSet { paused });

    Ok(())
}

#[derive(Accounts)]
pub struct SetGlobalPause<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"global-config"],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,
}
