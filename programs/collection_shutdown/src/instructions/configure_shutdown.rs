use anchor_lang::prelude::*;

use crate::{
    helpers::require_owner,
    state::{ShutdownConfig, ShutdownConfigParams},
};

pub fn handler(ctx: Context<ConfigureShutdown>, params: ShutdownConfigParams) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.shutdown_config)?;
    params.validate()?;

    ctx.accounts.shutdown_config.apply(&params);
    Ok(())
}

#[derive(Accounts)]
pub struct ConfigureShutdown<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"shutdown-config"],
        bump = shutdown_config.bump,
    )]
    pub shutdown_config: Account<'info, ShutdownConfig>,
}
