use anchor_lang::prelude::*;

use crate::{
    events::FeeSet,
    helpers::{require_owner, validate_fee},
    state::FeeConfig,
};

pub fn handler(ctx: Context<SetDefaultFee>, fee: u32) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.fee_config)?;
    validate_fee(fee)?;

    ctx.accounts.fee_config.default_fee = fee;
    emit!(FeeSet {
        pair: None,
        fee: Some(fee),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetDefaultFee<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"fee-config"],
        bump = fee_config.bump,
    )]
    pub fee_config: Account<'info, FeeConfig>,
}
