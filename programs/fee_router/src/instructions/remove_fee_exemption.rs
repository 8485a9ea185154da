use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    events::FeeExemptionRemoved,
    helpers::require_owner,
    state::{FeeConfig, FeeExemption},
};

pub fn handler(ctx: Context<RemoveFeeExemption>) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.fee_config)?;

    let exemption = &mut ctx.accounts.fee_exemption;
    require!(exemption.enabled, ErrorCode::ExemptionNotSet);
    exemption.enabled = false;
    exemption.fee = 0;

    emit!(FeeExemptionRemoved {
        counterparty: exemption.counterparty,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RemoveFeeExemption<'info> {
    pub owner: Signer<'info>,
    #[account(
        seeds = [b"fee-config"],
        bump = fee_config.bump,
    )]
    pub fee_config: Account<'info, FeeConfig>,
    #[account(
        mut,
        seeds = [b"fee-exemption", fee_exemption.counterparty.as_ref()],
        bump = fee_exemption.bump,
    )]
    pub fee_exemption: Account<'info, FeeExemption>,
}
