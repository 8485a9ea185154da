use anchor_lang::prelude::*;

use crate::{
    events::FeeExemptionSet,
    helpers::{require_owner, validate_fee},
    state::{FeeConfig, FeeExemption},
};

pub fn handler(ctx: Context<SetFeeExemption>, counterparty: Pubkey, fee: u32) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.fee_config)?;
    validate_fee(fee)?;

    let exemption = &mut ctx.accounts.fee_exemption;
    exemption.counterparty = counterparty;
    exemption.fee = fee;
    exemption.enabled = true;
    exemption.bump = ctx.bumps.fee_exemption;

    emit!(FeeExemptionSet { counterparty, fee });
    Ok(())
}

#[derive(Accounts)]
#[instruction(counterparty: Pubkey)]
pub struct SetFeeExemption<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(
        seeds = [b"fee-config"],
        bump = fee_config.bump,
    )]
    pub fee_config: Account<'info, FeeConfig>,
    #[account(
        init_if_needed,
        payer = owner,
        seeds = [b"fee-exemption", counterparty.as_ref()],
        bump,
        space = 8 + FeeExemption::INIT_SPACE,
    )]
    pub fee_exemption: Account<'info, FeeExemption>,
    pub system_program: Program<'info, System>,
}
