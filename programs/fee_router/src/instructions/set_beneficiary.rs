use anchor_lang::prelude::*;

use crate::{
    events::BeneficiarySet,
    helpers::require_owner,
    state::{BeneficiaryFees, FeeConfig},
};

/// Balances already credited to the previous beneficiary stay claimable by it.
pub fn handler(ctx: Context<SetBeneficiary>, beneficiary: Pubkey) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.fee_config)?;

    ctx.accounts.fee_config.beneficiary = beneficiary;
    emit!(BeneficiarySet { beneficiary });
    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct SetBeneficiary<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"fee-config"],
        bump = fee_config.bump,
    )]
    pub fee_config: Account<'info, FeeConfig>,
    #[account(
        seeds = [b"beneficiary-fees", beneficiary.as_ref()],
        bump = beneficiary_fees.bump,
    )]
    pub beneficiary_fees: Account<'info, BeneficiaryFees>,
}
