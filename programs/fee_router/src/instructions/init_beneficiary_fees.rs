use anchor_lang::prelude::*;

use crate::state::BeneficiaryFees;

pub fn handler(ctx: Context<InitBeneficiaryFees>, beneficiary: Pubkey) -> Result<()> {
    let fees = &mut ctx.accounts.beneficiary_fees;
    fees.beneficiary = beneficiary;
    fees.amount = 0;
    fees.total_claimed = 0;
    fees.bump = ctx.bumps.beneficiary_fees;
    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct InitBeneficiaryFees<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        init,
        payer = payer,
        seeds = [b"beneficiary-fees", beneficiary.as_ref()],
        bump,
        space = 8 + BeneficiaryFees::INIT_SPACE,
    )]
    pub beneficiary_fees: Account<'info, BeneficiaryFees>,
    pub system_program: Program<'info, System>,
}
