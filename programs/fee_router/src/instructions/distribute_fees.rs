use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    events::FeesDistributed,
    helpers::require_not_paused,
    state::{BeneficiaryFees, FeeConfig, Pair},
};

/// Moves the pair's settlement-side fees to the AMM beneficiary. The tokens
/// already sit in the settlement vault, so only the ledger changes.
pub fn handler(ctx: Context<DistributeFees>) -> Result<()> {
    require_not_paused(&ctx.accounts.registry_global_config)?;
    ctx.accounts.pair.lock()?;

    let amount = ctx.accounts.pair.drain_settlement()?;
    ctx.accounts.beneficiary_fees.credit(amount)?;
    let fee_config = &mut ctx.accounts.fee_config;
    fee_config.total_fees_distributed = fee_config
        .total_fees_distributed
        .checked_add(amount)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    ctx.accounts.pair.unlock();

    emit!(FeesDistributed {
        pair: ctx.accounts.pair.key(),
        beneficiary: fee_config.beneficiary,
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct DistributeFees<'info> {
    #[account(
        mut,
        seeds = [b"fee-config"],
        bump = fee_config.bump,
    )]
    pub fee_config: Account<'info, FeeConfig>,
    #[account(address = fee_config.registry_global_config)]
    pub registry_global_config: Account<'info, collection_registry::GlobalConfig>,
    #[account(
        mut,
        seeds = [b"pair", pair.collection_id.as_ref()],
        bump = pair.bump,
    )]
    pub pair: Account<'info, Pair>,
    #[account(
        mut,
        seeds = [b"beneficiary-fees", fee_config.beneficiary.as_ref()],
        bump = beneficiary_fees.bump,
    )]
    pub beneficiary_fees: Account<'info, BeneficiaryFees>,
}
