use anchor_lang::prelude::*;

use crate::{
    events::FeeSet,
    helpers::{require_owner, validate_fee},
    state::{FeeConfig, Pair},
};

/// `None` clears the pair fee so the pair follows the default again.
pub fn handler(ctx: Context<SetPairFee>, fee: Option<u32>) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.fee_config)?;
    if let Some(fee) = fee {
        validate_fee(fee)?;
    }

    ctx.accounts.pair.fee = fee;
    emit!(FeeSet {
        pair: Some(ctx.accounts.pair.key()),
        fee,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetPairFee<'info> {
    pub owner: Signer<'info>,
    #[account(
        seeds = [b"fee-config"],
        bump = fee_config.bump,
    )]
    pub fee_config: Account<'info, FeeConfig>,
    #[account(
        mut,
        seeds = [b"pair", pair.collection_id.as_ref()],
        bump = pair.bump,
    )]
    pub pair: Account<'info, Pair>,
}
