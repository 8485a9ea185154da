use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::AssetRecord};

pub fn handler(ctx: Context<TransferAsset>, new_holder: Pubkey) -> Result<()> {
    let record = &mut ctx.accounts.asset_record;
    require!(
        record.is_held_by(&ctx.accounts.holder.key()),
        ErrorCode::AssetHolderMismatch
    );

    record.holder = new_holder;

    Ok(())
}

#[derive(Accounts)]
pub struct TransferAsset<'info> {
    pub holder: Signer<'info>,
    #[account(
        mut,
        seeds = [b"asset", asset_record.collection_id.as_ref(), &asset_record.token_id.to_le_bytes()],
        bump = asset_record.bump,
    )]
    pub asset_record: Account<'info, AssetRecord>,
}
