use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    events::AssetWithdrawn,
    state::{AssetRecord, Collection, GlobalConfig},
};

pub fn handler(ctx: Context<WithdrawAsset>, recipient: Pubkey) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.shutdown_authority.key(),
        ctx.accounts.global_config.shutdown_authority,
        ErrorCode::Unauthorized
    );

    let collection_key = ctx.accounts.collection.key();
    let record = &mut ctx.accounts.asset_record;
    require!(record.is_held_by(&collection_key), ErrorCode::AssetNotInVault);
    require!(!record.listed, ErrorCode::AssetListed);

    record.holder = recipient;

    let collection = &mut ctx.accounts.collection;
    collection.asset_count = collection
        .asset_count
        .checked_sub(1)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    emit!(AssetWithdrawn {
        collection_id: record.collection_id,
        token_id: record.token_id,
        recipient,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawAsset<'info> {
    pub shutdown_authority: Signer<'info>,
    #[account(
        seeds = [b"global-config"],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,
    #[account(
        mut,
        seeds = [b"collection", collection.collection_id.as_ref()],
        bump = collection.bump,
    )]
    pub collection: Account<'info, Collection>,
    #[account(
        mut,
        seeds = [b"asset", collection.collection_id.as_ref(), &asset_record.token_id.to_le_bytes()],
        bump = asset_record.bump,
    )]
    pub asset_record: Account<'info, AssetRecord>,
}
