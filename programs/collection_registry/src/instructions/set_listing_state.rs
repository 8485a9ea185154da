use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    events::ListingStateChanged,
    state::{AssetRecord, Collection, GlobalConfig},
};

pub fn handler(ctx: Context<SetListingState>, listed: bool, protected: bool) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.listings_authority.key(),
        ctx.accounts.global_config.listings_authority,
        ErrorCode::Unauthorized
    );
    require!(
        ctx.accounts.collection.is_active(),
        ErrorCode::CollectionNotActive
    );

    let collection_key = ctx.accounts.collection.key();
    let record = &mut ctx.accounts.asset_record;
    require!(record.is_held_by(&collection_key), ErrorCode::AssetNotInVault);

    // protection only has meaning for an open listing
    let protected = listed && protected;
    require!(
        record.listed != listed || record.protected != protected,
        ErrorCode::ListingStateUnchanged
    );

    ctx.accounts.collection.apply_listing_change(
        record.listed,
        record.protected,
        listed,
        protected,
    )?;
    record.listed = listed;
    record.protected = protected;

    emit!(ListingStateChanged {
        collection_id: record.collection_id,
        token_id: record.token_id,
        listed,
        protected,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetListingState<'info> {
    pub listings_authority: Signer<'info>,
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
