use anchor_lang::prelude::*;
use anchor_spl::token::{mint_to, Mint, MintTo, Token, TokenAccount};

use crate::{
    error::ErrorCode,
    events::AssetDeposited,
    helpers::{require_not_paused, require_owner},
    state::{AssetRecord, Collection, GlobalConfig},
};

/// Records vault custody of an asset and mints its token unit to the
/// recipient. Custody of the underlying asset is attested by the owner.
pub fn handler(ctx: Context<DepositAsset>, token_id: u64) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.global_config)?;
    require_not_paused(&ctx.accounts.global_config)?;
    require!(
        ctx.accounts.collection.is_active(),
        ErrorCode::CollectionNotActive
    );

    let unit = ctx.accounts.collection.token_unit()?;
    let collection_key = ctx.accounts.collection.key();
    let collection = &mut ctx.accounts.collection;
    collection.asset_count = collection
        .asset_count
        .checked_add(1)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    let record = &mut ctx.accounts.asset_record;
    record.collection_id = collection.collection_id;
    record.token_id = token_id;
    record.holder = collection_key;
    record.listed = false;
    record.protected = false;
    record.bump = ctx.bumps.asset_record;

    let signer_seeds: &[&[u8]] = &[
        b"vault-authority",
        &[ctx.accounts.global_config.vault_authority_bump],
    ];
    mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.ctoken_mint.to_account_info(),
                to: ctx.accounts.recipient_token_account.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            &[signer_seeds],
        ),
        unit,
    )?;

    emit!(AssetDeposited {
        collection_id: collection.collection_id,
        token_id,
        depositor: ctx.accounts.recipient_token_account.owner,
        minted: unit,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct DepositAsset<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
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
        init,
        payer = owner,
        seeds = [b"asset", collection.collection_id.as_ref(), &token_id.to_le_bytes()],
        bump,
        space = 8 + AssetRecord::INIT_SPACE,
    )]
    pub asset_record: Account<'info, AssetRecord>,
    /// CHECK: vault authority PDA.
    #[account(seeds = [b"vault-authority"], bump = global_config.vault_authority_bump)]
    pub vault_authority: UncheckedAccount<'info>,
    #[account(mut, address = collection.ctoken_mint)]
    pub ctoken_mint: Account<'info, Mint>,
    #[account(
        mut,
        constraint = recipient_token_account.mint == collection.ctoken_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
