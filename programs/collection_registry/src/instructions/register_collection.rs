use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::CTOKEN_DECIMALS,
    events::CollectionRegistered,
    helpers::{require_owner, token_unit},
    state::{Collection, CollectionStatus, GlobalConfig},
};

pub fn handler(
    ctx: Context<RegisterCollection>,
    collection_id: Pubkey,
    denomination: u8,
) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.global_config)?;
    token_unit(denomination)?;

    let collection = &mut ctx.accounts.collection;
    collection.collection_id = collection_id;
    collection.ctoken_mint = ctx.accounts.ctoken_mint.key();
    collection.ctoken_vault = ctx.accounts.ctoken_vault.key();
    collection.denomination = denomination;
    collection.status = CollectionStatus::Active;
    collection.asset_count = 0;
    collection.listing_count = 0;
    collection.protected_listing_count = 0;
    collection.bump = ctx.bumps.collection;

    emit!(CollectionRegistered {
        collection_id,
        ctoken_mint: collection.ctoken_mint,
        denomination,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(collection_id: Pubkey)]
pub struct RegisterCollection<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(
        seeds = [b"global-config"],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,
    /// CHECK: vault authority PDA, mint and vault authority.
    #[account(seeds = [b"vault-authority"], bump = global_config.vault_authority_bump)]
    pub vault_authority: UncheckedAccount<'info>,
    #[account(
        init,
        payer = owner,
        seeds = [b"collection", collection_id.as_ref()],
        bump,
        space = 8 + Collection::INIT_SPACE,
    )]
    pub collection: Account<'info, Collection>,
    #[account(
        init,
        payer = owner,
        seeds = [b"ctoken-mint", collection_id.as_ref()],
        bump,
        mint::decimals = CTOKEN_DECIMALS,
        mint::authority = vault_authority,
    )]
    pub ctoken_mint: Account<'info, Mint>,
    #[account(
        init,
        payer = owner,
        seeds = [b"ctoken-vault", collection_id.as_ref()],
        bump,
        token::mint = ctoken_mint,
        token::authority = vault_authority,
    )]
    pub ctoken_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
