use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    error::ErrorCode,
    events::PairCreated,
    helpers::{read_market_pool, require_owner},
    state::{canonical_order, ClaimableFees, FeeConfig, Pair},
};

pub fn handler(ctx: Context<CreatePair>) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.fee_config)?;
    require!(
        ctx.accounts.collection.is_active(),
        ErrorCode::CollectionNotActive
    );

    let ctoken_mint = ctx.accounts.ctoken_mint.key();
    let settlement_mint = ctx.accounts.settlement_mint.key();
    let (currency0, currency1) = canonical_order(ctoken_mint, settlement_mint);

    let pool = read_market_pool(
        &ctx.accounts.market_pool,
        &ctx.accounts.fee_config.market_program,
    )?;
    require!(
        pool.mint_a == currency0 && pool.mint_b == currency1,
        ErrorCode::InvalidPairMints
    );

    let pair = &mut ctx.accounts.pair;
    pair.collection_id = ctx.accounts.collection.collection_id;
    pair.ctoken_mint = ctoken_mint;
    pair.settlement_mint = settlement_mint;
    pair.currency0 = currency0;
    pair.currency1 = currency1;
    pair.ctoken_is_currency0 = currency0 == ctoken_mint;
    pair.market_pool = ctx.accounts.market_pool.key();
    pair.fee = None;
    pair.claimable = ClaimableFees::default();
    pair.ctoken_fee_vault = ctx.accounts.ctoken_fee_vault.key();
    pair.locked = false;
    pair.fees_taken = 0;
    pair.fees_burned = 0;
    pair.bump = ctx.bumps.pair;

    emit!(PairCreated {
        pair: pair.key(),
        collection_id: pair.collection_id,
        currency0,
        currency1,
        market_pool: pair.market_pool,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct CreatePair<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(
        seeds = [b"fee-config"],
        bump = fee_config.bump,
    )]
    pub fee_config: Account<'info, FeeConfig>,
    pub collection: Account<'info, collection_registry::Collection>,
    #[account(address = collection.ctoken_mint)]
    pub ctoken_mint: Account<'info, Mint>,
    #[account(address = fee_config.settlement_mint)]
    pub settlement_mint: Account<'info, Mint>,
    /// CHECK: owner, discriminator and mints are checked when read.
    pub market_pool: UncheckedAccount<'info>,
    #[account(
        init,
        payer = owner,
        seeds = [b"pair", collection.collection_id.as_ref()],
        bump,
        space = 8 + Pair::INIT_SPACE,
    )]
    pub pair: Account<'info, Pair>,
    /// CHECK: PDA authority for router vaults.
    #[account(seeds = [b"router-authority"], bump = fee_config.router_authority_bump)]
    pub router_authority: UncheckedAccount<'info>,
    #[account(
        init,
        payer = owner,
        seeds = [b"pair-fee-vault", pair.key().as_ref()],
        bump,
        token::mint = ctoken_mint,
        token::authority = router_authority,
    )]
    pub ctoken_fee_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
