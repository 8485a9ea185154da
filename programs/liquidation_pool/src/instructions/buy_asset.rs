use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use collection_registry::program::CollectionRegistry;

use crate::{error::ErrorCode, events::TokenLiquidated, state::LiquidationPool};

pub fn handler(ctx: Context<BuyAsset>, max_price: u64) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    require!(
        ctx.accounts.asset_record.is_held_by(&pool_key),
        ErrorCode::AssetNotInPool
    );

    let now = Clock::get()?.unix_timestamp;
    let price = ctx.accounts.pool.current_price(now)?;
    require!(price <= max_price, ErrorCode::PriceAboveLimit);

    if price > 0 {
        let cpi_accounts = Transfer {
            from: ctx.accounts.buyer_token_account.to_account_info(),
            to: ctx.accounts.proceeds_account.to_account_info(),
            authority: ctx.accounts.buyer.to_account_info(),
        };
        token::transfer(
            CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts),
            price,
        )?;
    }

    let collection_id = ctx.accounts.pool.collection_id;
    let signer_seed_group: &[&[u8]] = &[
        b"liquidation-pool",
        collection_id.as_ref(),
        &[ctx.accounts.pool.bump],
    ];
    collection_registry::cpi::transfer_asset(
        CpiContext::new_with_signer(
            ctx.accounts.registry_program.to_account_info(),
            collection_registry::cpi::accounts::TransferAsset {
                holder: ctx.accounts.pool.to_account_info(),
                asset_record: ctx.accounts.asset_record.to_account_info(),
            },
            &[signer_seed_group],
        ),
        ctx.accounts.buyer.key(),
    )?;

    ctx.accounts.pool.record_sale(price)?;

    emit!(TokenLiquidated {
        pool: pool_key,
        collection_id,
        token_id: ctx.accounts.asset_record.token_id,
        buyer: ctx.accounts.buyer.key(),
        price,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct BuyAsset<'info> {
    pub buyer: Signer<'info>,
    #[account(
        mut,
        seeds = [b"liquidation-pool", pool.collection_id.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, LiquidationPool>,
    #[account(
        mut,
        constraint = asset_record.collection_id == pool.collection_id @ ErrorCode::AssetNotInPool,
    )]
    pub asset_record: Account<'info, collection_registry::AssetRecord>,
    #[account(
        mut,
        constraint = buyer_token_account.mint == pool.settlement_mint @ ErrorCode::InvalidTokenAccount,
        constraint = buyer_token_account.owner == buyer.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,
    #[account(mut, address = pool.proceeds_account)]
    pub proceeds_account: Account<'info, TokenAccount>,
    pub registry_program: Program<'info, CollectionRegistry>,
    pub token_program: Program<'info, Token>,
}
