use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    error::ErrorCode,
    events::FeesDeposited,
    helpers::{require_active, require_not_paused},
    state::{FeeConfig, Pair},
};

pub fn handler(ctx: Context<DepositFees>, amount_ctoken: u64, amount_settlement: u64) -> Result<()> {
    require!(
        amount_ctoken > 0 || amount_settlement > 0,
        ErrorCode::InvalidAmount
    );
    require_not_paused(&ctx.accounts.registry_global_config)?;
    require_active(&ctx.accounts.collection)?;
    ctx.accounts.pair.lock()?;

    let token_program = ctx.accounts.token_program.to_account_info();
    let depositor = ctx.accounts.depositor.to_account_info();
    if amount_ctoken > 0 {
        token::transfer(
            CpiContext::new(
                token_program.clone(),
                Transfer {
                    from: ctx.accounts.depositor_ctoken.to_account_info(),
                    to: ctx.accounts.ctoken_fee_vault.to_account_info(),
                    authority: depositor.clone(),
                },
            ),
            amount_ctoken,
        )?;
    }
    if amount_settlement > 0 {
        token::transfer(
            CpiContext::new(
                token_program,
                Transfer {
                    from: ctx.accounts.depositor_settlement.to_account_info(),
                    to: ctx.accounts.settlement_vault.to_account_info(),
                    authority: depositor,
                },
            ),
            amount_settlement,
        )?;
    }

    let pair = &mut ctx.accounts.pair;
    pair.deposit(amount_ctoken, amount_settlement)?;
    pair.unlock();

    emit!(FeesDeposited {
        pair: pair.key(),
        ctoken_amount: amount_ctoken,
        settlement_amount: amount_settlement,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct DepositFees<'info> {
    pub depositor: Signer<'info>,
    #[account(
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
        seeds = [b"collection", pair.collection_id.as_ref()],
        bump = collection.bump,
        seeds::program = collection_registry::ID,
    )]
    pub collection: Account<'info, collection_registry::Collection>,
    #[account(
        mut,
        constraint = depositor_ctoken.mint == pair.ctoken_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub depositor_ctoken: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = depositor_settlement.mint == pair.settlement_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub depositor_settlement: Account<'info, TokenAccount>,
    #[account(mut, address = pair.ctoken_fee_vault)]
    pub ctoken_fee_vault: Account<'info, TokenAccount>,
    #[account(mut, address = fee_config.settlement_vault)]
    pub settlement_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
