use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{error::ErrorCode, helpers::validate_fee, state::FeeConfig};

pub fn handler(ctx: Context<InitializeRouter>, default_fee: u32, beneficiary: Pubkey) -> Result<()> {
    validate_fee(default_fee)?;
    require!(
        ctx.accounts.market_program.executable,
        ErrorCode::InvalidMarketAccount
    );

    let fee_config = &mut ctx.accounts.fee_config;
    fee_config.owner = ctx.accounts.owner.key();
    fee_config.settlement_mint = ctx.accounts.settlement_mint.key();
    fee_config.settlement_vault = ctx.accounts.settlement_vault.key();
    fee_config.registry_global_config = ctx.accounts.registry_global_config.key();
    fee_config.market_program = ctx.accounts.market_program.key();
    fee_config.default_fee = default_fee;
    fee_config.beneficiary = beneficiary;
    fee_config.total_fees_taken = 0;
    fee_config.total_fees_burned = 0;
    fee_config.total_fees_distributed = 0;
    fee_config.router_authority_bump = ctx.bumps.router_authority;
    fee_config.bump = ctx.bumps.fee_config;

    msg!(
        "fee router initialized: default_fee={}, market_program={}",
        default_fee,
        fee_config.market_program
    );
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRouter<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    pub registry_global_config: Account<'info, collection_registry::GlobalConfig>,
    pub settlement_mint: Account<'info, Mint>,
    /// CHECK: external market program id pinned into the router config.
    pub market_program: UncheckedAccount<'info>,
    #[account(
        init,
        payer = owner,
        seeds = [b"fee-config"],
        bump,
        space = 8 + FeeConfig::INIT_SPACE,
    )]
    pub fee_config: Account<'info, FeeConfig>,
    /// CHECK: PDA authority for router vaults.
    #[account(seeds = [b"router-authority"], bump)]
    pub router_authority: UncheckedAccount<'info>,
    #[account(
        init,
        payer = owner,
        seeds = [b"settlement-vault"],
        bump,
        token::mint = settlement_mint,
        token::authority = router_authority,
    )]
    pub settlement_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
