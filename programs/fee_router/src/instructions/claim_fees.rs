use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    error::ErrorCode,
    events::FeesClaimed,
    helpers::require_not_paused,
    state::{BeneficiaryFees, FeeConfig},
};

pub fn handler(ctx: Context<ClaimFees>) -> Result<()> {
    require_not_paused(&ctx.accounts.registry_global_config)?;
    let amount = ctx.accounts.beneficiary_fees.take_all()?;
    require!(
        amount <= ctx.accounts.settlement_vault.amount,
        ErrorCode::InsufficientVaultBalance
    );

    let signer_seed_group: &[&[u8]] = &[
        b"router-authority",
        &[ctx.accounts.fee_config.router_authority_bump],
    ];
    let cpi_accounts = Transfer {
        from: ctx.accounts.settlement_vault.to_account_info(),
        to: ctx.accounts.recipient_token_account.to_account_info(),
        authority: ctx.accounts.router_authority.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            &[signer_seed_group],
        ),
        amount,
    )?;

    emit!(FeesClaimed {
        beneficiary: ctx.accounts.beneficiary.key(),
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ClaimFees<'info> {
    pub beneficiary: Signer<'info>,
    #[account(
        seeds = [b"fee-config"],
        bump = fee_config.bump,
    )]
    pub fee_config: Account<'info, FeeConfig>,
    #[account(address = fee_config.registry_global_config)]
    pub registry_global_config: Account<'info, collection_registry::GlobalConfig>,
    #[account(
        mut,
        seeds = [b"beneficiary-fees", beneficiary.key().as_ref()],
        bump = beneficiary_fees.bump,
    )]
    pub beneficiary_fees: Account<'info, BeneficiaryFees>,
    /// CHECK: PDA authority for router vaults.
    #[account(seeds = [b"router-authority"], bump = fee_config.router_authority_bump)]
    pub router_authority: UncheckedAccount<'info>,
    #[account(mut, address = fee_config.settlement_vault)]
    pub settlement_vault: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = recipient_token_account.mint == fee_config.settlement_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
