use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount, Transfer};

/// Moves a holder's tokens into the collection escrow.
pub fn escrow_tokens<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    escrow: &Account<'info, TokenAccount>,
    holder: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new(
            token_program.to_account_info(),
            Transfer {
                from: from.to_account_info(),
                to: escrow.to_account_info(),
                authority: holder.to_account_info(),
            },
        ),
        amount,
    )
}

pub fn release_escrow<'info>(
    token_program: &Program<'info, Token>,
    escrow: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    authority: &UncheckedAccount<'info>,
    authority_bump: u8,
    amount: u64,
) -> Result<()> {
    let seeds: &[&[u8]] = &[b"shutdown-authority", &[authority_bump]];
    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: escrow.to_account_info(),
                to: to.to_account_info(),
                authority: authority.to_account_info(),
            },
            &[seeds],
        ),
        amount,
    )
}

pub fn burn_escrow<'info>(
    token_program: &Program<'info, Token>,
    mint: &Account<'info, Mint>,
    escrow: &Account<'info, TokenAccount>,
    authority: &UncheckedAccount<'info>,
    authority_bump: u8,
    amount: u64,
) -> Result<()> {
    let seeds: &[&[u8]] = &[b"shutdown-authority", &[authority_bump]];
    token::burn(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Burn {
                mint: mint.to_account_info(),
                from: escrow.to_account_info(),
                authority: authority.to_account_info(),
            },
            &[seeds],
        ),
        amount,
    )
}

/// Pays a claim out of the claim vault.
pub fn pay_claim<'info>(
    token_program: &Program<'info, Token>,
    claim_vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    authority: &UncheckedAccount<'info>,
    authority_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let seeds: &[&[u8]] = &[b"shutdown-authority", &[authority_bump]];
    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: claim_vault.to_account_info(),
                to: to.to_account_info(),
                authority: authority.to_account_info(),
            },
            &[seeds],
        ),
        amount,
    )
}

/// Burns tokens straight from a holder's own account.
pub fn burn_from_holder<'info>(
    token_program: &Program<'info, Token>,
    mint: &Account<'info, Mint>,
    from: &Account<'info, TokenAccount>,
    holder: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    token::burn(
        CpiContext::new(
            token_program.to_account_info(),
            Burn {
                mint: mint.to_account_info(),
                from: from.to_account_info(),
                authority: holder.to_account_info(),
            },
        ),
        amount,
    )
}
