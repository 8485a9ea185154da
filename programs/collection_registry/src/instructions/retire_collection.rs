use anchor_lang::prelude::*;
use anchor_spl::token::{burn, Burn, Mint, Token, TokenAccount};

use crate::{
    error::ErrorCode,
    events::CollectionRetired,
    state::{Collection, CollectionStatus, GlobalConfig},
};

/// Permanently closes a collection to deposits and trading and burns the
/// balance the vault still holds.
pub fn handler(ctx: Context<RetireCollection>) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.shutdown_authority.key(),
        ctx.accounts.global_config.shutdown_authority,
        ErrorCode::Unauthorized
    );
    require!(
        ctx.accounts.collection.is_active(),
        ErrorCode::CollectionAlreadyRetired
    );

    let held = ctx.accounts.ctoken_vault.amount;
    if held > 0 {
        let signer_seeds: &[&[u8]] = &[
            b"vault-authority",
            &[ctx.accounts.global_config.vault_authority_bump],
        ];
        burn(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Burn {
                    mint: ctx.accounts.ctoken_mint.to_account_info(),
                    from: ctx.accounts.ctoken_vault.to_account_info(),
                    authority: ctx.accounts.vault_authority.to_account_info(),
                },
                &[signer_seeds],
            ),
            held,
        )?;
    }

    let collection = &mut ctx.accounts.collection;
    collection.status = CollectionStatus::Retired;

    msg!("collection {} retired", collection.collection_id);
    emit!(CollectionRetired {
        collection_id: collection.collection_id,
        burned: held,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RetireCollection<'info> {
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
    /// CHECK: vault authority PDA.
    #[account(seeds = [b"vault-authority"], bump = global_config.vault_authority_bump)]
    pub vault_authority: UncheckedAccount<'info>,
    #[account(mut, address = collection.ctoken_mint)]
    pub ctoken_mint: Account<'info, Mint>,
    #[account(mut, address = collection.ctoken_vault)]
    pub ctoken_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
