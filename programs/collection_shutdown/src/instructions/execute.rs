use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use collection_registry::program::CollectionRegistry;
use liquidation_pool::program::LiquidationPool as LiquidationPoolProgram;

use crate::{
    error::ErrorCode,
    events::ShutdownExecuted,
    helpers::{find_asset_record, require_not_paused, require_owner},
    state::{CollectionShutdown, LiquidationPoolBinding, ShutdownConfig},
};

/// Retires the collection and hands its remaining assets to a fresh
/// liquidation pool.
pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, Execute<'info>>,
    asset_ids: Vec<u64>,
) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.shutdown_config)?;
    require_not_paused(&ctx.accounts.registry_global_config)?;
    require!(
        !ctx.accounts.collection.has_open_listings(),
        ErrorCode::ListingsOpen
    );

    let collection_id = ctx.accounts.collection.collection_id;
    let pool_key = ctx.accounts.pool.key();
    let supply = ctx.accounts.ctoken_mint.supply;
    let asset_count = u32::try_from(asset_ids.len()).map_err(|_| error!(ErrorCode::TooManyAssets))?;

    {
        let record = &mut ctx.accounts.collection_shutdown;
        record.lock()?;
        record.begin_execution(supply, asset_ids.clone(), pool_key)?;
    }
    // persist the lock so a nested entry observes it
    ctx.accounts.collection_shutdown.exit(&crate::ID)?;

    let signer_seeds: &[&[u8]] = &[
        b"shutdown-authority",
        &[ctx.accounts.shutdown_config.shutdown_authority_bump],
    ];

    collection_registry::cpi::retire_collection(CpiContext::new_with_signer(
        ctx.accounts.registry_program.to_account_info(),
        collection_registry::cpi::accounts::RetireCollection {
            shutdown_authority: ctx.accounts.shutdown_authority.to_account_info(),
            global_config: ctx.accounts.registry_global_config.to_account_info(),
            collection: ctx.accounts.collection.to_account_info(),
            vault_authority: ctx.accounts.vault_authority.to_account_info(),
            ctoken_mint: ctx.accounts.ctoken_mint.to_account_info(),
            ctoken_vault: ctx.accounts.ctoken_vault.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
        },
        &[signer_seeds],
    ))?;

    liquidation_pool::cpi::create_pool(
        CpiContext::new_with_signer(
            ctx.accounts.liquidation_program.to_account_info(),
            liquidation_pool::cpi::accounts::CreatePool {
                payer: ctx.accounts.owner.to_account_info(),
                owner: ctx.accounts.shutdown_authority.to_account_info(),
                global_config: ctx.accounts.registry_global_config.to_account_info(),
                pool: ctx.accounts.pool.to_account_info(),
                settlement_mint: ctx.accounts.settlement_mint.to_account_info(),
                proceeds_account: ctx.accounts.claim_vault.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
            },
            &[signer_seeds],
        ),
        collection_id,
        asset_count,
        ctx.accounts.shutdown_config.liquidation_start_price,
        ctx.accounts.shutdown_config.liquidation_duration_secs,
    )?;

    for token_id in &asset_ids {
        let asset_record = find_asset_record(ctx.remaining_accounts, &collection_id, *token_id)?;
        collection_registry::cpi::withdraw_asset(
            CpiContext::new_with_signer(
                ctx.accounts.registry_program.to_account_info(),
                collection_registry::cpi::accounts::WithdrawAsset {
                    shutdown_authority: ctx.accounts.shutdown_authority.to_account_info(),
                    global_config: ctx.accounts.registry_global_config.to_account_info(),
                    collection: ctx.accounts.collection.to_account_info(),
                    asset_record: asset_record.clone(),
                },
                &[signer_seeds],
            ),
            pool_key,
        )?;
    }

    let binding = &mut ctx.accounts.pool_binding;
    binding.pool = pool_key;
    binding.collection_id = collection_id;
    binding.bump = ctx.bumps.pool_binding;

    msg!(
        "shutdown executed for {}: pool={} assets={}",
        collection_id,
        pool_key,
        asset_count
    );
    emit!(ShutdownExecuted {
        collection_id,
        pool: pool_key,
        asset_ids,
    });

    ctx.accounts.collection_shutdown.unlock();
    Ok(())
}

#[derive(Accounts)]
pub struct Execute<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(
        seeds = [b"shutdown-config"],
        bump = shutdown_config.bump,
    )]
    pub shutdown_config: Box<Account<'info, ShutdownConfig>>,
    #[account(address = shutdown_config.registry_global_config)]
    pub registry_global_config: Box<Account<'info, collection_registry::GlobalConfig>>,
    #[account(
        mut,
        constraint = collection.collection_id == collection_shutdown.collection_id @ ErrorCode::CollectionMismatch,
    )]
    pub collection: Box<Account<'info, collection_registry::Collection>>,
    #[account(
        mut,
        seeds = [b"collection-shutdown", collection_shutdown.collection_id.as_ref()],
        bump = collection_shutdown.bump,
    )]
    pub collection_shutdown: Box<Account<'info, CollectionShutdown>>,
    #[account(mut, address = collection_shutdown.ctoken_mint)]
    pub ctoken_mint: Box<Account<'info, Mint>>,
    #[account(mut, address = collection.ctoken_vault)]
    pub ctoken_vault: Box<Account<'info, TokenAccount>>,
    /// CHECK: registry vault authority, verified by the registry.
    pub vault_authority: UncheckedAccount<'info>,
    /// CHECK: PDA signing registry and liquidation pool calls.
    #[account(seeds = [b"shutdown-authority"], bump = shutdown_config.shutdown_authority_bump)]
    pub shutdown_authority: UncheckedAccount<'info>,
    /// CHECK: created by the liquidation pool program.
    #[account(
        mut,
        seeds = [b"liquidation-pool", collection_shutdown.collection_id.as_ref()],
        bump,
        seeds::program = liquidation_pool::ID,
    )]
    pub pool: UncheckedAccount<'info>,
    #[account(address = shutdown_config.settlement_mint)]
    pub settlement_mint: Box<Account<'info, Mint>>,
    #[account(address = shutdown_config.claim_vault)]
    pub claim_vault: Box<Account<'info, TokenAccount>>,
    #[account(
        init,
        payer = owner,
        seeds = [b"pool-binding", pool.key().as_ref()],
        bump,
        space = 8 + LiquidationPoolBinding::INIT_SPACE,
    )]
    pub pool_binding: Box<Account<'info, LiquidationPoolBinding>>,
    pub registry_program: Program<'info, CollectionRegistry>,
    pub liquidation_program: Program<'info, LiquidationPoolProgram>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
