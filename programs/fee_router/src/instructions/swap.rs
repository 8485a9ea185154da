use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount, Transfer};

use crate::{
    error::ErrorCode,
    events::{AmmFeesTaken, ExternalSwapSettled, PoolFeesSwapped},
    helpers::{
        amm_fee_for_fill, forward_to_market, load_fee_exemption, plan_buy, read_market_pool,
        reconcile_market_fill, require_active, require_not_paused, resolve_fee, settle_fill,
        AmmFee, FeeAsset, InternalFill, InternalSettlement, MarketOrder, PairPrice, SwapPlan,
    },
    state::{BeneficiaryFees, FeeConfig, Pair, SwapKind, SwapSide},
};

/// Routes a trade through the pair's fee inventory first and forwards the
/// remainder to the external market. Market accounts for the forwarded leg
/// are passed as remaining accounts, in the market's own swap order.
pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, Swap<'info>>,
    side: SwapSide,
    kind: SwapKind,
    amount: u64,
    other_amount_threshold: u64,
    sqrt_price_limit: u128,
) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require_not_paused(&ctx.accounts.registry_global_config)?;
    require_active(&ctx.accounts.collection)?;
    let exemption = load_fee_exemption(&ctx.accounts.fee_exemption, &ctx.accounts.trader.key())?;
    ctx.accounts.pair.lock()?;

    let fee_rate = resolve_fee(
        exemption.as_ref(),
        ctx.accounts.pair.fee,
        ctx.accounts.fee_config.default_fee,
    );

    let inventory = ctx.accounts.pair.ctoken_inventory();
    let plan = match side {
        SwapSide::Buy if inventory > 0 => {
            let pool = read_market_pool(
                &ctx.accounts.market_pool,
                &ctx.accounts.fee_config.market_program,
            )?;
            let price = PairPrice::from_sqrt_price(
                pool.sqrt_price_x64,
                ctx.accounts.pair.ctoken_is_currency0,
            )?;
            plan_buy(kind, amount, inventory, &price)?
        }
        _ => SwapPlan::passthrough(amount),
    };

    let internal = if plan.internal.is_empty() {
        InternalSettlement::default()
    } else {
        let fee = amm_fee_for_fill(kind, &plan.internal, fee_rate)?;
        settle_internal_leg(ctx.accounts, &plan.internal, fee)?
    };

    let mut total_in = internal.trader_pays;
    let mut total_out = internal.trader_receives;

    if plan.forwarded > 0 {
        let threshold = match kind {
            SwapKind::ExactInput => other_amount_threshold.saturating_sub(total_out),
            SwapKind::ExactOutput => other_amount_threshold
                .checked_sub(total_in)
                .ok_or_else(|| error!(ErrorCode::SlippageExceeded))?,
        };
        let buy_is_a_to_b = ctx.accounts.pair.buy_is_a_to_b();
        let order = MarketOrder {
            kind,
            amount: plan.forwarded,
            other_amount_threshold: threshold,
            sqrt_price_limit,
            a_to_b: match side {
                SwapSide::Buy => buy_is_a_to_b,
                SwapSide::Sell => !buy_is_a_to_b,
            },
        };

        let (input_before, output_before) = trader_balances(ctx.accounts, side)?;
        // persist the lock so a nested entry observes it
        ctx.accounts.pair.exit(&crate::ID)?;
        let market_program = ctx.accounts.market_program.to_account_info();
        forward_to_market(
            &market_program,
            &ctx.accounts.pair.market_pool,
            ctx.remaining_accounts,
            &order,
        )?;
        let (input_after, output_after) = trader_balances(ctx.accounts, side)?;

        let input_spent = input_before
            .checked_sub(input_after)
            .ok_or_else(|| error!(ErrorCode::MarketSettlementMismatch))?;
        let output_received = output_after
            .checked_sub(output_before)
            .ok_or_else(|| error!(ErrorCode::MarketSettlementMismatch))?;
        reconcile_market_fill(&order, input_spent, output_received)?;

        total_in = total_in
            .checked_add(input_spent)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        total_out = total_out
            .checked_add(output_received)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

        emit!(ExternalSwapSettled {
            pair: ctx.accounts.pair.key(),
            trader: ctx.accounts.trader.key(),
            input_spent,
            output_received,
        });
    }

    match kind {
        SwapKind::ExactInput => require!(
            total_out >= other_amount_threshold,
            ErrorCode::SlippageExceeded
        ),
        SwapKind::ExactOutput => require!(
            total_in <= other_amount_threshold,
            ErrorCode::SlippageExceeded
        ),
    }

    ctx.accounts.pair.unlock();
    Ok(())
}

fn settle_internal_leg(
    accounts: &mut Swap<'_>,
    fill: &InternalFill,
    fee: Option<AmmFee>,
) -> Result<InternalSettlement> {
    let settled = settle_fill(fill, fee)?;
    let token_program = accounts.token_program.to_account_info();

    token::transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: accounts.trader_settlement.to_account_info(),
                to: accounts.settlement_vault.to_account_info(),
                authority: accounts.trader.to_account_info(),
            },
        ),
        settled.trader_pays,
    )?;

    let signer_seed_group: &[&[u8]] = &[
        b"router-authority",
        &[accounts.fee_config.router_authority_bump],
    ];
    if settled.trader_receives > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                token_program.clone(),
                Transfer {
                    from: accounts.ctoken_fee_vault.to_account_info(),
                    to: accounts.trader_ctoken.to_account_info(),
                    authority: accounts.router_authority.to_account_info(),
                },
                &[signer_seed_group],
            ),
            settled.trader_receives,
        )?;
    }
    if settled.burned > 0 {
        token::burn(
            CpiContext::new_with_signer(
                token_program,
                Burn {
                    mint: accounts.ctoken_mint.to_account_info(),
                    from: accounts.ctoken_fee_vault.to_account_info(),
                    authority: accounts.router_authority.to_account_info(),
                },
                &[signer_seed_group],
            ),
            settled.burned,
        )?;
    }

    let pair = &mut accounts.pair;
    pair.apply_internal_fill(fill)?;
    pair.fees_burned = pair
        .fees_burned
        .checked_add(settled.burned)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    pair.fees_taken = pair
        .fees_taken
        .checked_add(settled.credited)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    let fee_config = &mut accounts.fee_config;
    fee_config.total_fees_burned = fee_config
        .total_fees_burned
        .checked_add(settled.burned)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    fee_config.total_fees_taken = fee_config
        .total_fees_taken
        .checked_add(settled.credited)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    accounts.beneficiary_fees.credit(settled.credited)?;

    let pair_key = pair.key();
    emit!(PoolFeesSwapped {
        pair: pair_key,
        trader: accounts.trader.key(),
        ctoken_out: fill.ctoken,
        settlement_in: fill.settlement,
    });
    if let Some(fee) = fee {
        emit!(AmmFeesTaken {
            pair: pair_key,
            beneficiary: fee_config.beneficiary,
            mint: match fee.asset {
                FeeAsset::CollectionToken => pair.ctoken_mint,
                FeeAsset::Settlement => pair.settlement_mint,
            },
            amount: fee.amount,
            burned: fee.asset == FeeAsset::CollectionToken,
        });
    }

    Ok(settled)
}

/// Reloads the trader's token accounts and returns (input, output) balances
/// for the trade direction.
fn trader_balances(accounts: &mut Swap<'_>, side: SwapSide) -> Result<(u64, u64)> {
    accounts.trader_ctoken.reload()?;
    accounts.trader_settlement.reload()?;
    Ok(match side {
        SwapSide::Buy => (accounts.trader_settlement.amount, accounts.trader_ctoken.amount),
        SwapSide::Sell => (accounts.trader_ctoken.amount, accounts.trader_settlement.amount),
    })
}

#[derive(Accounts)]
pub struct Swap<'info> {
    pub trader: Signer<'info>,
    #[account(
        mut,
        seeds = [b"fee-config"],
        bump = fee_config.bump,
    )]
    pub fee_config: Box<Account<'info, FeeConfig>>,
    #[account(address = fee_config.registry_global_config)]
    pub registry_global_config: Box<Account<'info, collection_registry::GlobalConfig>>,
    #[account(
        mut,
        seeds = [b"pair", pair.collection_id.as_ref()],
        bump = pair.bump,
    )]
    pub pair: Box<Account<'info, Pair>>,
    #[account(
        seeds = [b"collection", pair.collection_id.as_ref()],
        bump = collection.bump,
        seeds::program = collection_registry::ID,
    )]
    pub collection: Box<Account<'info, collection_registry::Collection>>,
    /// CHECK: the trader's exemption address; empty when no exemption was
    /// ever set.
    #[account(seeds = [b"fee-exemption", trader.key().as_ref()], bump)]
    pub fee_exemption: UncheckedAccount<'info>,
    #[account(
        mut,
        seeds = [b"beneficiary-fees", fee_config.beneficiary.as_ref()],
        bump = beneficiary_fees.bump,
    )]
    pub beneficiary_fees: Box<Account<'info, BeneficiaryFees>>,
    /// CHECK: PDA authority for router vaults.
    #[account(seeds = [b"router-authority"], bump = fee_config.router_authority_bump)]
    pub router_authority: UncheckedAccount<'info>,
    #[account(mut, address = pair.ctoken_mint)]
    pub ctoken_mint: Box<Account<'info, Mint>>,
    #[account(mut, address = pair.ctoken_fee_vault)]
    pub ctoken_fee_vault: Box<Account<'info, TokenAccount>>,
    #[account(mut, address = fee_config.settlement_vault)]
    pub settlement_vault: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = trader_ctoken.mint == pair.ctoken_mint @ ErrorCode::InvalidTokenAccount,
        constraint = trader_ctoken.owner == trader.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub trader_ctoken: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = trader_settlement.mint == pair.settlement_mint @ ErrorCode::InvalidTokenAccount,
        constraint = trader_settlement.owner == trader.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub trader_settlement: Box<Account<'info, TokenAccount>>,
    /// CHECK: pinned to the configured market program.
    #[account(address = fee_config.market_program)]
    pub market_program: UncheckedAccount<'info>,
    /// CHECK: pinned to the pair's market pool; parsed when read.
    #[account(address = pair.market_pool)]
    pub market_pool: UncheckedAccount<'info>,
    pub token_program: Program<'info, Token>,
}
