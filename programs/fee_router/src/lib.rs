use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("4ZELpSDe9sMxmQT7oG3GH4JbDSwPsbb84jJeRACmLJTU");

#[program]
pub mod fee_router {
    use super::*;

    pub fn initialize_router(
        ctx: Context<InitializeRouter>,
        default_fee: u32,
        beneficiary: Pubkey,
    ) -> Result<()> {
        instructions::initialize_router::handler(ctx, default_fee, beneficiary)
    }

    pub fn set_default_fee(ctx: Context<SetDefaultFee>, fee: u32) -> Result<()> {
        instructions::set_default_fee::handler(ctx, fee)
    }

    pub fn set_pair_fee(ctx: Context<SetPairFee>, fee: Option<u32>) -> Result<()> {
        instructions::set_pair_fee::handler(ctx, fee)
    }

    pub fn set_fee_exemption(
        ctx: Context<SetFeeExemption>,
        counterparty: Pubkey,
        fee: u32,
    ) -> Result<()> {
        instructions::set_fee_exemption::handler(ctx, counterparty, fee)
    }

    pub fn remove_fee_exemption(ctx: Context<RemoveFeeExemption>) -> Result<()> {
        instructions::remove_fee_exemption::handler(ctx)
    }

    pub fn init_beneficiary_fees(
        ctx: Context<InitBeneficiaryFees>,
        beneficiary: Pubkey,
    ) -> Result<()> {
        instructions::init_beneficiary_fees::handler(ctx, beneficiary)
    }

    pub fn set_beneficiary(ctx: Context<SetBeneficiary>, beneficiary: Pubkey) -> Result<()> {
        instructions::set_beneficiary::handler(ctx, beneficiary)
    }

    pub fn create_pair(ctx: Context<CreatePair>) -> Result<()> {
        instructions::create_pair::handler(ctx)
    }

    pub fn deposit_fees(
        ctx: Context<DepositFees>,
        amount_ctoken: u64,
        amount_settlement: u64,
    ) -> Result<()> {
        instructions::deposit_fees::handler(ctx, amount_ctoken, amount_settlement)
    }

    pub fn distribute_fees(ctx: Context<DistributeFees>) -> Result<()> {
        instructions::distribute_fees::handler(ctx)
    }

    pub fn swap<'info>(
        ctx: Context<'_, '_, '_, 'info, Swap<'info>>,
        side: SwapSide,
        kind: SwapKind,
        amount: u64,
        other_amount_threshold: u64,
        sqrt_price_limit: u128,
    ) -> Result<()> {
        instructions::swap::handler(
            ctx,
            side,
            kind,
            amount,
            other_amount_threshold,
            sqrt_price_limit,
        )
    }

    pub fn claim_fees(ctx: Context<ClaimFees>) -> Result<()> {
        instructions::claim_fees::handler(ctx)
    }
}
