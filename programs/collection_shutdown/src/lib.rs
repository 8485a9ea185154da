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

declare_id!("6GJW3sHcJQ8CkY85cRvmL4z6yeabfrwLFuQRgKLjo5oN");

#[program]
pub mod collection_shutdown {
    use super::*;

    pub fn initialize_shutdown(
        ctx: Context<InitializeShutdown>,
        params: ShutdownConfigParams,
    ) -> Result<()> {
        instructions::initialize_shutdown::handler(ctx, params)
    }

    pub fn configure_shutdown(
        ctx: Context<ConfigureShutdown>,
        params: ShutdownConfigParams,
    ) -> Result<()> {
        instructions::configure_shutdown::handler(ctx, params)
    }

    pub fn prevent_shutdown(ctx: Context<PreventShutdown>, prevented: bool) -> Result<()> {
        instructions::prevent_shutdown::handler(ctx, prevented)
    }

    pub fn start(ctx: Context<Start>) -> Result<()> {
        instructions::start::handler(ctx)
    }

    pub fn vote(ctx: Context<Vote>) -> Result<()> {
        instructions::vote::handler(ctx)
    }

    pub fn reclaim_vote(ctx: Context<ReclaimVote>) -> Result<()> {
        instructions::reclaim_vote::handler(ctx)
    }

    pub fn cancel(ctx: Context<Cancel>) -> Result<()> {
        instructions::cancel::handler(ctx)
    }

    pub fn execute<'info>(
        ctx: Context<'_, '_, '_, 'info, Execute<'info>>,
        asset_ids: Vec<u64>,
    ) -> Result<()> {
        instructions::execute::handler(ctx, asset_ids)
    }

    pub fn record_proceeds(ctx: Context<RecordProceeds>) -> Result<()> {
        instructions::record_proceeds::handler(ctx)
    }

    pub fn claim<'info>(ctx: Context<'_, '_, '_, 'info, Claim<'info>>) -> Result<()> {
        instructions::claim::handler(ctx)
    }

    pub fn vote_and_claim<'info>(
        ctx: Context<'_, '_, '_, 'info, VoteAndClaim<'info>>,
    ) -> Result<()> {
        instructions::vote_and_claim::handler(ctx)
    }
}
