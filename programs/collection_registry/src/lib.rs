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

declare_id!("9CFw7jjAwfbdQshCS5ckN9H7KAAi9Dy72F856vo7PcvZ");

#[program]
pub mod collection_registry {
    use super::*;

    pub fn initialize_global(
        ctx: Context<InitializeGlobal>,
        shutdown_authority: Pubkey,
        listings_authority: Pubkey,
        paused: bool,
    ) -> Result<()> {
        instructions::initialize_global::handler(ctx, shutdown_authority, listings_authority, paused)
    }

    pub fn set_global_pause(ctx: Context<SetGlobalPause>, paused: bool) -> Result<()> {
        instructions::set_global_pause::handler(ctx, paused)
    }

    pub fn set_authorities(
        ctx: Context<SetAuthorities>,
        shutdown_authority: Pubkey,
        listings_authority: Pubkey,
    ) -> Result<()> {
        instructions::set_authorities::handler(ctx, shutdown_authority, listings_authority)
    }

    pub fn register_collection(
        ctx: Context<RegisterCollection>,
        collection_id: Pubkey,
        denomination: u8,
    ) -> Result<()> {
        instructions::register_collection::handler(ctx, collection_id, denomination)
    }

    pub fn deposit_asset(ctx: Context<DepositAsset>, token_id: u64) -> Result<()> {
        instructions::deposit_asset::handler(ctx, token_id)
    }

    pub fn set_listing_state(
        ctx: Context<SetListingState>,
        listed: bool,
        protected: bool,
    ) -> Result<()> {
        instructions::set_listing_state::handler(ctx, listed, protected)
    }

    pub fn withdraw_asset(ctx: Context<WithdrawAsset>, recipient: Pubkey) -> Result<()> {
        instructions::withdraw_asset::handler(ctx, recipient)
    }

    pub fn transfer_asset(ctx: Context<TransferAsset>, new_holder: Pubkey) -> Result<()> {
        instructions::transfer_asset::handler(ctx, new_holder)
    }

    pub fn retire_collection(ctx: Context<RetireCollection>) -> Result<()> {
        instructions::retire_collection::handler(ctx)
    }
}
