use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("GB8pMNxrXSifxXnBxQEeVJ3mApBNf3yF68qRnouw9sb6");

#[program]
pub mod liquidation_pool {
    use super::*;

    pub fn create_pool(
        ctx: Context<CreatePool>,
        collection_id: Pubkey,
        asset_count: u32,
        start_price: u64,
        duration_secs: i64,
    ) -> Result<()> {
        instructions::create_pool::handler(ctx, collection_id, asset_count, start_price, duration_secs)
    }

    pub fn buy_asset(ctx: Context<BuyAsset>, max_price: u64) -> Result<()> {
        instructions::buy_asset::handler(ctx, max_price)
    }
}
