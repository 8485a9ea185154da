use anchor_lang::prelude::*;

#[event]
pub struct LiquidationPoolCreated {
    pub pool: Pubkey,
    pub collection_id: Pubkey,
    pub asset_count: u32,
    pub start_price: u64,
    pub duration_secs: i64,
}

#[event]
pub struct TokenLiquidated {
    pub pool: Pubkey,
    pub collection_id: Pubkey,
    pub token_id: u64,
    pub buyer: Pubkey,
    pub price: u64,
}
