use anchor_lang::prelude::*;

/// Reverse lookup from a liquidation pool to the collection it sells.
#[account]
#[derive(InitSpace)]
pub struct LiquidationPoolBinding {
    pub pool: Pubkey,
    pub collection_id: Pubkey,
    pub bump: u8,
}
