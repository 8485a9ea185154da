use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Dutch pool selling the assets of a retired collection. Every sale is paid
/// straight into `proceeds_account`; `total_proceeds` is the running sum the
/// owner attributes back to the collection.
#[account]
#[derive(InitSpace)]
pub struct LiquidationPool {
    pub owner: Pubkey,
    pub collection_id: Pubkey,
    pub settlement_mint: Pubkey,
    pub proceeds_account: Pubkey,
    pub start_price: u64,
    pub end_price: u64,
    pub start_ts: i64,
    pub duration_secs: i64,
    pub asset_count: u32,
    pub sold_count: u32,
    pub total_proceeds: u64,
    pub bump: u8,
}

impl LiquidationPool {
    /// Linear decay from `start_price` to `end_price` over `duration_secs`.
    pub fn current_price(&self, now: i64) -> Result<u64> {
        let elapsed = now.saturating_sub(self.start_ts).max(0);
        if elapsed >= self.duration_secs {
            return Ok(self.end_price);
        }

        let range = self
            .start_price
            .checked_sub(self.end_price)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        let decayed = ((range as u128)
            .checked_mul(elapsed as u128)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?)
        .checked_div(self.duration_secs as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))? as u64;

        self.start_price
            .checked_sub(decayed)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    }

    pub fn record_sale(&mut self, price: u64) -> Result<()> {
        require!(self.sold_count < self.asset_count, ErrorCode::SoldOut);
        self.sold_count += 1;
        self.total_proceeds = self
            .total_proceeds
            .checked_add(price)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }
}
