use anchor_lang::prelude::*;

use crate::{
    constants::{DEFAULT_LIQUIDATION_DURATION_SECS, DEFAULT_LIQUIDATION_START_PRICE},
    error::ErrorCode,
};

#[account]
#[derive(InitSpace)]
pub struct ShutdownConfig {
    pub owner: Pubkey,
    pub registry_global_config: Pubkey,
    pub settlement_mint: Pubkey,
    pub claim_vault: Pubkey,
    pub liquidation_start_price: u64,
    pub liquidation_duration_secs: i64,
    pub shutdown_authority_bump: u8,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub struct ShutdownConfigParams {
    pub liquidation_start_price: u64,
    pub liquidation_duration_secs: i64,
}

impl Default for ShutdownConfigParams {
    fn default() -> Self {
        Self {
            liquidation_start_price: DEFAULT_LIQUIDATION_START_PRICE,
            liquidation_duration_secs: DEFAULT_LIQUIDATION_DURATION_SECS,
        }
    }
}

impl ShutdownConfigParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.liquidation_start_price > 0, ErrorCode::InvalidAmount);
        require!(
            self.liquidation_duration_secs > 0,
            ErrorCode::InvalidDuration
        );
        Ok(())
    }
}

impl ShutdownConfig {
    pub fn apply(&mut self, params: &ShutdownConfigParams) {
        self.liquidation_start_price = params.liquidation_start_price;
        self.liquidation_duration_secs = params.liquidation_duration_secs;
    }
}
