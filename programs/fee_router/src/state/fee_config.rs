use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct FeeConfig {
    pub owner: Pubkey,
    pub settlement_mint: Pubkey,
    pub settlement_vault: Pubkey,
    pub registry_global_config: Pubkey,
    pub market_program: Pubkey,
    pub default_fee: u32,
    pub beneficiary: Pubkey,
    pub total_fees_taken: u64,
    pub total_fees_burned: u64,
    pub total_fees_distributed: u64,
    pub router_authority_bump: u8,
    pub bump: u8,
}
