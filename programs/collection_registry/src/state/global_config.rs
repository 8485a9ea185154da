use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct GlobalConfig {
    pub owner: Pubkey,
    pub global_pause: bool,
    pub shutdown_authority: Pubkey,
    pub listings_authority: Pubkey,
    pub vault_authority_bump: u8,
    pub created_at: i64,
    pub last_updated_at: i64,
    pub bump: u8,
}
