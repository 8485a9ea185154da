use anchor_lang::prelude::*;

/// Custody record for a single asset. Vault custody is expressed as the
/// owning collection account being the holder.
#[account]
#[derive(InitSpace)]
pub struct AssetRecord {
    pub collection_id: Pubkey,
    pub token_id: u64,
    pub holder: Pubkey,
    pub listed: bool,
    pub protected: bool,
    pub bump: u8,
}

impl AssetRecord {
    pub fn is_held_by(&self, holder: &Pubkey) -> bool {
        self.holder == *holder
    }
}
