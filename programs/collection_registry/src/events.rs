use anchor_lang::prelude::*;

#[event]
pub struct GlobalPauseSet {
    pub paused: bool,
}

#[event]
pub struct CollectionRegistered {
    pub collection_id: Pubkey,
    pub ctoken_mint: Pubkey,
    pub denomination: u8,
}

#[event]
pub struct AssetDeposited {
    pub collection_id: Pubkey,
    pub token_id: u64,
    pub depositor: Pubkey,
    pub minted: u64,
}

#[event]
pub struct ListingStateChanged {
    pub collection_id: Pubkey,
    pub token_id: u64,
    pub listed: bool,
    pub protected: bool,
}

#[event]
pub struct AssetWithdrawn {
    pub collection_id: Pubkey,
    pub token_id: u64,
    pub recipient: Pubkey,
}

#[event]
pub struct CollectionRetired {
    pub collection_id: Pubkey,
    pub burned: u64,
}
