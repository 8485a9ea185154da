use anchor_lang::prelude::*;

#[event]
pub struct ShutdownStarted {
    pub collection_id: Pubkey,
    pub quorum_votes: u64,
}

#[event]
pub struct ShutdownVoted {
    pub collection_id: Pubkey,
    pub voter: Pubkey,
    pub votes: u64,
}

#[event]
pub struct ShutdownQuorumReached {
    pub collection_id: Pubkey,
}

#[event]
pub struct ShutdownExecuted {
    pub collection_id: Pubkey,
    pub pool: Pubkey,
    pub asset_ids: Vec<u64>,
}

#[event]
pub struct ShutdownCancelled {
    pub collection_id: Pubkey,
}

#[event]
pub struct ShutdownVoteReclaimed {
    pub collection_id: Pubkey,
    pub voter: Pubkey,
    pub votes: u64,
}

#[event]
pub struct ShutdownClaimed {
    pub collection_id: Pubkey,
    pub claimant: Pubkey,
    pub votes: u64,
    pub amount: u64,
}

#[event]
pub struct ShutdownPreventionToggled {
    pub collection_id: Pubkey,
    pub prevented: bool,
}

#[event]
pub struct LiquidationProceedsReceived {
    pub collection_id: Pubkey,
    pub pool: Pubkey,
    pub amount: u64,
}
