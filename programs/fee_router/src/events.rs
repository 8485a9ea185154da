use anchor_lang::prelude::*;

/// `pair` is `None` for the default fee; `fee` is `None` when a pair fee is
/// cleared back to the default.
#[event]
pub struct FeeSet {
    pub pair: Option<Pubkey>,
    pub fee: Option<u32>,
}

#[event]
pub struct FeeExemptionSet {
    pub counterparty: Pubkey,
    pub fee: u32,
}

#[event]
pub struct FeeExemptionRemoved {
    pub counterparty: Pubkey,
}

#[event]
pub struct BeneficiarySet {
    pub beneficiary: Pubkey,
}

#[event]
pub struct PairCreated {
    pub pair: Pubkey,
    pub collection_id: Pubkey,
    pub currency0: Pubkey,
    pub currency1: Pubkey,
    pub market_pool: Pubkey,
}

#[event]
pub struct FeesDeposited {
    pub pair: Pubkey,
    pub ctoken_amount: u64,
    pub settlement_amount: u64,
}

#[event]
pub struct PoolFeesSwapped {
    pub pair: Pubkey,
    pub trader: Pubkey,
    pub ctoken_out: u64,
    pub settlement_in: u64,
}

#[event]
pub struct AmmFeesTaken {
    pub pair: Pubkey,
    pub beneficiary: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub burned: bool,
}

#[event]
pub struct ExternalSwapSettled {
    pub pair: Pubkey,
    pub trader: Pubkey,
    pub input_spent: u64,
    pub output_received: u64,
}

#[event]
pub struct FeesDistributed {
    pub pair: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
}

#[event]
pub struct FeesClaimed {
    pub beneficiary: Pubkey,
    pub amount: u64,
}
