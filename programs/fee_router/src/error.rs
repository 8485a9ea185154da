use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // authorization
    #[msg("Unauthorized")]
    Unauthorized,

    // lifecycle state
    #[msg("Global pause is enabled")]
    GlobalPaused,
    #[msg("Re-entrant call into the fee ledger")]
    Reentrancy,
    #[msg("Collection is not active")]
    CollectionNotActive,
    #[msg("No fee exemption is set for this counterparty")]
    ExemptionNotSet,

    // validation
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Fee exceeds the maximum fee")]
    FeeExceedsCeiling,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Pair mints do not match the market pool")]
    InvalidPairMints,

    // conservation
    #[msg("Internal fill exceeds available fee inventory")]
    InsufficientInventory,
    #[msg("No fees to distribute")]
    NothingToDistribute,
    #[msg("Nothing to claim")]
    NothingToClaim,
    #[msg("Settlement vault balance is insufficient")]
    InsufficientVaultBalance,
    #[msg("Slippage limit exceeded")]
    SlippageExceeded,

    // external market
    #[msg("Invalid market account")]
    InvalidMarketAccount,
    #[msg("Invalid market price")]
    InvalidMarketPrice,
    #[msg("Market swap failed")]
    MarketCallFailed,
    #[msg("Market settlement does not match the forwarded order")]
    MarketSettlementMismatch,

    #[msg("Math overflow")]
    MathOverflow,
}
