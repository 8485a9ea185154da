use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Global pause is enabled")]
    GlobalPaused,
    #[msg("Re-entrant call into the shutdown record")]
    Reentrancy,
    #[msg("Collection is not active")]
    CollectionNotActive,
    #[msg("Shutdown is prevented for this collection")]
    ShutdownPrevented,
    #[msg("Shutdown has not been started")]
    ShutdownNotStarted,
    #[msg("Shutdown has already been started")]
    ShutdownAlreadyStarted,
    #[msg("Shutdown quorum has not been reached")]
    QuorumNotReached,
    #[msg("Shutdown quorum has already been reached")]
    QuorumAlreadyReached,
    #[msg("Shutdown has already been executed")]
    ShutdownAlreadyExecuted,
    #[msg("Shutdown has not been executed")]
    ShutdownNotExecuted,
    #[msg("Collection supply exceeds the shutdown threshold")]
    SupplyAboveThreshold,
    #[msg("Collection supply has not grown past the shutdown threshold")]
    SupplyNotGrown,
    #[msg("Collection has open listings")]
    ListingsOpen,
    #[msg("Liquidation has not sold through")]
    LiquidationIncomplete,

    #[msg("Asset id list is empty")]
    EmptyAssetList,
    #[msg("Too many asset ids")]
    TooManyAssets,
    #[msg("Duplicate asset id")]
    DuplicateAssetId,
    #[msg("Collection supply is too small to shut down")]
    InsufficientSupply,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid duration")]
    InvalidDuration,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Asset record missing from remaining accounts")]
    MissingAssetRecord,
    #[msg("Liquidation pool does not belong to this collection")]
    PoolMismatch,
    #[msg("Collection does not match the shutdown record")]
    CollectionMismatch,

    #[msg("No votes")]
    NoVotes,
    #[msg("Claim vault balance is insufficient")]
    InsufficientClaimVault,

    #[msg("Math overflow")]
    MathOverflow,
}
