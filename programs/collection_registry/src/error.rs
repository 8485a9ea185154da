use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Global pause is enabled")]
    GlobalPaused,
    #[msg("Invalid denomination")]
    InvalidDenomination,
    #[msg("Collection is not active")]
    CollectionNotActive,
    #[msg("Collection already retired")]
    CollectionAlreadyRetired,
    #[msg("Asset is not held by the vault")]
    AssetNotInVault,
    #[msg("Asset is tied up in an open listing")]
    AssetListed,
    #[msg("Asset holder mismatch")]
    AssetHolderMismatch,
    #[msg("Listing state unchanged")]
    ListingStateUnchanged,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Math overflow")]
    MathOverflow,
}
