use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid duration")]
    InvalidDuration,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Asset is not held by this pool")]
    AssetNotInPool,
    #[msg("Price exceeds the buyer limit")]
    PriceAboveLimit,
    #[msg("Pool is sold out")]
    SoldOut,
    #[msg("Math overflow")]
    MathOverflow,
}
