/// Fee rates are expressed over this denominator (three decimals of percent).
pub const FEE_DENOMINATOR: u64 = 100_000;
pub const MAX_FEE: u32 = 100_000;
pub const DEFAULT_FEE: u32 = 1_000;
