/// Base units of collection token backed by one asset at denomination 0.
pub const ONE_TOKEN: u64 = 1_000_000_000;
pub const CTOKEN_DECIMALS: u8 = 9;
pub const MAX_DENOMINATION: u8 = 3;
