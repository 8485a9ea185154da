pub const SHUTDOWN_QUORUM_PERCENT: u64 = 50;
/// Whole tokens; scaled by the collection's token unit.
pub const MAX_SHUTDOWN_TOKENS: u64 = 4;
pub const MAX_ASSET_IDS: usize = 32;

pub const DEFAULT_LIQUIDATION_START_PRICE: u64 = 500 * 1_000_000_000;
pub const DEFAULT_LIQUIDATION_DURATION_SECS: i64 = 7 * 86_400;
