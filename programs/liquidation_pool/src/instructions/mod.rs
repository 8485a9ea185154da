pub mod buy_asset;
pub mod create_pool;

pub use buy_asset::*;
pub use create_pool::*;
