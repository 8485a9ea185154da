pub mod asset_record;
pub mod collection;
pub mod global_config;

pub use asset_record::*;
pub use collection::*;
pub use global_config::*;
