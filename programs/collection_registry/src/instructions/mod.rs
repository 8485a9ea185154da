pub mod deposit_asset;
pub mod initialize_global;
pub mod register_collection;
pub mod retire_collection;
pub mod set_authorities;
pub mod set_global_pause;
pub mod set_listing_state;
pub mod transfer_asset;
pub mod withdraw_asset;

pub use deposit_asset::*;
pub use initialize_global::*;
pub use register_collection::*;
pub use retire_collection::*;
pub use set_authorities::*;
pub use set_global_pause::*;
pub use set_listing_state::*;
pub use transfer_asset::*;
pub use withdraw_asset::*;
