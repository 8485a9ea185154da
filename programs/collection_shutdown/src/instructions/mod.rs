pub mod cancel;
pub mod claim;
pub mod configure_shutdown;
pub mod execute;
pub mod initialize_shutdown;
pub mod prevent_shutdown;
pub mod reclaim_vote;
pub mod record_proceeds;
pub mod start;
pub mod vote;
pub mod vote_and_claim;

pub use cancel::*;
pub use claim::*;
pub use configure_shutdown::*;
pub use execute::*;
pub use initialize_shutdown::*;
pub use prevent_shutdown::*;
pub use reclaim_vote::*;
pub use record_proceeds::*;
pub use start::*;
pub use vote::*;
pub use vote_and_claim::*;
