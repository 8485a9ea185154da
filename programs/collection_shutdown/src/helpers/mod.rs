pub mod access;
pub mod escrow;
pub mod proceeds;
pub mod quorum;
pub mod sell_through;

pub use access::*;
pub use escrow::*;
pub use proceeds::*;
pub use quorum::*;
pub use sell_through::*;
