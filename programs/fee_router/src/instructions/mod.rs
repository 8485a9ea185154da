pub mod claim_fees;
pub mod create_pair;
pub mod deposit_fees;
pub mod distribute_fees;
pub mod init_beneficiary_fees;
pub mod initialize_router;
pub mod remove_fee_exemption;
pub mod set_beneficiary;
pub mod set_default_fee;
pub mod set_fee_exemption;
pub mod set_pair_fee;
pub mod swap;

pub use claim_fees::*;
pub use create_pair::*;
pub use deposit_fees::*;
pub use distribute_fees::*;
pub use init_beneficiary_fees::*;
pub use initialize_router::*;
pub use remove_fee_exemption::*;
pub use set_beneficiary::*;
pub use set_default_fee::*;
pub use set_fee_exemption::*;
pub use set_pair_fee::*;
pub use swap::*;
