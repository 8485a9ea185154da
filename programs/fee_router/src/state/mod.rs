pub mod beneficiary_fees;
pub mod fee_config;
pub mod fee_exemption;
pub mod pair;
pub mod swap_args;

pub use beneficiary_fees::*;
pub use fee_config::*;
pub use fee_exemption::*;
pub use pair::*;
pub use swap_args::*;
