pub mod pool_binding;
pub mod shutdown_config;
pub mod shutdown_record;
pub mod shutdown_voter;

pub use pool_binding::*;
pub use shutdown_config::*;
pub use shutdown_record::*;
pub use shutdown_voter::*;
