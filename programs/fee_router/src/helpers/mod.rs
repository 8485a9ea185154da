pub mod access;
pub mod fees;
pub mod market;
pub mod math;
pub mod swap_plan;

pub use access::*;
pub use fees::*;
pub use market::*;
pub use math::*;
pub use swap_plan::*;
