pub mod payment;
pub mod quickpay;

pub use payment::*;
pub use quickpay::*;
