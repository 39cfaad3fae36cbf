pub mod payments;
pub mod quickpay;

pub use payments::PaymentService;
pub use quickpay::{PaymentGateway, QuickPayClient};
