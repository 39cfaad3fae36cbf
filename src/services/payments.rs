use crate::{
    error::RelayError,
    models::PaymentStatus,
    services::PaymentGateway,
};
use std::sync::Arc;

pub const LINK_FAILURE: &str = "Failed to create QuickPay payment link";
pub const VERIFY_FAILURE: &str = "Failed to verify payment";
pub const NO_PAYMENT_FOUND: &str = "No payment found for this order ID";

pub struct PaymentService {
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentService {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Creates a processor payment for the order and then a hosted link for it.
    /// A payment left behind by a failed second step is not cancelled.
    pub async fn create_payment_link(
        &self,
        order_id: &str,
        amount: u64,
        currency: &str,
    ) -> Result<String, RelayError> {
        let payment_id = self
            .gateway
            .create_payment(order_id, currency)
            .await
            .map_err(|e| {
                tracing::error!(order_id, error = %e, "Error creating payment");
                e.into_relay_error(LINK_FAILURE)
            })?;

        let url = self
            .gateway
            .create_link(&payment_id, amount)
            .await
            .map_err(|e| {
                tracing::error!(order_id, %payment_id, error = %e, "Error creating payment link");
                e.into_relay_error(LINK_FAILURE)
            })?;

        tracing::info!(order_id, %payment_id, "Payment link created");
        Ok(url)
    }

    pub async fn verify_payment(&self, order_id: &str) -> Result<PaymentStatus, RelayError> {
        let payments = self
            .gateway
            .query_by_order_id(order_id)
            .await
            .map_err(|e| {
                tracing::error!(order_id, error = %e, "Error verifying payment");
                e.into_relay_error(VERIFY_FAILURE)
            })?;

        // Processor ordering is authoritative.
        let payment = payments
            .first()
            .ok_or_else(|| RelayError::NotFound(NO_PAYMENT_FOUND.to_string()))?;

        let status = payment.to_status();
        tracing::info!(
            order_id,
            transaction_id = %status.transaction_id,
            status = ?status.status,
            "Payment verified"
        );

        Ok(status)
    }
}
