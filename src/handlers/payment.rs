use crate::{
    error::RelayError,
    models::{PaymentLinkResult, PaymentRequest, PaymentStatus, MISSING_FIELDS, ORDER_ID_REQUIRED},
    services::PaymentService,
};
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub payments: Arc<PaymentService>,
}

pub async fn create_quickpay_link(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PaymentLinkResult>, RelayError> {
    let body: Value = serde_json::from_slice(&body)
        .map_err(|_| RelayError::Validation(MISSING_FIELDS.to_string()))?;
    let request = PaymentRequest::from_json(&body)?;

    let payment_url = state
        .payments
        .create_payment_link(&request.order_id, request.amount, &request.currency)
        .await?;

    Ok(Json(PaymentLinkResult { payment_url }))
}

pub async fn verify_payment(
    State(state): State<AppState>,
    order_id: Result<Path<String>, PathRejection>,
) -> Result<Json<PaymentStatus>, RelayError> {
    let order_id = match order_id {
        Ok(Path(order_id)) if !order_id.is_empty() => order_id,
        Ok(_) => return Err(RelayError::Validation(ORDER_ID_REQUIRED.to_string())),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable order id");
            return Err(RelayError::Validation(ORDER_ID_REQUIRED.to_string()));
        }
    };

    let status = state.payments.verify_payment(&order_id).await?;
    Ok(Json(status))
}

/// `/verify-payment/` with no order segment.
pub async fn verify_payment_without_order() -> RelayError {
    RelayError::Validation(ORDER_ID_REQUIRED.to_string())
}
