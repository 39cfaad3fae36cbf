use crate::error::RelayError;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const ORDER_ID_REQUIRED: &str = "Order ID is required";

/// Inbound request for a hosted payment page. `amount` is in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub order_id: String,
    pub amount: u64,
    pub currency: String,
}

impl PaymentRequest {
    /// Validates a loosely typed JSON body. Absent, null, empty and zero values all
    /// count as missing.
    pub fn from_json(body: &Value) -> Result<Self, RelayError> {
        let missing = || RelayError::Validation(MISSING_FIELDS.to_string());

        let order_id = match body.get("orderId") {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(Value::Number(id)) if id.as_f64() != Some(0.0) => id.to_string(),
            _ => return Err(missing()),
        };

        let amount = body
            .get("amount")
            .and_then(Value::as_u64)
            .filter(|amount| *amount > 0)
            .ok_or_else(missing)?;

        let currency = match body.get("currency") {
            Some(Value::String(currency)) if !currency.is_empty() => currency.clone(),
            _ => return Err(missing()),
        };

        Ok(Self {
            order_id,
            amount,
            currency,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLinkResult {
    pub payment_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementStatus {
    Paid,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatus {
    pub status: SettlementStatus,
    pub transaction_id: String,
    pub amount: Number,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_complete_request() {
        let request =
            PaymentRequest::from_json(&json!({"orderId": "o1", "amount": 100, "currency": "USD"}))
                .unwrap();

        assert_eq!(
            request,
            PaymentRequest {
                order_id: "o1".into(),
                amount: 100,
                currency: "USD".into(),
            }
        );
    }

    #[test]
    fn numeric_order_id_is_rendered_as_text() {
        let request =
            PaymentRequest::from_json(&json!({"orderId": 4711, "amount": 1, "currency": "DKK"}))
                .unwrap();
        assert_eq!(request.order_id, "4711");
    }

    #[test]
    fn whitespace_values_are_forwarded() {
        let request =
            PaymentRequest::from_json(&json!({"orderId": "  ", "amount": 5, "currency": " "}))
                .unwrap();
        assert_eq!(request.order_id, "  ");
        assert_eq!(request.currency, " ");
    }

    #[test]
    fn rejects_missing_or_falsy_fields() {
        let bodies = [
            json!({"amount": 100, "currency": "USD"}),
            json!({"orderId": "o1", "currency": "USD"}),
            json!({"orderId": "o1", "amount": 100}),
            json!({"orderId": "", "amount": 100, "currency": "USD"}),
            json!({"orderId": null, "amount": 100, "currency": "USD"}),
            json!({"orderId": "o1", "amount": 0, "currency": "USD"}),
            json!({"orderId": "o1", "amount": -5, "currency": "USD"}),
            json!({"orderId": "o1", "amount": 1.5, "currency": "USD"}),
            json!({"orderId": "o1", "amount": 100, "currency": ""}),
            json!([]),
            json!("o1"),
        ];

        for body in bodies {
            assert_eq!(
                PaymentRequest::from_json(&body),
                Err(RelayError::Validation(MISSING_FIELDS.into())),
                "body {body} should be rejected"
            );
        }
    }

    #[test]
    fn status_serializes_with_camel_case_keys() {
        let status = PaymentStatus {
            status: SettlementStatus::Paid,
            transaction_id: "t1".into(),
            amount: Number::from(500),
            currency: "USD".into(),
        };

        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            json!({"status": "Paid", "transactionId": "t1", "amount": 500, "currency": "USD"})
        );
    }
}
