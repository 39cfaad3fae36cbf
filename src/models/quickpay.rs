use super::payment::{PaymentStatus, SettlementStatus};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Processor-assigned payment identifier. QuickPay sends numbers, but strings are
/// accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PaymentId {
    Number(u64),
    Text(String),
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentId::Number(id) => write!(f, "{}", id),
            PaymentId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatePaymentBody<'a> {
    pub order_id: &'a str,
    pub currency: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreateLinkBody {
    pub amount: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPayment {
    pub id: PaymentId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentLink {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub amount: Option<Number>,
}

/// Read-only view of a payment object owned by the processor.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamPayment {
    pub id: PaymentId,
    #[serde(default)]
    pub accepted: bool,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl UpstreamPayment {
    /// Sum of all operation amounts, null counting as zero. Stays integral while every
    /// amount is an integer; otherwise summed as floats.
    pub fn settled_amount(&self) -> Number {
        let mut whole = Some(0i64);
        let mut total = 0f64;

        for amount in self.operations.iter().filter_map(|op| op.amount.as_ref()) {
            whole = whole
                .zip(amount.as_i64())
                .and_then(|(sum, amount)| sum.checked_add(amount));
            total += amount.as_f64().unwrap_or(0.0);
        }

        match whole {
            Some(sum) => Number::from(sum),
            None => number_from_f64(total),
        }
    }

    pub fn settlement_status(&self) -> SettlementStatus {
        if self.accepted {
            SettlementStatus::Paid
        } else {
            SettlementStatus::Pending
        }
    }

    pub fn to_status(&self) -> PaymentStatus {
        PaymentStatus {
            status: self.settlement_status(),
            transaction_id: self.id.to_string(),
            amount: self.settled_amount(),
            currency: self.currency.clone(),
        }
    }
}

fn number_from_f64(value: f64) -> Number {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Number::from(value as i64)
    } else {
        Number::from_f64(value).unwrap_or_else(|| Number::from(0))
    }
}
