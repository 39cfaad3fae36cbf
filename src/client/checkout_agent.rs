use anyhow::{Context, Result};
use quickpay_relay::{
    client::RelayClient,
    models::{PaymentRequest, SettlementStatus},
};
use std::time::Duration;

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Load configuration
    dotenvy::dotenv().ok();

    let relay_url = env_or("RELAY_URL", "http://localhost:3000");
    let order_id = std::env::var("ORDER_ID").context("ORDER_ID required")?;
    let amount: u64 = env_or("AMOUNT", "100").parse().context("Invalid AMOUNT")?;
    let currency = env_or("CURRENCY", "DKK");
    let poll_secs: u64 = env_or("POLL_SECS", "5").parse().context("Invalid POLL_SECS")?;
    let attempts: u32 = env_or("POLL_ATTEMPTS", "12")
        .parse()
        .context("Invalid POLL_ATTEMPTS")?;

    println!("QuickPay Checkout Agent");
    println!("=======================");
    println!("Relay: {}", relay_url);
    println!("Order: {} ({} {} minor units)", order_id, amount, currency);
    println!();

    let client = RelayClient::new(&relay_url)?;

    let link = client
        .create_link(&PaymentRequest {
            order_id: order_id.clone(),
            amount,
            currency,
        })
        .await?;

    println!("Open this link to pay:");
    println!("  {}", link.payment_url);
    println!();

    for attempt in 1..=attempts {
        tokio::time::sleep(Duration::from_secs(poll_secs)).await;

        match client.verify(&order_id).await {
            Ok(status) if status.status == SettlementStatus::Paid => {
                println!(
                    "Paid: transaction {} settled {} {}",
                    status.transaction_id, status.amount, status.currency
                );
                return Ok(());
            }
            Ok(status) => println!("[{}/{}] {:?}", attempt, attempts, status.status),
            Err(e) => println!("[{}/{}] {}", attempt, attempts, e),
        }
    }

    anyhow::bail!("Order {} not paid after {} attempts", order_id, attempts)
}
