use crate::{
    config::Config,
    error::GatewayError,
    models::{CreateLinkBody, CreatePaymentBody, CreatedPayment, PaymentId, PaymentLink, UpstreamPayment},
};
use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Method, RequestBuilder};
use serde::de::DeserializeOwned;

pub const ACCEPT_VERSION_HEADER: &str = "Accept-Version";

/// The three calls the relay makes against the payment processor.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_payment(&self, order_id: &str, currency: &str) -> Result<PaymentId, GatewayError>;

    async fn create_link(&self, payment_id: &PaymentId, amount: u64) -> Result<String, GatewayError>;

    /// An empty result is not an error.
    async fn query_by_order_id(&self, order_id: &str) -> Result<Vec<UpstreamPayment>, GatewayError>;
}

pub struct QuickPayClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: String,
    accept_version: String,
}

impl QuickPayClient {
    pub fn new(config: &Config) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
            auth_header: config.auth_header(),
            accept_version: config.accept_version.clone(),
        })
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(AUTHORIZATION, &self.auth_header)
            .header(ACCEPT_VERSION_HEADER, &self.accept_version)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, GatewayError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "QuickPay rejected request");
            return Err(GatewayError::rejected(status.as_u16(), body));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl PaymentGateway for QuickPayClient {
    async fn create_payment(&self, order_id: &str, currency: &str) -> Result<PaymentId, GatewayError> {
        tracing::debug!(order_id, currency, "Creating QuickPay payment");

        let request = self
            .request(Method::POST, &self.base_url)
            .json(&CreatePaymentBody { order_id, currency });
        let created: CreatedPayment = self.send(request).await?;

        Ok(created.id)
    }

    async fn create_link(&self, payment_id: &PaymentId, amount: u64) -> Result<String, GatewayError> {
        tracing::debug!(%payment_id, amount, "Creating QuickPay payment link");

        let url = format!("{}/{}/link", self.base_url.trim_end_matches('/'), payment_id);
        let request = self
            .request(Method::PUT, &url)
            .json(&CreateLinkBody { amount });
        let link: PaymentLink = self.send(request).await?;

        Ok(link.url)
    }

    async fn query_by_order_id(&self, order_id: &str) -> Result<Vec<UpstreamPayment>, GatewayError> {
        tracing::debug!(order_id, "Querying QuickPay payments");

        let request = self
            .request(Method::GET, &self.base_url)
            .query(&[("order_id", order_id)]);

        self.send(request).await
    }
}
