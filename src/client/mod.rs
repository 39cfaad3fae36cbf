use crate::{
    error::ErrorResponse,
    models::{PaymentLinkResult, PaymentRequest, PaymentStatus},
};
use anyhow::{anyhow, bail, Context, Result};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

/// Caller-side client for the relay's two endpoints.
pub struct RelayClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RelayClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid relay URL: {}", base_url))?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    pub async fn create_link(&self, request: &PaymentRequest) -> Result<PaymentLinkResult> {
        let url = self.endpoint(&["create-quickpay-link"])?;
        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .context("Relay unreachable")?;

        Self::decode(response).await
    }

    pub async fn verify(&self, order_id: &str) -> Result<PaymentStatus> {
        let url = self.endpoint(&["verify-payment", order_id])?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("Relay unreachable")?;

        Self::decode(response).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Relay URL cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.context("Malformed relay response");
        }

        match response.json::<ErrorResponse>().await {
            Ok(body) => bail!("Relay returned {}: {}", status, body.error),
            Err(_) => bail!("Relay returned {}", status),
        }
    }
}
