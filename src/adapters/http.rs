use crate::domain::model::{Product, StockInfo};
use crate::domain::ports::{CatalogGateway, StockGateway};
use crate::utils::error::{CartError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Shared HTTP client with the bounded per-request timeout. Timeouts
/// surface as gateway failures like any other transport error.
pub fn build_http_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder().timeout(timeout).build()?;
    Ok(client)
}

async fn fetch_json<T: serde::de::DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    tracing::debug!("Making API request to: {}", url);
    let response = client.get(url).send().await?;

    tracing::debug!("API response status: {}", response.status());
    if !response.status().is_success() {
        return Err(CartError::GatewayError {
            message: format!("{} returned HTTP {}", url, response.status()),
        });
    }

    let value = response.json::<T>().await?;
    Ok(value)
}

/// Stock service over HTTP: `GET {base}/stock/{id}`.
#[derive(Debug, Clone)]
pub struct HttpStockGateway {
    client: Client,
    base_url: String,
}

impl HttpStockGateway {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl StockGateway for HttpStockGateway {
    async fn stock(&self, product_id: u64) -> Result<StockInfo> {
        let url = format!("{}/stock/{}", self.base_url.trim_end_matches('/'), product_id);
        fetch_json(&self.client, &url).await
    }
}

/// Product catalog over HTTP: `GET {base}/products/{id}`.
#[derive(Debug, Clone)]
pub struct HttpCatalogGateway {
    client: Client,
    base_url: String,
}

impl HttpCatalogGateway {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl CatalogGateway for HttpCatalogGateway {
    async fn product(&self, product_id: u64) -> Result<Product> {
        let url = format!(
            "{}/products/{}",
            self.base_url.trim_end_matches('/'),
            product_id
        );
        fetch_json(&self.client, &url).await
    }
}
