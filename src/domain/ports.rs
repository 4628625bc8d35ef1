use crate::domain::model::{Product, StockInfo};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read side of the stock service. Consulted fresh for every mutating
/// operation that needs it.
#[async_trait]
pub trait StockGateway: Send + Sync {
    async fn stock(&self, product_id: u64) -> Result<StockInfo>;
}

/// Read side of the product catalog.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn product(&self, product_id: u64) -> Result<Product>;
}

/// Durable key-value store for cart snapshots.
pub trait SnapshotStore: Send + Sync {
    fn load(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn save(
        &self,
        key: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn data_path(&self) -> &str;
    fn timeout_secs(&self) -> u64;
}
