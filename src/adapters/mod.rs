// Adapters layer: concrete implementations for external systems (http gateways, storage).

pub mod http;
pub mod storage;

pub use http::{build_http_client, HttpCatalogGateway, HttpStockGateway};
pub use storage::LocalStore;
