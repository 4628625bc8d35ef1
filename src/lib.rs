pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CartCommand, CliConfig};

pub use adapters::{build_http_client, HttpCatalogGateway, HttpStockGateway, LocalStore};
pub use crate::core::engine::{CartEngine, SNAPSHOT_KEY};
pub use domain::model::{Cart, CartLine, Product, StockInfo};
pub use domain::ports::{CatalogGateway, ConfigProvider, SnapshotStore, StockGateway};
pub use utils::error::{CartError, Result};
