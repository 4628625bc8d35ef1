pub mod engine;

pub use crate::domain::model::{Cart, CartLine, Product, StockInfo};
pub use crate::domain::ports::{CatalogGateway, ConfigProvider, SnapshotStore, StockGateway};
pub use crate::utils::error::Result;
