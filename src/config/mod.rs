use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-cart")]
#[command(about = "Cart-state engine for a small storefront")]
pub struct CliConfig {
    /// Base URL of the store API (serves /products/{id} and /stock/{id})
    #[arg(long, default_value = "http://localhost:3333")]
    pub api_endpoint: String,

    /// Directory holding the persisted cart snapshot
    #[arg(long, default_value = "./data")]
    pub data_path: String,

    /// Per-request timeout for gateway calls, in seconds
    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CartCommand {
    /// Add one unit of a product to the cart
    Add { product_id: u64 },
    /// Remove a product from the cart entirely
    Remove { product_id: u64 },
    /// Set the exact quantity of a product already in the cart
    Update { product_id: u64, amount: i64 },
    /// Print the current cart contents
    Show,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("data_path", &self.data_path)?;
        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}
