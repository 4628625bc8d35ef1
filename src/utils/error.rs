use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("requested quantity unavailable in stock: product {product_id} has {available}, requested {requested}")]
    OutOfStock {
        product_id: u64,
        requested: u32,
        available: u32,
    },

    #[error("product {product_id} is not in the cart")]
    ProductNotFound { product_id: u64 },

    #[error("invalid amount {amount}: quantity must be at least 1")]
    InvalidAmount { amount: i64 },

    #[error("gateway request failed: {message}")]
    GatewayError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl From<reqwest::Error> for CartError {
    fn from(err: reqwest::Error) -> Self {
        CartError::GatewayError {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Stock,
    Cart,
    Gateway,
    Storage,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Expected rejections, the cart is untouched.
    Low,
    /// Transient, retriggering the action may succeed.
    Medium,
    /// Bad input or state that needs user attention.
    High,
    /// Environment problems (storage, config).
    Critical,
}

impl CartError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CartError::OutOfStock { .. } => ErrorCategory::Stock,
            CartError::ProductNotFound { .. } | CartError::InvalidAmount { .. } => {
                ErrorCategory::Cart
            }
            CartError::GatewayError { .. } => ErrorCategory::Gateway,
            CartError::IoError(_) | CartError::SerializationError(_) => ErrorCategory::Storage,
            CartError::InvalidConfigValueError { .. } | CartError::MissingConfigError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CartError::OutOfStock { .. } => ErrorSeverity::Low,
            CartError::ProductNotFound { .. } | CartError::InvalidAmount { .. } => {
                ErrorSeverity::High
            }
            CartError::GatewayError { .. } => ErrorSeverity::Medium,
            CartError::IoError(_)
            | CartError::SerializationError(_)
            | CartError::InvalidConfigValueError { .. }
            | CartError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CartError::OutOfStock { .. } => {
                "Lower the requested quantity or wait for the product to be restocked"
            }
            CartError::ProductNotFound { .. } => {
                "Check the cart contents with `show`; the product may already have been removed"
            }
            CartError::InvalidAmount { .. } => {
                "Use a quantity of 1 or more; use `remove` to delete a product from the cart"
            }
            CartError::GatewayError { .. } => {
                "Check that the store API is reachable and retry the action"
            }
            CartError::IoError(_) => "Check that the data path exists and is writable",
            CartError::SerializationError(_) => {
                "The cart snapshot is unreadable; it will be replaced on the next mutation"
            }
            CartError::InvalidConfigValueError { .. } | CartError::MissingConfigError { .. } => {
                "Fix the command line arguments and run again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CartError::OutOfStock { .. } => "requested quantity unavailable in stock".to_string(),
            CartError::ProductNotFound { product_id } => {
                format!("product {} is not in the cart", product_id)
            }
            CartError::InvalidAmount { .. } => "quantity must be at least 1".to_string(),
            CartError::GatewayError { .. } => "could not reach the store service".to_string(),
            CartError::IoError(_) | CartError::SerializationError(_) => {
                "could not access the saved cart".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_triage() {
        let err = CartError::OutOfStock {
            product_id: 1,
            requested: 4,
            available: 3,
        };
        assert_eq!(err.category(), ErrorCategory::Stock);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "requested quantity unavailable in stock");

        let err = CartError::InvalidAmount { amount: -1 };
        assert_eq!(err.category(), ErrorCategory::Cart);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_io_errors_are_storage_category() {
        let err = CartError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
