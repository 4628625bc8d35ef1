use crate::core::{Cart, CartLine, CatalogGateway, SnapshotStore, StockGateway};
use crate::utils::error::{CartError, Result};
use tokio::sync::Mutex;

/// Fixed store key for the serialized cart snapshot.
pub const SNAPSHOT_KEY: &str = "cart.json";

/// The cart-state engine.
///
/// Owns the in-memory cart exclusively; callers hold a reference and go
/// through the three mutating operations plus the read view. Every
/// operation takes the internal lock for its whole duration, so at most
/// one mutation is in flight per engine instance even while a gateway
/// call is suspended.
pub struct CartEngine<S: StockGateway, C: CatalogGateway, P: SnapshotStore> {
    stock: S,
    catalog: C,
    store: P,
    state: Mutex<Cart>,
}

impl<S: StockGateway, C: CatalogGateway, P: SnapshotStore> CartEngine<S, C, P> {
    /// Boots the engine from the persisted snapshot.
    ///
    /// A missing, unreadable or corrupt snapshot yields an empty cart;
    /// startup never fails on bad stored data.
    pub async fn load(stock: S, catalog: C, store: P) -> Self {
        let cart = match store.load(SNAPSHOT_KEY).await {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(cart) => cart,
                Err(e) => {
                    tracing::warn!("Discarding corrupt cart snapshot: {}", e);
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!("Could not read cart snapshot, starting empty: {}", e);
                Cart::new()
            }
        };

        tracing::debug!("Cart loaded with {} line(s)", cart.len());

        Self {
            stock,
            catalog,
            store,
            state: Mutex::new(cart),
        }
    }

    /// Increases the quantity of a product by 1, inserting a new line
    /// when the product is not yet in the cart.
    ///
    /// Rejected with `OutOfStock` when the resulting quantity would
    /// exceed the currently available stock. All-or-nothing: a gateway
    /// fault leaves the cart untouched.
    pub async fn add_product(&self, product_id: u64) -> Result<()> {
        let mut cart = self.state.lock().await;

        let current = cart.amount_of(product_id);
        let stock = self.stock.stock(product_id).await?;
        let proposed = current + 1;

        tracing::debug!(
            "add_product({}): current={}, stock={}",
            product_id,
            current,
            stock.amount
        );

        if proposed > stock.amount {
            return Err(CartError::OutOfStock {
                product_id,
                requested: proposed,
                available: stock.amount,
            });
        }

        if current > 0 {
            cart.set_amount(product_id, proposed);
        } else {
            let product = self.catalog.product(product_id).await?;
            cart.push_line(CartLine { product, amount: 1 });
        }

        self.persist(&cart).await;
        Ok(())
    }

    /// Deletes the line for a product.
    ///
    /// Removing a non-member is a reported error, not a no-op; callers
    /// can tell "nothing to do" from "succeeded".
    pub async fn remove_product(&self, product_id: u64) -> Result<()> {
        let mut cart = self.state.lock().await;

        if !cart.remove(product_id) {
            return Err(CartError::ProductNotFound { product_id });
        }

        self.persist(&cart).await;
        Ok(())
    }

    /// Sets the exact quantity of a product already in the cart.
    ///
    /// Gate order is fixed so error reporting is deterministic:
    /// `InvalidAmount` for any amount below 1 regardless of stock, then
    /// `OutOfStock` against a fresh stock reading, then
    /// `ProductNotFound` for a non-member.
    pub async fn update_product_amount(&self, product_id: u64, amount: i64) -> Result<()> {
        let mut cart = self.state.lock().await;

        if amount <= 0 {
            return Err(CartError::InvalidAmount { amount });
        }

        let stock = self.stock.stock(product_id).await?;
        let requested = u32::try_from(amount).unwrap_or(u32::MAX);

        tracing::debug!(
            "update_product_amount({}, {}): stock={}",
            product_id,
            amount,
            stock.amount
        );

        if requested > stock.amount {
            return Err(CartError::OutOfStock {
                product_id,
                requested,
                available: stock.amount,
            });
        }

        if !cart.set_amount(product_id, requested) {
            return Err(CartError::ProductNotFound { product_id });
        }

        self.persist(&cart).await;
        Ok(())
    }

    /// Read view: a clone of the current cart contents.
    pub async fn cart(&self) -> Cart {
        self.state.lock().await.clone()
    }

    pub async fn total(&self) -> f64 {
        self.state.lock().await.total()
    }

    // The in-memory cart is the source of truth; the store is only read
    // back at startup, so a failed write degrades durability but never
    // rolls back an accepted mutation.
    async fn persist(&self, cart: &Cart) {
        let bytes = match serde_json::to_vec(cart) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Could not serialize cart snapshot: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.save(SNAPSHOT_KEY, &bytes).await {
            tracing::warn!("Cart snapshot write failed: {}", e);
        } else {
            tracing::debug!("Cart snapshot saved ({} bytes)", bytes.len());
        }
    }
}
