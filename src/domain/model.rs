use serde::{Deserialize, Serialize};

/// Catalog metadata for a single product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub image: String,
}

/// One product entry in the cart with its selected quantity.
///
/// Serializes flat: `(id, title, price, image, amount)` per record,
/// matching the snapshot format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.product.price * self.amount as f64
    }
}

/// Transient stock reading for a product, fetched fresh per mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockInfo {
    pub id: u64,
    pub amount: u32,
}

/// Insertion-ordered collection of cart lines, unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: u64) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == product_id)
    }

    /// Current quantity for a product, 0 when not in the cart.
    pub fn amount_of(&self, product_id: u64) -> u32 {
        self.line(product_id).map(|line| line.amount).unwrap_or(0)
    }

    pub fn contains(&self, product_id: u64) -> bool {
        self.line(product_id).is_some()
    }

    /// Appends a new line. Caller guarantees the product is not already
    /// a member; uniqueness by id is the cart's invariant.
    pub fn push_line(&mut self, line: CartLine) {
        debug_assert!(!self.contains(line.product.id));
        self.lines.push(line);
    }

    /// Sets the exact quantity of an existing line. Returns false when
    /// the product is not a member.
    pub fn set_amount(&mut self, product_id: u64, amount: u32) -> bool {
        match self.lines.iter_mut().find(|line| line.product.id == product_id) {
            Some(line) => {
                line.amount = amount;
                true
            }
            None => false,
        }
    }

    /// Removes the line for a product. Returns false when the product
    /// is not a member.
    pub fn remove(&mut self, product_id: u64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product.id != product_id);
        self.lines.len() != before
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }
}
