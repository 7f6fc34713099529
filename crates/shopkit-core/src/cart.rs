//! # Shopping Cart
//!
//! Cart aggregation over a constructor-injected product store.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                  │
//! │                                                                     │
//! │  Caller Action            Cart Method            State Change       │
//! │  ─────────────            ───────────            ────────────       │
//! │                                                                     │
//! │  Add product ───────────► add_item() ──────────► merge or push line │
//! │  Remove product ────────► remove_item() ───────► decrement or drop  │
//! │  View total ────────────► total() ─────────────► (read only)        │
//! │  Apply discount ────────► apply_discount() ────► (read only)        │
//! │  Browse catalog ────────► filter_products() ───► (read only)        │
//! │  Empty the cart ────────► clear() ─────────────► lines removed      │
//! │                                                                     │
//! │  Every mutation either fully applies or fully declines; no          │
//! │  intermediate state is observable on failure.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::discount::Discount;
use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::store::{EntityId, EntityStore};
use crate::types::{Category, Product, ProductPreview};
use crate::validation::validate_quantity;

// =============================================================================
// Line Item
// =============================================================================

/// A line in the shopping cart.
///
/// ## Design Notes
/// - `product`: frozen copy of the product at the time of adding.
///   Snapshot-at-add semantics: if the catalog entry is later updated or
///   deleted, this line keeps displaying (and pricing) what was added.
/// - `quantity`: always ≥ 1. A line decremented to zero is removed,
///   never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product snapshot, frozen at the time of adding.
    pub product: Product,

    /// Quantity in cart, always ≥ 1.
    pub quantity: i64,

    /// When this line was first added.
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a new line from a product snapshot and quantity.
    fn from_product(product: Product, quantity: i64) -> Self {
        LineItem {
            product,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Line total: unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

// =============================================================================
// Cart Update
// =============================================================================

/// Successful mutation result: a defensive snapshot of the cart plus a
/// human-readable confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartUpdate {
    pub items: Vec<LineItem>,
    pub message: String,
}

// =============================================================================
// Shopping Cart
// =============================================================================

/// A cart of line items over a product store.
///
/// ## Invariants
/// - At most one line per product id; repeated adds accumulate quantity
/// - Line quantity is always ≥ 1
/// - Lines reference only products that existed in the store at add time;
///   existence is not re-validated on later reads
///
/// ## Ownership
/// The store is injected at construction and owned by the cart session.
/// No global state: each logical session builds its own `ShoppingCart`.
/// A multi-user variant would need one cart per session, with store
/// mutations serialized behind a mutex.
#[derive(Debug, Clone)]
pub struct ShoppingCart {
    products: EntityStore<Product>,
    items: Vec<LineItem>,
}

impl ShoppingCart {
    /// Creates an empty cart over the given product store.
    pub fn new(products: EntityStore<Product>) -> Self {
        ShoppingCart {
            products,
            items: Vec::new(),
        }
    }

    /// Adds a product to the cart, or accumulates quantity if the product
    /// already has a line.
    ///
    /// ## Errors
    /// - Validation: `quantity` ≤ 0
    /// - Not found: no product with `product_id` in the store
    /// - Unavailable: the product's `available` flag is false
    pub fn add_item(&mut self, product_id: EntityId, quantity: i64) -> CartResult<CartUpdate> {
        validate_quantity(quantity)?;

        let product = self
            .products
            .get(product_id)
            .ok_or(CartError::ProductNotFound(product_id))?;

        if !product.available {
            return Err(CartError::OutOfStock {
                name: product.name.clone(),
            });
        }

        let name = product.name.clone();
        match self
            .items
            .iter_mut()
            .find(|line| line.product.id == product_id)
        {
            Some(line) => line.quantity += quantity,
            None => {
                let snapshot = product.clone();
                self.items.push(LineItem::from_product(snapshot, quantity));
            }
        }

        debug!(product_id, quantity, "added to cart");
        Ok(CartUpdate {
            items: self.items.clone(),
            message: format!("Added {quantity} {name}(s) to cart"),
        })
    }

    /// Removes quantity from a product's line.
    ///
    /// If the line's quantity is less than or equal to `quantity`, the
    /// line is deleted entirely; otherwise it is decremented. Removing
    /// more than is present is not an error.
    ///
    /// ## Errors
    /// - Not found: no line for `product_id` in the cart
    pub fn remove_item(&mut self, product_id: EntityId, quantity: i64) -> CartResult<CartUpdate> {
        let pos = self
            .items
            .iter()
            .position(|line| line.product.id == product_id)
            .ok_or(CartError::NotInCart(product_id))?;

        let name = if self.items[pos].quantity <= quantity {
            self.items.remove(pos).product.name
        } else {
            self.items[pos].quantity -= quantity;
            self.items[pos].product.name.clone()
        };

        debug!(product_id, quantity, "removed from cart");
        Ok(CartUpdate {
            items: self.items.clone(),
            message: format!("Removed {quantity} {name}(s) from cart"),
        })
    }

    /// Plain total: Σ unit price × quantity. Deterministic, infallible.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Total under a discount policy. Read-only; the cart is unchanged.
    pub fn apply_discount(&self, discount: Discount) -> Money {
        discount.apply(&self.items)
    }

    /// Filters the backing catalog by optional category and maximum price.
    ///
    /// Both filters match everything when `None`. Results are previews:
    /// the `available` flag is not part of a listing.
    pub fn filter_products(
        &self,
        category: Option<Category>,
        max_price: Option<Money>,
    ) -> Vec<ProductPreview> {
        self.products
            .all()
            .iter()
            .filter(|product| category.map_or(true, |c| product.category == c))
            .filter(|product| max_price.map_or(true, |max| product.price <= max))
            .map(ProductPreview::from)
            .collect()
    }

    /// Defensive copy of the current line items.
    pub fn items(&self) -> Vec<LineItem> {
        self.items.clone()
    }

    /// Empties the cart. The backing store is untouched.
    pub fn clear(&mut self) {
        debug!(lines = self.items.len(), "clearing cart");
        self.items.clear();
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read access to the injected product store.
    pub fn products(&self) -> &EntityStore<Product> {
        &self.products
    }

    /// Write access to the injected product store, for catalog CRUD
    /// within the session. Existing lines keep their snapshots.
    pub fn products_mut(&mut self) -> &mut EntityStore<Product> {
        &mut self.products
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
