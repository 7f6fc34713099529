//! # Domain Types
//!
//! Core catalog types: the product entity, its draft/patch shapes for
//! store CRUD, and the preview projection returned by catalog filtering.
//!
//! ## Identity
//! Products carry a store-assigned integer id, immutable after creation.
//! Everything else is mutable through [`ProductPatch`].

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::store::{Entity, EntityId};

// =============================================================================
// Category
// =============================================================================

/// Product category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Clothing,
    Books,
    Education,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Owned exclusively by an `EntityStore<Product>`; the cart keeps frozen
/// snapshots of it, never live references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the store. Immutable after creation.
    pub id: EntityId,

    /// Display name.
    pub name: String,

    /// Unit price. Non-negative by construction of the catalog.
    pub price: Money,

    /// Category tag.
    pub category: Category,

    /// Whether the product can currently be added to a cart.
    pub available: bool,
}

/// Creation fields for a product: everything except the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: Money,
    pub category: Category,
    pub available: bool,
}

/// Partial update for a product. Omitted fields are unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub category: Option<Category>,
    pub available: Option<bool>,
}

impl Entity for Product {
    type Draft = ProductDraft;
    type Patch = ProductPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: ProductDraft) -> Self {
        Product {
            id,
            name: draft.name,
            price: draft.price,
            category: draft.category,
            available: draft.available,
        }
    }

    fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
    }
}

// =============================================================================
// Product Preview
// =============================================================================

/// Catalog listing projection: a product without its `available` flag.
///
/// Returned by catalog filtering so listings never leak stock state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPreview {
    pub id: EntityId,
    pub name: String,
    pub price: Money,
    pub category: Category,
}

impl From<&Product> for ProductPreview {
    fn from(product: &Product) -> Self {
        ProductPreview {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            category: product.category,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product {
            id: 1,
            name: "Laptop".to_string(),
            price: Money::new(99999, 2),
            category: Category::Electronics,
            available: true,
        }
    }

    #[test]
    fn test_patch_merges_only_provided_fields() {
        let mut product = laptop();
        product.apply(ProductPatch {
            available: Some(false),
            ..ProductPatch::default()
        });

        assert!(!product.available);
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.price, Money::new(99999, 2));
    }

    #[test]
    fn test_empty_patch_is_a_no_op() {
        let mut product = laptop();
        let before = product.clone();
        product.apply(ProductPatch::default());
        assert_eq!(product, before);
    }

    #[test]
    fn test_preview_omits_available() {
        let preview = ProductPreview::from(&laptop());
        let json = serde_json::to_value(&preview).unwrap();

        assert_eq!(json["name"], "Laptop");
        assert_eq!(json["category"], "electronics");
        assert!(json.get("available").is_none());
    }

    #[test]
    fn test_category_serde_names() {
        assert_eq!(
            serde_json::to_string(&Category::Education).unwrap(),
            "\"education\""
        );
    }
}
