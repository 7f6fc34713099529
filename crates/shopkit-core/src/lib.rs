//! # shopkit-core: Pure Business Logic for shopkit
//!
//! This crate is the **heart** of shopkit. It contains all business logic
//! as pure, synchronous functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       shopkit Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                    Driver (apps/demo)                         │  │
//! │  │     Seeding ──► Checkout session ──► Summary display          │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │               ★ shopkit-core (THIS CRATE) ★                   │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌──────────┐           │  │
//! │  │  │  store  │ │  cart   │ │ discount │ │  money   │           │  │
//! │  │  │ Entity  │ │ Shopping│ │ Discount │ │  Money   │           │  │
//! │  │  │ Store<T>│ │  Cart   │ │ policies │ │ (Decimal)│           │  │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └──────────┘           │  │
//! │  │                                                               │  │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - Generic identifier-keyed CRUD container
//! - [`types`] - Catalog types (Product, Category, previews)
//! - [`cart`] - Shopping cart over an injected product store
//! - [`discount`] - Discount policies and derived totals
//! - [`money`] - Exact decimal money type
//! - [`tasks`] - Task board (second entity shape over the store)
//! - [`error`] - Domain error types
//! - [`validation`] - Precondition checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic and synchronous
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Exact Money**: All monetary values are `rust_decimal` backed
//! 4. **Explicit Errors**: All failures are typed, never strings or panics
//! 5. **No Globals**: Stores and carts are owned by their session
//!
//! ## Example Usage
//!
//! ```rust
//! use shopkit_core::cart::ShoppingCart;
//! use shopkit_core::money::Money;
//! use shopkit_core::store::EntityStore;
//! use shopkit_core::types::{Category, ProductDraft};
//!
//! let mut store = EntityStore::new();
//! store.add(ProductDraft {
//!     name: "Laptop".to_string(),
//!     price: Money::new(99999, 2),
//!     category: Category::Electronics,
//!     available: true,
//! });
//!
//! let mut cart = ShoppingCart::new(store);
//! cart.add_item(1, 2).unwrap();
//! assert_eq!(cart.total(), Money::new(199998, 2));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod money;
pub mod store;
pub mod tasks;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopkit_core::Money` instead of
// `use shopkit_core::money::Money`

pub use cart::{CartUpdate, LineItem, ShoppingCart};
pub use discount::Discount;
pub use error::{CartError, CartResult, ErrorKind, ValidationError};
pub use money::Money;
pub use store::{Entity, EntityId, EntityStore};
pub use tasks::{Priority, Task, TaskBoard, TaskFilter};
pub use types::{Category, Product, ProductDraft, ProductPatch, ProductPreview};
