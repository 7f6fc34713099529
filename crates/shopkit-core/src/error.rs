//! # Error Types
//!
//! Domain-specific error types for shopkit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  shopkit-core errors (this file)                                    │
//! │  ├── CartError        - Cart operation failures                     │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  Flow: ValidationError → CartError → caller (demo, tests)           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, name)
//! 3. Errors are enum variants, never String
//! 4. Operations return tagged results: they fully apply or fully decline,
//!    never leaving partial state behind

use thiserror::Error;

use crate::store::EntityId;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart operation errors.
///
/// These errors represent business rule violations during cart mutation.
/// They should be caught and translated to user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// No product with this id exists in the backing store.
    #[error("product not found: {0}")]
    ProductNotFound(EntityId),

    /// The product exists but its `available` flag is false.
    #[error("product \"{name}\" is out of stock")]
    OutOfStock { name: String },

    /// No cart line exists for this product id.
    #[error("product {0} is not in the cart")]
    NotInCart(EntityId),

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CartError {
    /// Machine-readable error category for programmatic handling.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::ProductNotFound(_) | CartError::NotInCart(_) => ErrorKind::NotFound,
            CartError::OutOfStock { .. } => ErrorKind::Unavailable,
            CartError::Validation(_) => ErrorKind::Validation,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a caller-supplied argument violates a precondition,
/// before any business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Quantity must be at least 1.
    #[error("quantity must be greater than 0, got {requested}")]
    NonPositiveQuantity { requested: i64 },
}

// =============================================================================
// Error Kind
// =============================================================================

/// Coarse error categories, stable across message wording changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller-supplied argument violates a precondition.
    Validation,
    /// Referenced identifier does not exist in the relevant collection.
    NotFound,
    /// Referenced entity exists but cannot be added to the cart.
    Unavailable,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
