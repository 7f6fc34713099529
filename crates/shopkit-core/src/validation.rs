//! # Validation Module
//!
//! Input validation for cart operations.
//!
//! Validation runs before any business logic, so a failing precondition
//! never leaves partial state behind. Scope is deliberately narrow:
//! presence and quantity checks only.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be at least 1
///
/// ## Example
/// ```rust
/// use shopkit_core::validation::validate_quantity;
///
/// assert!(validate_quantity(5).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-3).is_err());
/// ```
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::NonPositiveQuantity {
            requested: quantity,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_quantity_ok() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        assert_eq!(
            validate_quantity(0),
            Err(ValidationError::NonPositiveQuantity { requested: 0 })
        );
        assert_eq!(
            validate_quantity(-5),
            Err(ValidationError::NonPositiveQuantity { requested: -5 })
        );
    }
}
