//! # Validation Module
//!
//! Input validation for the dashboard forms and table toolbars.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── <input type="number" min="1">                                     │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Negative quantity / price / adjustment                            │
//! │  └── Required names, SKU format, query length                          │
//! │                                                                         │
//! │  Invalid input is REPORTED, never clamped into range                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use backoffice_core::validation::{validate_non_negative, validate_sku};
//!
//! validate_sku("KAOS-HTM-L").unwrap();
//! assert!(validate_non_negative("quantity", -1).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted toolbar search query.
pub const MAX_QUERY_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required text field is present.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 200 characters
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use backoffice_core::validation::validate_sku;
///
/// assert!(validate_sku("KMJ-PTH-M").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("has space").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches every record)
/// - At most [`MAX_QUERY_LEN`] characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity, stock level or weight.
///
/// ## Rules
/// - Must be `>= 0`; zero is allowed (a row being filled in)
pub fn validate_non_negative(field: &str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }

    Ok(())
}

/// Validates a price or order adjustment.
///
/// ## Example
/// ```rust
/// use backoffice_core::money::Money;
/// use backoffice_core::validation::validate_price;
///
/// assert!(validate_price("price", Money::from_rupiah(0)).is_ok());       // Free item
/// assert!(validate_price("discount", Money::from_rupiah(-100)).is_err());
/// ```
pub fn validate_price(field: &str, amount: Money) -> ValidationResult<()> {
    validate_non_negative(field, amount.rupiah())
}

/// Validates a table page size.
pub fn validate_page_size(page_size: usize) -> ValidationResult<()> {
    if page_size == 0 {
        return Err(ValidationError::MustBePositive {
            field: "page size".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Overflow Guards
// =============================================================================

pub fn too_large(field: &str) -> ValidationError {
    ValidationError::TooLarge {
        field: field.to_string(),
    }
}

/// Sums quantities, weights or stock, refusing to overflow.
pub fn checked_sum<I>(field: &str, values: I) -> ValidationResult<i64>
where
    I: IntoIterator<Item = i64>,
{
    values
        .into_iter()
        .try_fold(0i64, |acc, value| acc.checked_add(value))
        .ok_or_else(|| too_large(field))
}

/// Sums money amounts, refusing to overflow.
pub fn checked_money_sum<I>(field: &str, amounts: I) -> ValidationResult<Money>
where
    I: IntoIterator<Item = Money>,
{
    Money::checked_sum(amounts).ok_or_else(|| too_large(field))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "Kaos Polos").is_ok());
        assert_eq!(
            validate_required("name", "   "),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert!(validate_required("name", &"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("KAOS-001").is_ok());
        assert!(validate_sku("kaos_polos").is_ok());

        assert!(validate_sku("").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_search_query_trims() {
        assert_eq!(validate_search_query("  ord-2024 ").unwrap(), "ord-2024");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"x".repeat(MAX_QUERY_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("quantity", 0).is_ok());
        assert!(validate_non_negative("quantity", 5).is_ok());
        assert_eq!(
            validate_non_negative("quantity", -3),
            Err(ValidationError::Negative {
                field: "quantity".to_string(),
                value: -3
            })
        );
    }

    #[test]
    fn test_checked_sums() {
        assert_eq!(checked_sum("stock", [4, 6, 0]), Ok(10));
        assert_eq!(checked_sum("stock", Vec::new()), Ok(0));
        assert_eq!(
            checked_sum("stock", [i64::MAX, 1]),
            Err(ValidationError::TooLarge {
                field: "stock".to_string()
            })
        );
        assert!(checked_money_sum("subtotal", [Money::from_rupiah(i64::MAX), Money::from_rupiah(1)]).is_err());
    }

    #[test]
    fn test_validate_page_size() {
        assert!(validate_page_size(10).is_ok());
        assert!(validate_page_size(0).is_err());
    }
}
