//! # Catalog Editing
//!
//! Variant rows of the product form and the stock rollup written on save.
//!
//! ```text
//! Variants                     Product
//! ┌────────────────────────┐
//! │ Hitam / M   stock 4    │
//! │ Hitam / L   stock 6    │──► total_stock = 4 + 6 + 0 = 10 ──► product.stock
//! │ Putih / L   stock 0    │
//! └────────────────────────┘
//! ```
//!
//! Like the order functions, each edit returns a new list.

use tracing::debug;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::{Product, ProductVariant};
use crate::validation::{checked_sum, validate_non_negative, validate_required, validate_sku, ValidationResult};

/// A new variant row with a fresh id.
pub fn blank_variant() -> ProductVariant {
    ProductVariant {
        id: Uuid::new_v4().to_string(),
        color: String::new(),
        size: String::new(),
        stock: 0,
        sku: String::new(),
    }
}

pub fn add_variant(variants: &[ProductVariant]) -> Vec<ProductVariant> {
    let mut updated = variants.to_vec();
    updated.push(blank_variant());
    updated
}

fn update_variant<F>(variants: &[ProductVariant], id: &str, edit: F) -> CoreResult<Vec<ProductVariant>>
where
    F: FnOnce(&mut ProductVariant),
{
    let mut updated = variants.to_vec();
    let variant = updated
        .iter_mut()
        .find(|variant| variant.id == id)
        .ok_or_else(|| CoreError::not_found("Variant", id))?;
    edit(variant);
    Ok(updated)
}

/// Removes a variant by id.
pub fn remove_variant(variants: &[ProductVariant], id: &str) -> CoreResult<Vec<ProductVariant>> {
    if !variants.iter().any(|variant| variant.id == id) {
        return Err(CoreError::not_found("Variant", id));
    }
    Ok(variants.iter().filter(|variant| variant.id != id).cloned().collect())
}

pub fn set_variant_stock(
    variants: &[ProductVariant],
    id: &str,
    stock: i64,
) -> CoreResult<Vec<ProductVariant>> {
    validate_non_negative("stock", stock)?;
    update_variant(variants, id, |variant| variant.stock = stock)
}

/// Sets color and size of a variant.
pub fn set_variant_options(
    variants: &[ProductVariant],
    id: &str,
    color: &str,
    size: &str,
) -> CoreResult<Vec<ProductVariant>> {
    update_variant(variants, id, |variant| {
        variant.color = color.to_string();
        variant.size = size.to_string();
    })
}

pub fn set_variant_sku(variants: &[ProductVariant], id: &str, sku: &str) -> CoreResult<Vec<ProductVariant>> {
    validate_sku(sku)?;
    update_variant(variants, id, |variant| variant.sku = sku.trim().to_string())
}

/// Sum of variant stock.
///
/// ## Errors
/// `TooLarge` if the sum overflows.
pub fn total_stock(variants: &[ProductVariant]) -> ValidationResult<i64> {
    checked_sum("stock", variants.iter().map(|variant| variant.stock))
}

/// Product form submit: validates the product and rolls variant stock up.
///
/// ## Errors
/// - `Validation` for an empty name, bad SKU, or negative weight/stock
pub fn apply_variants(product: &Product, variants: Vec<ProductVariant>) -> CoreResult<Product> {
    validate_required("name", &product.name)?;
    validate_sku(&product.sku)?;
    validate_non_negative("weight", product.weight)?;
    for variant in &variants {
        validate_non_negative("stock", variant.stock)?;
    }

    let stock = total_stock(&variants)?;
    debug!(product_id = %product.id, variants = variants.len(), stock, "Rolled up variant stock");

    Ok(Product {
        variants,
        stock,
        ..product.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PriceTiers, ProductType};

    fn product() -> Product {
        Product {
            id: "1".to_string(),
            name: "Kaos Polos".to_string(),
            sku: "KAOS-01".to_string(),
            category: "Pakaian".to_string(),
            product_type: ProductType::BarangSendiri,
            description: String::new(),
            variants: Vec::new(),
            weight: 200,
            prices: PriceTiers::default(),
            stock: 0,
            image: None,
        }
    }

    #[test]
    fn test_add_variant_gets_unique_id() {
        let variants = add_variant(&add_variant(&[]));
        assert_eq!(variants.len(), 2);
        assert_ne!(variants[0].id, variants[1].id);
        assert_eq!(variants[1].stock, 0);
    }

    #[test]
    fn test_stock_rollup() {
        let variants = add_variant(&add_variant(&[]));
        let first = variants[0].id.clone();
        let second = variants[1].id.clone();

        let variants = set_variant_stock(&variants, &first, 4).unwrap();
        let variants = set_variant_stock(&variants, &second, 6).unwrap();
        assert_eq!(total_stock(&variants), Ok(10));

        let saved = apply_variants(&product(), variants).unwrap();
        assert_eq!(saved.stock, 10);
        assert_eq!(saved.variants.len(), 2);
    }

    #[test]
    fn test_stock_rollup_overflow_is_rejected() {
        let variants = add_variant(&add_variant(&[]));
        let first = variants[0].id.clone();
        let second = variants[1].id.clone();

        let variants = set_variant_stock(&variants, &first, i64::MAX).unwrap();
        let variants = set_variant_stock(&variants, &second, 1).unwrap();

        assert!(matches!(
            apply_variants(&product(), variants),
            Err(CoreError::Validation(crate::error::ValidationError::TooLarge { .. }))
        ));
    }

    #[test]
    fn test_unknown_variant_is_not_found() {
        let variants = add_variant(&[]);
        assert!(matches!(
            remove_variant(&variants, "missing"),
            Err(CoreError::RecordNotFound { .. })
        ));
        assert!(matches!(
            set_variant_stock(&variants, "missing", 1),
            Err(CoreError::RecordNotFound { .. })
        ));
    }

    #[test]
    fn test_negative_stock_rejected() {
        let variants = add_variant(&[]);
        let id = variants[0].id.clone();
        assert!(matches!(
            set_variant_stock(&variants, &id, -1),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_remove_variant() {
        let variants = add_variant(&add_variant(&[]));
        let id = variants[0].id.clone();

        let variants = remove_variant(&variants, &id).unwrap();
        assert_eq!(variants.len(), 1);
        assert!(variants.iter().all(|variant| variant.id != id));
    }

    #[test]
    fn test_variant_options_and_sku() {
        let variants = add_variant(&[]);
        let id = variants[0].id.clone();

        let variants = set_variant_options(&variants, &id, "Hitam", "XL").unwrap();
        let variants = set_variant_sku(&variants, &id, "KAOS-01-HTM-XL").unwrap();
        assert_eq!(variants[0].color, "Hitam");
        assert_eq!(variants[0].sku, "KAOS-01-HTM-XL");

        assert!(set_variant_sku(&variants, &id, "bad sku").is_err());
    }

    #[test]
    fn test_apply_variants_validates_product() {
        let mut unnamed = product();
        unnamed.name = "  ".to_string();
        assert!(apply_variants(&unnamed, Vec::new()).is_err());
    }
}
