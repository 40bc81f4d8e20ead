//! # Order Pricing
//!
//! The line-item aggregator behind the order form.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Form Calculation                             │
//! │                                                                         │
//! │  Edit qty / price ──► set_quantity / set_price ──► items[i].total       │
//! │                                                        │                │
//! │                                                        ▼                │
//! │                                  compute_subtotal(items) = Σ total      │
//! │                                                        │                │
//! │                                                        ▼                │
//! │   compute_total = subtotal - discount + insurance + shipping_cost       │
//! │                                                                         │
//! │  Every edit returns a NEW item list. Nothing here mutates the           │
//! │  caller's data, so a failed edit leaves the form untouched.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overflow
//! Totals use checked arithmetic. An edit whose line total, subtotal or
//! total would overflow `i64` fails with `ValidationError::TooLarge` and
//! leaves the items as they were.
//!
//! ## Removal Policy
//! [`remove_item`] allows removing the last remaining line and yields an
//! empty list. The "keep at least one row" rule belongs to the form layer.
//!
//! ## Example
//! ```rust
//! use backoffice_core::money::Money;
//! use backoffice_core::order::{add_item, compute_subtotal, compute_total, set_price, set_quantity, OrderAdjustments};
//!
//! let items = add_item(&[]);
//! let items = set_quantity(&items, 0, 2).unwrap();
//! let items = set_price(&items, 0, Money::from_rupiah(500_000)).unwrap();
//!
//! let adjustments = OrderAdjustments::new(
//!     Money::from_rupiah(15_000), // shipping
//!     Money::from_rupiah(10_000), // discount
//!     Money::from_rupiah(5_000),  // insurance
//! )
//! .unwrap();
//!
//! let subtotal = compute_subtotal(&items).unwrap();
//! assert_eq!(subtotal.rupiah(), 1_000_000);
//! assert_eq!(compute_total(subtotal, &adjustments).unwrap().rupiah(), 1_010_000);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{LineItem, Order};
use crate::validation::{
    checked_money_sum, checked_sum, too_large, validate_non_negative, validate_price, ValidationResult,
};

// =============================================================================
// Adjustments
// =============================================================================

/// Order-level terms applied after the line items are summed.
///
/// Deserializing runs the same non-negative checks as [`OrderAdjustments::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", try_from = "AdjustmentsDraft")]
pub struct OrderAdjustments {
    shipping_cost: Money,
    discount: Money,
    insurance: Money,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdjustmentsDraft {
    #[serde(default)]
    shipping_cost: Money,
    #[serde(default)]
    discount: Money,
    #[serde(default)]
    insurance: Money,
}

impl TryFrom<AdjustmentsDraft> for OrderAdjustments {
    type Error = ValidationError;

    fn try_from(draft: AdjustmentsDraft) -> ValidationResult<Self> {
        OrderAdjustments::new(draft.shipping_cost, draft.discount, draft.insurance)
    }
}

impl OrderAdjustments {
    /// Creates adjustments, rejecting any negative amount.
    pub fn new(shipping_cost: Money, discount: Money, insurance: Money) -> ValidationResult<Self> {
        validate_price("shipping cost", shipping_cost)?;
        validate_price("discount", discount)?;
        validate_price("insurance", insurance)?;

        Ok(OrderAdjustments {
            shipping_cost,
            discount,
            insurance,
        })
    }

    pub fn with_shipping_cost(self, shipping_cost: Money) -> ValidationResult<Self> {
        validate_price("shipping cost", shipping_cost)?;
        Ok(OrderAdjustments {
            shipping_cost,
            ..self
        })
    }

    pub fn with_discount(self, discount: Money) -> ValidationResult<Self> {
        validate_price("discount", discount)?;
        Ok(OrderAdjustments { discount, ..self })
    }

    pub fn with_insurance(self, insurance: Money) -> ValidationResult<Self> {
        validate_price("insurance", insurance)?;
        Ok(OrderAdjustments { insurance, ..self })
    }

    #[inline]
    pub fn shipping_cost(&self) -> Money {
        self.shipping_cost
    }

    #[inline]
    pub fn discount(&self) -> Money {
        self.discount
    }

    #[inline]
    pub fn insurance(&self) -> Money {
        self.insurance
    }
}

// =============================================================================
// Line Item Operations
// =============================================================================

/// Copies `items`, applies `edit` to the row at `index` and re-derives its total.
fn update_at<F>(items: &[LineItem], index: usize, edit: F) -> CoreResult<Vec<LineItem>>
where
    F: FnOnce(&mut LineItem),
{
    if index >= items.len() {
        return Err(CoreError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }

    let mut updated = items.to_vec();
    let item = &mut updated[index];
    edit(item);
    item.total = item.expected_total()?;
    Ok(updated)
}

/// Sets the quantity of one line and recomputes its total.
///
/// ## Errors
/// - `Validation` if `quantity < 0`
/// - `IndexOutOfRange` if there is no line at `index`
pub fn set_quantity(items: &[LineItem], index: usize, quantity: i64) -> CoreResult<Vec<LineItem>> {
    validate_non_negative("quantity", quantity)?;
    update_at(items, index, |item| item.quantity = quantity)
}

/// Sets the unit price of one line and recomputes its total.
///
/// ## Errors
/// - `Validation` if `price < 0`
/// - `IndexOutOfRange` if there is no line at `index`
pub fn set_price(items: &[LineItem], index: usize, price: Money) -> CoreResult<Vec<LineItem>> {
    validate_price("price", price)?;
    update_at(items, index, |item| item.price = price)
}

/// Sets the unit weight (grams) of one line.
pub fn set_weight(items: &[LineItem], index: usize, weight: i64) -> CoreResult<Vec<LineItem>> {
    validate_non_negative("weight", weight)?;
    update_at(items, index, |item| item.weight = weight)
}

/// Points a line at a product, e.g. after picking from the product list.
pub fn set_product(
    items: &[LineItem],
    index: usize,
    product_id: &str,
    name: &str,
) -> CoreResult<Vec<LineItem>> {
    update_at(items, index, |item| {
        item.product_id = product_id.to_string();
        item.name = name.to_string();
    })
}

/// Sets the variant label of one line.
pub fn set_variant(items: &[LineItem], index: usize, variant: &str) -> CoreResult<Vec<LineItem>> {
    update_at(items, index, |item| item.variant = variant.to_string())
}

/// Appends a blank line (quantity 1, price 0, weight 0).
pub fn add_item(items: &[LineItem]) -> Vec<LineItem> {
    let mut updated = items.to_vec();
    updated.push(LineItem::blank());
    updated
}

/// Removes the line at `index`.
///
/// Removing the only line is allowed and returns an empty list.
pub fn remove_item(items: &[LineItem], index: usize) -> CoreResult<Vec<LineItem>> {
    if index >= items.len() {
        return Err(CoreError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }

    let mut updated = items.to_vec();
    updated.remove(index);
    Ok(updated)
}

// =============================================================================
// Totals
// =============================================================================

/// Sum of line totals. An empty list is zero.
///
/// ## Errors
/// `Validation(TooLarge)` if the sum overflows.
pub fn compute_subtotal(items: &[LineItem]) -> CoreResult<Money> {
    Ok(checked_money_sum("subtotal", items.iter().map(|item| item.total))?)
}

/// `subtotal - discount + insurance + shipping_cost`.
///
/// Not clamped: a discount larger than everything else gives a negative
/// total, and the form shows it as such. Overflow is an error, never a
/// wrapped value.
pub fn compute_total(subtotal: Money, adjustments: &OrderAdjustments) -> CoreResult<Money> {
    let total = subtotal
        .checked_sub(adjustments.discount)
        .and_then(|value| value.checked_add(adjustments.insurance))
        .and_then(|value| value.checked_add(adjustments.shipping_cost))
        .ok_or_else(|| too_large("total"))?;
    Ok(total)
}

/// Shipping weight in grams: `Σ quantity × unit weight`.
pub fn compute_weight(items: &[LineItem]) -> CoreResult<i64> {
    let weights = items
        .iter()
        .map(LineItem::line_weight)
        .collect::<ValidationResult<Vec<i64>>>()?;
    Ok(checked_sum("weight", weights)?)
}

/// Every derived figure of the form at once.
pub fn compute_summary(items: &[LineItem], adjustments: &OrderAdjustments) -> CoreResult<OrderSummary> {
    let subtotal = compute_subtotal(items)?;

    Ok(OrderSummary {
        item_count: items.len(),
        total_quantity: checked_sum("quantity", items.iter().map(|item| item.quantity))?,
        subtotal,
        discount: adjustments.discount,
        insurance: adjustments.insurance,
        shipping_cost: adjustments.shipping_cost,
        weight: compute_weight(items)?,
        total: compute_total(subtotal, adjustments)?,
    })
}

// =============================================================================
// Consistency Checks
// =============================================================================

fn check(field: &str, expected: Money, actual: Money) -> CoreResult<()> {
    if expected != actual {
        return Err(CoreError::StateInconsistency {
            field: field.to_string(),
            expected: expected.rupiah(),
            actual: actual.rupiah(),
        });
    }
    Ok(())
}

/// Checks every line total against `quantity × price`.
pub fn verify_items(items: &[LineItem]) -> CoreResult<()> {
    for (index, item) in items.iter().enumerate() {
        check(&format!("products[{}].total", index), item.expected_total()?, item.total)?;
    }
    Ok(())
}

/// Checks an order snapshot: line totals, then subtotal, then total.
pub fn verify_order(order: &Order) -> CoreResult<()> {
    verify_items(&order.products)?;

    let subtotal = compute_subtotal(&order.products)?;
    check("subtotal", subtotal, order.subtotal)?;

    let adjustments = OrderAdjustments {
        shipping_cost: order.shipping_cost,
        discount: order.discount,
        insurance: order.insurance,
    };
    check("total", compute_total(subtotal, &adjustments)?, order.total)
}

// =============================================================================
// Order Aggregate
// =============================================================================

/// Totals block shown under the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub discount: Money,
    pub insurance: Money,
    pub shipping_cost: Money,
    /// Grams.
    pub weight: i64,
    pub total: Money,
}

/// Line items plus adjustments. Subtotal and total are always derived.
///
/// Each edit runs the matching pure function and only replaces the items
/// when it succeeds and the totals stay computable. Deserializing goes
/// through [`OrderAggregate::with_items`], so a payload with a stale line
/// total is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "AggregateDraft")]
pub struct OrderAggregate {
    items: Vec<LineItem>,
    adjustments: OrderAdjustments,
}

/// Unchecked wire shape of [`OrderAggregate`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AggregateDraft {
    items: Vec<LineItem>,
    #[serde(default)]
    adjustments: OrderAdjustments,
}

impl TryFrom<AggregateDraft> for OrderAggregate {
    type Error = CoreError;

    fn try_from(draft: AggregateDraft) -> CoreResult<Self> {
        OrderAggregate::with_items(draft.items, draft.adjustments)
    }
}

impl OrderAggregate {
    /// Aggregate with one blank line, like a new order form.
    pub fn new() -> Self {
        OrderAggregate {
            items: vec![LineItem::blank()],
            adjustments: OrderAdjustments::default(),
        }
    }

    /// Builds an aggregate from existing items and adjustments.
    ///
    /// ## Errors
    /// - `StateInconsistency` if a line total is not `quantity × price`
    /// - `Validation(TooLarge)` if the totals overflow
    pub fn with_items(items: Vec<LineItem>, adjustments: OrderAdjustments) -> CoreResult<Self> {
        verify_items(&items)?;
        compute_summary(&items, &adjustments)?;
        Ok(OrderAggregate { items, adjustments })
    }

    /// Loads an existing order for editing.
    ///
    /// Line totals are re-derived from quantity and price, so a stale
    /// snapshot total never leaks into the form.
    pub fn from_order(order: &Order) -> CoreResult<Self> {
        let adjustments = OrderAdjustments::new(order.shipping_cost, order.discount, order.insurance)?;
        let items = order
            .products
            .iter()
            .map(|item| -> CoreResult<LineItem> {
                Ok(LineItem {
                    total: item.expected_total()?,
                    ..item.clone()
                })
            })
            .collect::<CoreResult<Vec<LineItem>>>()?;

        OrderAggregate::with_items(items, adjustments)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn adjustments(&self) -> &OrderAdjustments {
        &self.adjustments
    }

    /// Replaces the state only if the totals of the new state compute.
    fn commit(&mut self, items: Vec<LineItem>, adjustments: OrderAdjustments) -> CoreResult<()> {
        compute_summary(&items, &adjustments)?;
        self.items = items;
        self.adjustments = adjustments;
        Ok(())
    }

    pub fn set_quantity(&mut self, index: usize, quantity: i64) -> CoreResult<()> {
        let items = set_quantity(&self.items, index, quantity)?;
        self.commit(items, self.adjustments)
    }

    pub fn set_price(&mut self, index: usize, price: Money) -> CoreResult<()> {
        let items = set_price(&self.items, index, price)?;
        self.commit(items, self.adjustments)
    }

    pub fn set_weight(&mut self, index: usize, weight: i64) -> CoreResult<()> {
        let items = set_weight(&self.items, index, weight)?;
        self.commit(items, self.adjustments)
    }

    pub fn set_product(&mut self, index: usize, product_id: &str, name: &str) -> CoreResult<()> {
        self.items = set_product(&self.items, index, product_id, name)?;
        Ok(())
    }

    pub fn set_variant(&mut self, index: usize, variant: &str) -> CoreResult<()> {
        self.items = set_variant(&self.items, index, variant)?;
        Ok(())
    }

    /// Appends a blank row; zero price and weight cannot overflow a total.
    pub fn add_item(&mut self) {
        self.items = add_item(&self.items);
    }

    pub fn remove_item(&mut self, index: usize) -> CoreResult<()> {
        let items = remove_item(&self.items, index)?;
        self.commit(items, self.adjustments)
    }

    pub fn set_adjustments(&mut self, adjustments: OrderAdjustments) -> CoreResult<()> {
        self.commit(self.items.clone(), adjustments)
    }

    pub fn subtotal(&self) -> CoreResult<Money> {
        compute_subtotal(&self.items)
    }

    pub fn total(&self) -> CoreResult<Money> {
        compute_total(self.subtotal()?, &self.adjustments)
    }

    pub fn weight(&self) -> CoreResult<i64> {
        compute_weight(&self.items)
    }

    /// Totals for display.
    pub fn summary(&self) -> CoreResult<OrderSummary> {
        compute_summary(&self.items, &self.adjustments)
    }

    /// Re-checks the line-total invariant.
    pub fn verify(&self) -> CoreResult<()> {
        verify_items(&self.items)
    }

    /// Writes items, adjustments and derived totals into a copy of `order`.
    pub fn apply_to(&self, order: &Order) -> CoreResult<Order> {
        let summary = self.summary()?;
        Ok(Order {
            products: self.items.clone(),
            shipping_cost: summary.shipping_cost,
            discount: summary.discount,
            insurance: summary.insurance,
            weight: summary.weight,
            subtotal: summary.subtotal,
            total: summary.total,
            ..order.clone()
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Customer, CustomerCategory, OrderStatus, PaymentStatus, Warehouse};
    use chrono::NaiveDate;

    fn item(quantity: i64, price: i64) -> LineItem {
        LineItem::new("P", "Produk", "", quantity, Money::from_rupiah(price), 0).unwrap()
    }

    fn adjustments(shipping: i64, discount: i64, insurance: i64) -> OrderAdjustments {
        OrderAdjustments::new(
            Money::from_rupiah(shipping),
            Money::from_rupiah(discount),
            Money::from_rupiah(insurance),
        )
        .unwrap()
    }

    fn sample_order(products: Vec<LineItem>) -> Order {
        Order {
            id: "1".to_string(),
            order_number: "ORD-2024-001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            customer: Customer {
                id: "1".to_string(),
                name: "John Doe".to_string(),
                category: CustomerCategory::Customer,
                province: "Jawa Barat".to_string(),
                city: "Bandung".to_string(),
                district: "Coblong".to_string(),
                village: "Dago".to_string(),
                postal_code: "40135".to_string(),
                email: "john@example.com".to_string(),
                phone: "081234567890".to_string(),
                address: "Jl. Dago No. 123".to_string(),
            },
            products,
            warehouse: Warehouse {
                id: "1".to_string(),
                name: "Gudang Utama".to_string(),
                origin: "Bandung".to_string(),
                phone: "081234567890".to_string(),
                address: "Jl. Soekarno Hatta".to_string(),
                description: None,
                active: true,
            },
            sales_channel: "Shopee".to_string(),
            shipping_cost: Money::from_rupiah(15_000),
            weight: 0,
            insurance: Money::from_rupiah(5_000),
            discount: Money::from_rupiah(10_000),
            subtotal: Money::zero(),
            total: Money::zero(),
            payment_status: PaymentStatus::Lunas,
            order_status: OrderStatus::Selesai,
            note: None,
            receiving_account: None,
        }
    }

    #[test]
    fn test_sample_order_totals() {
        let items = vec![item(2, 500_000)];
        let subtotal = compute_subtotal(&items).unwrap();

        assert_eq!(subtotal.rupiah(), 1_000_000);
        assert_eq!(
            compute_total(subtotal, &adjustments(15_000, 10_000, 5_000)).unwrap().rupiah(),
            1_010_000
        );
    }

    #[test]
    fn test_setters_commute() {
        let items = add_item(&[]);
        let quantities = [0, 1, 7, 1_000_000, 1_000_000_000];
        let prices = [0, 1, 12_500, 5_000_000_000];

        for &quantity in &quantities {
            for &price in &prices {
                let price = Money::from_rupiah(price);

                let a = set_quantity(&items, 0, quantity).unwrap();
                let a = set_price(&a, 0, price).unwrap();

                let b = set_price(&items, 0, price).unwrap();
                let b = set_quantity(&b, 0, quantity).unwrap();

                assert_eq!(a, b, "quantity {} price {}", quantity, price);
                assert_eq!(a[0].total.rupiah(), quantity * price.rupiah());
            }
        }
    }

    #[test]
    fn test_overflowing_line_total_is_rejected() {
        let items = set_price(&add_item(&[]), 0, Money::from_rupiah(5_000_000_000)).unwrap();

        let err = set_quantity(&items, 0, 2_000_000_000_000).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::TooLarge { ref field }) if field == "total"
        ));
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn test_overflowing_subtotal_and_total_are_rejected() {
        let half = Money::from_rupiah(i64::MAX / 2 + 1);
        let items = vec![item(1, half.rupiah()), item(1, half.rupiah())];

        assert!(matches!(
            compute_subtotal(&items),
            Err(CoreError::Validation(ValidationError::TooLarge { ref field })) if field == "subtotal"
        ));
        assert!(matches!(
            compute_total(Money::from_rupiah(i64::MAX), &adjustments(1, 0, 0)),
            Err(CoreError::Validation(ValidationError::TooLarge { ref field })) if field == "total"
        ));
        assert!(OrderAggregate::with_items(items, OrderAdjustments::default()).is_err());
    }

    #[test]
    fn test_setters_do_not_touch_input() {
        let items = vec![item(1, 100)];
        let updated = set_quantity(&items, 0, 3).unwrap();

        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[0].total.rupiah(), 100);
        assert_eq!(updated[0].total.rupiah(), 300);
    }

    #[test]
    fn test_negative_input_is_rejected_not_clamped() {
        let items = vec![item(1, 100)];

        let err = set_quantity(&items, 0, -1).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let err = set_price(&items, 0, Money::from_rupiah(-5)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        assert!(OrderAdjustments::default()
            .with_discount(Money::from_rupiah(-1))
            .is_err());
    }

    #[test]
    fn test_bad_index_is_index_out_of_range() {
        let items = vec![item(1, 100)];

        assert!(matches!(
            set_price(&items, 1, Money::from_rupiah(1)),
            Err(CoreError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(matches!(
            remove_item(&items, 5),
            Err(CoreError::IndexOutOfRange { index: 5, len: 1 })
        ));
        assert!(matches!(
            remove_item(&[], 0),
            Err(CoreError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_add_item_defaults() {
        let items = add_item(&[item(2, 10)]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], LineItem::blank());
        assert_eq!(items[1].quantity, 1);
    }

    #[test]
    fn test_remove_last_item_yields_empty() {
        let items = vec![item(1, 100)];
        let items = remove_item(&items, 0).unwrap();

        assert!(items.is_empty());
        assert!(compute_subtotal(&items).unwrap().is_zero());
    }

    #[test]
    fn test_remove_keeps_order() {
        let items = vec![item(1, 1), item(1, 2), item(1, 3)];
        let items = remove_item(&items, 1).unwrap();

        let prices: Vec<i64> = items.iter().map(|i| i.price.rupiah()).collect();
        assert_eq!(prices, vec![1, 3]);
    }

    #[test]
    fn test_subtotal_ignores_order() {
        let items = vec![item(2, 300), item(1, 1_000), item(5, 7)];
        let mut reversed = items.clone();
        reversed.reverse();

        assert!(compute_subtotal(&[]).unwrap().is_zero());
        assert_eq!(compute_subtotal(&items), compute_subtotal(&reversed));
        assert_eq!(compute_subtotal(&items).unwrap().rupiah(), 1_635);
    }

    #[test]
    fn test_total_may_go_negative() {
        let total = compute_total(Money::from_rupiah(1_000), &adjustments(100, 5_000, 50)).unwrap();
        assert_eq!(total.rupiah(), 1_000 - 5_000 + 50 + 100);
        assert!(total.is_negative());
    }

    #[test]
    fn test_compute_weight() {
        let items = vec![
            LineItem::new("A", "A", "", 3, Money::zero(), 250).unwrap(),
            LineItem::new("B", "B", "", 1, Money::zero(), 1_000).unwrap(),
        ];
        assert_eq!(compute_weight(&items), Ok(1_750));
    }

    #[test]
    fn test_verify_items_detects_drift() {
        let mut items = vec![item(2, 100)];
        assert!(verify_items(&items).is_ok());

        items[0].total = Money::from_rupiah(150);
        match verify_items(&items) {
            Err(CoreError::StateInconsistency {
                field,
                expected,
                actual,
            }) => {
                assert_eq!(field, "products[0].total");
                assert_eq!(expected, 200);
                assert_eq!(actual, 150);
            }
            other => panic!("expected StateInconsistency, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_order_detects_stale_subtotal() {
        // Subtotal 500000 with a 2 × 500000 line
        let mut order = sample_order(vec![item(2, 500_000)]);
        order.subtotal = Money::from_rupiah(500_000);
        order.total = Money::from_rupiah(510_000);

        assert!(matches!(
            verify_order(&order),
            Err(CoreError::StateInconsistency { ref field, .. }) if field == "subtotal"
        ));
    }

    #[test]
    fn test_aggregate_apply_to_roundtrip() {
        let order = sample_order(vec![item(2, 500_000)]);
        let aggregate = OrderAggregate::from_order(&order).unwrap();
        let finalized = aggregate.apply_to(&order).unwrap();

        assert_eq!(finalized.subtotal.rupiah(), 1_000_000);
        assert_eq!(finalized.total.rupiah(), 1_010_000);
        assert!(verify_order(&finalized).is_ok());
        assert_eq!(finalized.order_number, order.order_number);
    }

    #[test]
    fn test_aggregate_failed_edit_keeps_state() {
        let mut aggregate = OrderAggregate::new();
        aggregate.set_price(0, Money::from_rupiah(1_000)).unwrap();

        assert!(aggregate.set_quantity(0, -4).is_err());
        assert_eq!(aggregate.items()[0].quantity, 1);
        assert_eq!(aggregate.total().unwrap().rupiah(), 1_000);
    }

    #[test]
    fn test_aggregate_overflowing_edit_keeps_state() {
        let mut aggregate = OrderAggregate::new();
        aggregate.set_price(0, Money::from_rupiah(5_000_000_000)).unwrap();
        let before = aggregate.clone();

        let err = aggregate.set_quantity(0, 2_000_000_000_000).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::TooLarge { .. })));
        assert_eq!(aggregate, before);
        assert_eq!(aggregate.total().unwrap().rupiah(), 5_000_000_000);

        // Each line fits, but their sum does not
        let mut aggregate = OrderAggregate::new();
        aggregate.set_price(0, Money::from_rupiah(i64::MAX / 2 + 1)).unwrap();
        aggregate.add_item();
        let before = aggregate.clone();
        assert!(aggregate.set_price(1, Money::from_rupiah(i64::MAX / 2 + 1)).is_err());
        assert_eq!(aggregate, before);

        // Shipping pushing the total over
        let mut aggregate = OrderAggregate::new();
        aggregate.set_price(0, Money::from_rupiah(i64::MAX)).unwrap();
        let err = aggregate
            .set_adjustments(adjustments(1, 0, 0))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::TooLarge { .. })));
        assert!(aggregate.adjustments().shipping_cost().is_zero());
    }

    #[test]
    fn test_aggregate_deserialize_checks_line_totals() {
        let stale = r#"{
            "items": [{
                "productId": "P", "name": "Produk", "variant": "",
                "quantity": 2, "price": 500000, "weight": 0, "total": 1
            }],
            "adjustments": { "shippingCost": 0, "discount": 0, "insurance": 0 }
        }"#;
        let err = serde_json::from_str::<OrderAggregate>(stale).unwrap_err();
        assert!(err.to_string().contains("products[0].total"));

        let fresh = stale.replace("\"total\": 1", "\"total\": 1000000");
        let aggregate: OrderAggregate = serde_json::from_str(&fresh).unwrap();
        assert_eq!(aggregate.subtotal().unwrap().rupiah(), 1_000_000);

        let json = serde_json::to_string(&aggregate).unwrap();
        assert_eq!(serde_json::from_str::<OrderAggregate>(&json).unwrap(), aggregate);
    }

    #[test]
    fn test_adjustments_deserialize_rejects_negative() {
        let err = serde_json::from_str::<OrderAdjustments>(r#"{"shippingCost": 0, "discount": -500, "insurance": 0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("discount"));

        let adjustments: OrderAdjustments = serde_json::from_str(r#"{"discount": 500}"#).unwrap();
        assert_eq!(adjustments.discount().rupiah(), 500);
        assert!(adjustments.shipping_cost().is_zero());
    }

    #[test]
    fn test_aggregate_summary() {
        let mut aggregate =
            OrderAggregate::with_items(vec![item(2, 500_000)], adjustments(15_000, 10_000, 5_000))
                .unwrap();
        aggregate.set_weight(0, 400).unwrap();

        let summary = aggregate.summary().unwrap();
        assert_eq!(summary.item_count, 1);
        assert_eq!(summary.total_quantity, 2);
        assert_eq!(summary.weight, 800);
        assert_eq!(summary.total.rupiah(), 1_010_000);
    }
}
