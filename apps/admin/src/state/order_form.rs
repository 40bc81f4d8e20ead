//! # Order Form State
//!
//! The add/edit order screen. Every edit goes through the core
//! [`OrderAggregate`], so line totals, subtotal and total are never typed
//! in or cached by the form.
//!
//! ## Form Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Form Operations                                │
//! │                                                                         │
//! │  Frontend Action          Form Method             Aggregate Change      │
//! │  ───────────────          ───────────             ────────────────      │
//! │                                                                         │
//! │  Pick product ───────────► select_product() ────► id, name, price, kg   │
//! │                                                                         │
//! │  Change Quantity ────────► set_quantity() ──────► items[i].qty = n      │
//! │                                                                         │
//! │  "+ Tambah Produk" ──────► add_item() ──────────► items.push(blank)     │
//! │                                                                         │
//! │  Trash icon ─────────────► remove_item() ───────► items.remove(i)       │
//! │                            (refused on the last row)                    │
//! │                                                                         │
//! │  Simpan ─────────────────► submit(order) ───────► Order with totals     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use backoffice_core::order::verify_order;
use backoffice_core::{LineItem, Money, Order, OrderAggregate, OrderSummary, Product};
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};

/// State of one open order form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    aggregate: OrderAggregate,
}

impl Default for OrderForm {
    fn default() -> Self {
        OrderForm::new()
    }
}

impl OrderForm {
    /// Empty "Tambah Order" form with one blank row.
    pub fn new() -> Self {
        OrderForm {
            aggregate: OrderAggregate::new(),
        }
    }

    /// "Edit Order" form loaded from an existing order.
    pub fn edit(order: &Order) -> ApiResult<Self> {
        let aggregate = OrderAggregate::from_order(order)?;
        debug!(order_number = %order.order_number, items = aggregate.items().len(), "Loaded order into form");
        Ok(OrderForm { aggregate })
    }

    pub fn items(&self) -> &[LineItem] {
        self.aggregate.items()
    }

    pub fn summary(&self) -> ApiResult<OrderSummary> {
        Ok(self.aggregate.summary()?)
    }

    pub fn subtotal(&self) -> ApiResult<Money> {
        Ok(self.aggregate.subtotal()?)
    }

    pub fn total(&self) -> ApiResult<Money> {
        Ok(self.aggregate.total()?)
    }

    /// Fills a row from a catalog product at its regular price.
    ///
    /// The row keeps its quantity. Either every field changes or none does.
    pub fn select_product(&mut self, index: usize, product: &Product) -> ApiResult<()> {
        let mut next = self.aggregate.clone();
        next.set_product(index, &product.id, &product.name)?;
        next.set_price(index, product.prices.normal)?;
        next.set_weight(index, product.weight)?;
        self.aggregate = next;
        Ok(())
    }

    pub fn set_variant(&mut self, index: usize, variant: &str) -> ApiResult<()> {
        Ok(self.aggregate.set_variant(index, variant)?)
    }

    pub fn set_quantity(&mut self, index: usize, quantity: i64) -> ApiResult<()> {
        Ok(self.aggregate.set_quantity(index, quantity)?)
    }

    pub fn set_price(&mut self, index: usize, price: Money) -> ApiResult<()> {
        Ok(self.aggregate.set_price(index, price)?)
    }

    pub fn add_item(&mut self) {
        self.aggregate.add_item();
    }

    /// Whether the trash icon is enabled: an order keeps at least one row.
    pub fn can_remove_item(&self) -> bool {
        self.aggregate.items().len() > 1
    }

    pub fn remove_item(&mut self, index: usize) -> ApiResult<()> {
        if !self.can_remove_item() {
            return Err(ApiError::form_rule("Order must keep at least one product"));
        }
        Ok(self.aggregate.remove_item(index)?)
    }

    pub fn set_shipping_cost(&mut self, amount: Money) -> ApiResult<()> {
        let adjustments = self.aggregate.adjustments().with_shipping_cost(amount)?;
        Ok(self.aggregate.set_adjustments(adjustments)?)
    }

    pub fn set_discount(&mut self, amount: Money) -> ApiResult<()> {
        let adjustments = self.aggregate.adjustments().with_discount(amount)?;
        Ok(self.aggregate.set_adjustments(adjustments)?)
    }

    pub fn set_insurance(&mut self, amount: Money) -> ApiResult<()> {
        let adjustments = self.aggregate.adjustments().with_insurance(amount)?;
        Ok(self.aggregate.set_adjustments(adjustments)?)
    }

    /// Writes the form into `order` and checks the result.
    ///
    /// ## Errors
    /// - `VALIDATION_ERROR` if a row has no product
    /// - `INTERNAL` if the derived totals fail verification
    pub fn submit(&self, order: &Order) -> ApiResult<Order> {
        if let Some(index) = self.items().iter().position(|item| item.product_id.is_empty()) {
            return Err(ApiError::validation(format!("Row {} has no product", index + 1)));
        }

        self.aggregate.verify()?;
        let saved = self.aggregate.apply_to(order)?;
        verify_order(&saved)?;

        info!(
            order_number = %saved.order_number,
            items = saved.products.len(),
            total = saved.total.rupiah(),
            "Order form submitted"
        );
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::fixtures;

    fn headset() -> Product {
        fixtures::products()
            .into_iter()
            .find(|product| product.sku == "HS-01")
            .unwrap()
    }

    #[test]
    fn test_new_form_has_one_row() {
        let form = OrderForm::new();
        assert_eq!(form.items().len(), 1);
        assert_eq!(form.items()[0].quantity, 1);
        assert!(!form.can_remove_item());
    }

    #[test]
    fn test_order_total_scenario() {
        let mut form = OrderForm::new();
        form.select_product(0, &headset()).unwrap();
        form.set_quantity(0, 2).unwrap();
        form.set_discount(Money::from_rupiah(10_000)).unwrap();
        form.set_insurance(Money::from_rupiah(5_000)).unwrap();
        form.set_shipping_cost(Money::from_rupiah(15_000)).unwrap();

        assert_eq!(form.items()[0].total.rupiah(), 1_000_000);
        assert_eq!(form.subtotal().unwrap().rupiah(), 1_000_000);
        assert_eq!(form.total().unwrap().rupiah(), 1_010_000);
        assert_eq!(form.summary().unwrap().weight, 300);
    }

    #[test]
    fn test_default_form_matches_new() {
        let form = OrderForm::default();
        assert_eq!(form, OrderForm::new());
        assert_eq!(form.items().len(), 1);
        assert!(!form.can_remove_item());
    }

    #[test]
    fn test_overflowing_quantity_is_a_validation_error() {
        let mut form = OrderForm::new();
        form.set_price(0, Money::from_rupiah(5_000_000_000)).unwrap();

        let err = form.set_quantity(0, 2_000_000_000_000).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(form.items()[0].quantity, 1);
        assert_eq!(form.total().unwrap().rupiah(), 5_000_000_000);
    }

    #[test]
    fn test_last_row_cannot_be_removed() {
        let mut form = OrderForm::new();
        let err = form.remove_item(0).unwrap_err();
        assert_eq!(err.code, ErrorCode::FormRule);
        assert_eq!(form.items().len(), 1);

        form.add_item();
        assert!(form.can_remove_item());
        form.remove_item(1).unwrap();
        assert_eq!(form.items().len(), 1);
    }

    #[test]
    fn test_bad_index_and_negative_input() {
        let mut form = OrderForm::new();

        let err = form.set_quantity(3, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::IndexOutOfRange);

        let err = form.set_price(0, Money::from_rupiah(-1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = form.set_discount(Money::from_rupiah(-500)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(form.summary().unwrap().discount.is_zero());
    }

    #[test]
    fn test_select_product_is_all_or_nothing() {
        let mut form = OrderForm::new();
        let before = form.clone();

        assert!(form.select_product(5, &headset()).is_err());
        assert_eq!(form, before);
    }

    #[test]
    fn test_submit_requires_products() {
        let order = fixtures::orders(1).unwrap().remove(0);
        let form = OrderForm::new();

        let err = form.submit(&order).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_edit_and_submit_roundtrip() {
        let order = fixtures::orders(1).unwrap().remove(0);
        let mut form = OrderForm::edit(&order).unwrap();

        form.add_item();
        form.select_product(1, &headset()).unwrap();
        form.set_variant(1, "Putih").unwrap();

        let saved = form.submit(&order).unwrap();
        assert_eq!(saved.products.len(), 2);
        assert_eq!(saved.subtotal, order.subtotal + Money::from_rupiah(500_000));
        assert_eq!(saved.total, saved.subtotal + order.shipping_cost);
        assert_eq!(saved.order_number, order.order_number);
    }
}
