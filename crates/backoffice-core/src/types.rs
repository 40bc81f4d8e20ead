//! # Domain Types
//!
//! Records shown by the order, product and customer views.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Order       │   │    Product      │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  order_number   │   │  sku            │   │  name, phone    │       │
//! │  │  customer ──────┼──►│  category       │   │  email          │       │
//! │  │  products[]     │   │  variants[]     │   │  category       │       │
//! │  │  subtotal/total │   │  prices         │   │  address...     │       │
//! │  └───────┬─────────┘   └─────────────────┘   └─────────────────┘       │
//! │          │                                                              │
//! │  ┌───────▼─────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │ PaymentStatus   │   │ CustomerCategory│       │
//! │  │  quantity×price │   │  lunas, cicilan │   │  reseller, agen │       │
//! │  │  = total        │   │  belum_dibayar  │   │  member, ...    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Wire names follow the dashboard frontend: camelCase fields and
//! snake_case Indonesian enum values (`belum_dibayar`, `barang_sendiri`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::table::Record;
use crate::validation::{checked_sum, too_large, validate_non_negative, validate_price, ValidationResult};

// =============================================================================
// Badge Variant
// =============================================================================

/// Visual style of a status badge in the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
    Success,
    Warning,
}

// =============================================================================
// Line Item
// =============================================================================

/// One product/variant entry within an order.
///
/// ## Invariant
/// `total == price × quantity`. The functions in [`crate::order`] keep it
/// true; [`crate::order::verify_items`] reports when it is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Opaque product reference (empty until a product is picked).
    pub product_id: String,
    /// Display name.
    pub name: String,
    /// Variant label, e.g. "Hitam / XL".
    pub variant: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price.
    pub price: Money,
    /// Unit weight in grams.
    pub weight: i64,
    /// Line total (derived).
    pub total: Money,
}

impl LineItem {
    /// Creates a line item with its total already derived.
    ///
    /// ## Example
    /// ```rust
    /// use backoffice_core::{LineItem, Money};
    ///
    /// let item = LineItem::new("P-1", "Kaos Polos", "Hitam / L", 2, Money::from_rupiah(75_000), 200)
    ///     .unwrap();
    /// assert_eq!(item.total.rupiah(), 150_000);
    /// ```
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        variant: impl Into<String>,
        quantity: i64,
        price: Money,
        weight: i64,
    ) -> ValidationResult<Self> {
        validate_non_negative("quantity", quantity)?;
        validate_price("price", price)?;
        validate_non_negative("weight", weight)?;

        let mut item = LineItem {
            product_id: product_id.into(),
            name: name.into(),
            variant: variant.into(),
            quantity,
            price,
            weight,
            total: Money::zero(),
        };
        item.total = item.expected_total()?;
        Ok(item)
    }

    /// A freshly added form row: quantity 1, everything else zero.
    pub fn blank() -> Self {
        LineItem {
            product_id: String::new(),
            name: String::new(),
            variant: String::new(),
            quantity: 1,
            price: Money::zero(),
            weight: 0,
            total: Money::zero(),
        }
    }

    /// What `total` should be: `price × quantity`.
    ///
    /// ## Errors
    /// `TooLarge` when the product does not fit in an `i64`.
    #[inline]
    pub fn expected_total(&self) -> ValidationResult<Money> {
        self.price
            .checked_mul_quantity(self.quantity)
            .ok_or_else(|| too_large("total"))
    }

    /// Shipping weight of the whole line in grams.
    #[inline]
    pub fn line_weight(&self) -> ValidationResult<i64> {
        self.weight
            .checked_mul(self.quantity)
            .ok_or_else(|| too_large("weight"))
    }
}

impl Default for LineItem {
    fn default() -> Self {
        LineItem::blank()
    }
}

// =============================================================================
// Payment / Order Status
// =============================================================================

/// Payment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Fully paid.
    Lunas,
    /// Paid in instalments, balance outstanding.
    Cicilan,
    /// Nothing paid yet.
    #[default]
    BelumDibayar,
    /// Cancelled.
    Dibatalkan,
}

impl PaymentStatus {
    /// Display text for the status badge.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Lunas => "Lunas",
            PaymentStatus::Cicilan => "Cicilan",
            PaymentStatus::BelumDibayar => "Belum Dibayar",
            PaymentStatus::Dibatalkan => "Dibatalkan",
        }
    }

    /// Badge style in the order table.
    pub const fn badge(&self) -> BadgeVariant {
        match self {
            PaymentStatus::Lunas => BadgeVariant::Success,
            PaymentStatus::Cicilan => BadgeVariant::Warning,
            PaymentStatus::BelumDibayar => BadgeVariant::Outline,
            PaymentStatus::Dibatalkan => BadgeVariant::Destructive,
        }
    }

    /// Whether money is still owed on the order.
    pub const fn is_outstanding(&self) -> bool {
        matches!(self, PaymentStatus::Cicilan | PaymentStatus::BelumDibayar)
    }
}

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Diproses,
    Dikirim,
    Selesai,
    Dibatalkan,
}

impl OrderStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Diproses => "Diproses",
            OrderStatus::Dikirim => "Dikirim",
            OrderStatus::Selesai => "Selesai",
            OrderStatus::Dibatalkan => "Dibatalkan",
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Customer segment; drives the category filter on the customer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CustomerCategory {
    #[default]
    Customer,
    Reseller,
    Agen,
    Member,
    Dropshipper,
}

impl CustomerCategory {
    /// All segments in filter-dropdown order.
    pub const ALL: [CustomerCategory; 5] = [
        CustomerCategory::Customer,
        CustomerCategory::Reseller,
        CustomerCategory::Agen,
        CustomerCategory::Member,
        CustomerCategory::Dropshipper,
    ];

    /// Wire value, also the value compared by the category filter.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CustomerCategory::Customer => "customer",
            CustomerCategory::Reseller => "reseller",
            CustomerCategory::Agen => "agen",
            CustomerCategory::Member => "member",
            CustomerCategory::Dropshipper => "dropshipper",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            CustomerCategory::Customer => "Customer",
            CustomerCategory::Reseller => "Reseller",
            CustomerCategory::Agen => "Agen",
            CustomerCategory::Member => "Member",
            CustomerCategory::Dropshipper => "Dropshipper",
        }
    }

    pub const fn badge(&self) -> BadgeVariant {
        match self {
            CustomerCategory::Customer => BadgeVariant::Outline,
            CustomerCategory::Reseller => BadgeVariant::Secondary,
            CustomerCategory::Agen => BadgeVariant::Default,
            CustomerCategory::Member => BadgeVariant::Success,
            CustomerCategory::Dropshipper => BadgeVariant::Warning,
        }
    }
}

/// A customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub category: CustomerCategory,
    pub province: String,
    pub city: String,
    pub district: String,
    pub village: String,
    pub postal_code: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Record for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Warehouse
// =============================================================================

/// Warehouse an order ships from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: String,
    pub name: String,
    /// Shipping origin city.
    pub origin: String,
    pub phone: String,
    pub address: String,
    pub description: Option<String>,
    /// Whether the warehouse is in use.
    #[serde(rename = "status")]
    pub active: bool,
}

// =============================================================================
// Order
// =============================================================================

/// A customer order as shown in the order table and edited in the order form.
///
/// `subtotal` and `total` are display snapshots written by
/// [`crate::order::OrderAggregate::apply_to`]; they are never the source of
/// truth. [`crate::order::verify_order`] checks them against the line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub customer: Customer,
    pub products: Vec<LineItem>,
    pub warehouse: Warehouse,
    pub sales_channel: String,
    pub shipping_cost: Money,
    /// Shipping weight in grams.
    pub weight: i64,
    pub insurance: Money,
    pub discount: Money,
    pub subtotal: Money,
    pub total: Money,
    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,
    pub note: Option<String>,
    /// Bank account the payment goes to.
    #[serde(rename = "rekeningPenerima")]
    pub receiving_account: Option<String>,
}

impl Order {
    /// Total number of units across all line items.
    pub fn total_quantity(&self) -> ValidationResult<i64> {
        checked_sum("quantity", self.products.iter().map(|item| item.quantity))
    }
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Product
// =============================================================================

/// Where a product comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    /// Own stock.
    #[default]
    BarangSendiri,
    /// Supplied by a third party.
    Suplier,
    PreOrder,
}

impl ProductType {
    pub const fn label(&self) -> &'static str {
        match self {
            ProductType::BarangSendiri => "Barang Sendiri",
            ProductType::Suplier => "Suplier Lain",
            ProductType::PreOrder => "Pre Order",
        }
    }
}

/// Price list per buyer tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceTiers {
    /// Purchase (cost) price.
    #[serde(rename = "beli")]
    pub purchase: Money,
    pub agent: Money,
    pub reseller: Money,
    pub member: Money,
    /// Regular retail price.
    pub normal: Money,
}

/// One color/size combination of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductVariant {
    pub id: String,
    pub color: String,
    pub size: String,
    pub stock: i64,
    pub sku: String,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    /// Free-form category ("Pakaian", "Aksesoris", ...).
    pub category: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub description: String,
    pub variants: Vec<ProductVariant>,
    /// Weight in grams.
    pub weight: i64,
    pub prices: PriceTiers,
    /// Sum of variant stock, see [`crate::catalog::total_stock`].
    pub stock: i64,
    pub image: Option<String>,
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
