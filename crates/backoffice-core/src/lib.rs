//! # backoffice-core: Pure Business Logic for the Back-Office Dashboard
//!
//! Order pricing and the table pipeline behind the order, product and
//! customer views, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Backoffice Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Dashboard Frontend                           │   │
//! │  │   Order Table ──► Order Form     Product Table   Customer Table │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ events (keystroke, click)              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                apps/admin (view state)                          │   │
//! │  │    TableView (query, category, page, selection), OrderForm      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ backoffice-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │  order   │  │  table   │  │ catalog  │  │  validation  │   │   │
//! │  │   │ totals   │  │ filter   │  │ variants │  │    rules     │   │   │
//! │  │   │ aggregate│  │ paginate │  │  stock   │  │              │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO GLOBAL STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Order, LineItem, Product, Customer, ...)
//! - [`money`] - Integer Rupiah amounts
//! - [`order`] - Line-item aggregator: line totals, subtotal, total
//! - [`table`] - Search, category filter, pagination
//! - [`selection`] - Page-scoped bulk selection
//! - [`schema`] - Search/category fields per table
//! - [`catalog`] - Product variant editing and stock rollup
//! - [`stats`] - Dashboard counters per period (day, week, month, year)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use backoffice_core::order::{OrderAdjustments, OrderAggregate};
//! use backoffice_core::Money;
//!
//! let mut form = OrderAggregate::new();
//! form.set_quantity(0, 2).unwrap();
//! form.set_price(0, Money::from_rupiah(500_000)).unwrap();
//! form.set_adjustments(
//!     OrderAdjustments::new(
//!         Money::from_rupiah(15_000),
//!         Money::from_rupiah(10_000),
//!         Money::from_rupiah(5_000),
//!     )
//!     .unwrap(),
//! )
//! .unwrap();
//!
//! assert_eq!(form.total().unwrap().to_string(), "Rp 1.010.000");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod schema;
pub mod selection;
pub mod stats;
pub mod table;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{OrderAdjustments, OrderAggregate, OrderSummary};
pub use selection::Selection;
pub use stats::{DashboardStats, StatsPeriod};
pub use table::{CategoryFilter, FilterState, Page, PageMeta, Record, RecordSchema};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Rows per table page in every list view.
pub const DEFAULT_PAGE_SIZE: usize = 10;
