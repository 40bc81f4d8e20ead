//! # State Module
//!
//! View state for the dashboard, one type per concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐      │
//! │  │  TableView<T>    │  │   OrderForm      │  │   ConfigState    │      │
//! │  │                  │  │                  │  │                  │      │
//! │  │  query           │  │  OrderAggregate  │  │  store_name      │      │
//! │  │  category        │  │  (items +        │  │  currency        │      │
//! │  │  page            │  │   adjustments)   │  │  page_size       │      │
//! │  │  selection       │  │                  │  │                  │      │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────┘      │
//! │                                                                         │
//! │  OWNERSHIP:                                                             │
//! │  • Each view owns its state; nothing is shared, no locks                │
//! │  • Record lists are borrowed per render, never stored                   │
//! │  • ConfigState: read-only after initialization                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod order_form;
mod table;

pub use config::ConfigState;
pub use order_form::OrderForm;
pub use table::{TableRender, TableView};
