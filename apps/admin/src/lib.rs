//! # Backoffice Admin: View State for the Dashboard
//!
//! The state the pure core leaves to its caller: the current search query,
//! category, page and selection of each table, and the order form being
//! edited.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Backoffice Admin                                 │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Dashboard Frontend                            │  │
//! │  │  • Order Table          • Order Form                             │  │
//! │  │  • Product Table        • Customer Table                         │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    View State (this crate)                       │  │
//! │  │                                                                  │  │
//! │  │  state/ ─────► TableView, OrderForm, ConfigState                 │  │
//! │  │                                                                  │  │
//! │  │  error.rs ───► ApiError { code, message }                        │  │
//! │  │                                                                  │  │
//! │  │  fixtures.rs ► Sample records for the demo binary                │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    backoffice-core                               │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub mod error;
pub mod fixtures;
pub mod state;

pub use error::{ApiError, ApiResult, ErrorCode};
pub use state::{ConfigState, OrderForm, TableRender, TableView};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=backoffice_core=trace` - Trace the core only
/// - Default: INFO, DEBUG for the backoffice crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,backoffice_core=debug,backoffice_admin=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
