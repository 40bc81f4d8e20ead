//! # Configuration State
//!
//! Stores dashboard configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BACKOFFICE_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization.

use backoffice_core::{Money, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (page header, printed labels)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Digit-group separator, `.` in Indonesian formatting
    pub thousands_separator: char,

    /// Rows per table page
    pub page_size: usize,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Backoffice Dev Store"
    /// - Currency: IDR (Rp), `.` separator
    /// - Page size: 10
    fn default() -> Self {
        ConfigState {
            store_name: "Backoffice Dev Store".to_string(),
            currency_code: "IDR".to_string(),
            currency_symbol: "Rp".to_string(),
            thousands_separator: '.',
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BACKOFFICE_STORE_NAME`: Override store name
    /// - `BACKOFFICE_PAGE_SIZE`: Override rows per page (positive integer)
    pub fn from_env() -> Self {
        ConfigState::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("BACKOFFICE_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(page_size) = lookup("BACKOFFICE_PAGE_SIZE") {
            match page_size.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.page_size = size,
                _ => warn!(value = %page_size, "Ignoring invalid BACKOFFICE_PAGE_SIZE"),
            }
        }

        config
    }

    /// Formats an amount with the configured symbol and separator.
    ///
    /// ## Example
    /// ```rust
    /// use backoffice_admin::ConfigState;
    /// use backoffice_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_rupiah(1_010_000)), "Rp 1.010.000");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol, self.thousands_separator)
    }
}
