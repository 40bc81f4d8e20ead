//! # Money Module
//!
//! Provides the `Money` type for order prices, adjustments and totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The dashboard prices in whole Rupiah, so the smallest unit IS the     │
//! │  Rupiah. Totals are i64 sums of i64 products: no drift, ever.          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use backoffice_core::money::Money;
//!
//! let price = Money::from_rupiah(500_000);
//! let line_total = price.checked_mul_quantity(2).unwrap();
//! assert_eq!(line_total.rupiah(), 1_000_000);
//! assert_eq!(line_total.to_string(), "Rp 1.000.000");
//! ```
//!
//! ## Overflow
//! Everything derived from user input (line totals, subtotal, total) goes
//! through the `checked_*` methods and fails with `TooLarge` instead of
//! wrapping. The operators are for values already known to be in range.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole Rupiah.
///
/// ## Design Decisions
/// - **i64 (signed)**: an order total may go negative when the discount
///   exceeds everything else; that value is surfaced, not clamped
/// - **Transparent serde**: serializes as a bare number, matching the
///   dashboard's `number` fields
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  LineItem.price × quantity ──► LineItem.total ──► Σ ──► subtotal        │
/// │                                                                         │
/// │  subtotal - discount + insurance + shipping_cost ──► total              │
/// │                                                                         │
/// │  Product.prices (beli, agent, reseller, member, normal)                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole Rupiah.
    ///
    /// ## Example
    /// ```rust
    /// use backoffice_core::money::Money;
    ///
    /// let shipping = Money::from_rupiah(15_000);
    /// assert_eq!(shipping.rupiah(), 15_000);
    /// ```
    #[inline]
    pub const fn from_rupiah(rupiah: i64) -> Self {
        Money(rupiah)
    }

    /// Returns the value in whole Rupiah.
    #[inline]
    pub const fn rupiah(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies by a quantity, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use backoffice_core::money::Money;
    ///
    /// let unit_price = Money::from_rupiah(125_000);
    /// assert_eq!(unit_price.checked_mul_quantity(3).unwrap().rupiah(), 375_000);
    /// assert!(Money::from_rupiah(5_000_000_000).checked_mul_quantity(2_000_000_000_000).is_none());
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(value) => Some(Money(value)),
            None => None,
        }
    }

    /// Adds, `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtracts, `None` on overflow.
    #[inline]
    pub fn checked_sub(&self, other: Money) -> Option<Self> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Sums amounts, `None` on overflow. An empty iterator is zero.
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, amount| acc.checked_add(amount))
    }

    /// Formats the value with a symbol and a thousands separator.
    ///
    /// `Display` uses `Rp` and `.`; the admin config passes its own.
    ///
    /// ## Example
    /// ```rust
    /// use backoffice_core::money::Money;
    ///
    /// let total = Money::from_rupiah(-1_010_000);
    /// assert_eq!(total.format_with("Rp", '.'), "-Rp 1.010.000");
    /// ```
    pub fn format_with(&self, symbol: &str, separator: char) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(ch);
        }

        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{} {}", sign, symbol, grouped)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Indonesian display: `Rp 1.010.000`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("Rp", '.'))
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
