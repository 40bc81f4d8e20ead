//! # Dashboard Statistics
//!
//! Counters on the dashboard home cards, computed from the order list.
//!
//! | Card                   | Rule                                          |
//! |------------------------|-----------------------------------------------|
//! | Item terjual           | Σ quantity, orders not cancelled              |
//! | Item belum diproses    | Σ quantity, order status `pending`            |
//! | Order (periode)        | orders dated inside the period                |
//! | Order belum lunas      | payment `belum_dibayar` or `cicilan`          |
//! | Order belum diproses   | order status `pending`                        |
//! | Penjualan (periode)    | Σ total, orders in the period, not cancelled  |
//!
//! "Cancelled" means either status is `dibatalkan`.
//!
//! ## Periods
//! The Hari / Minggu / Bulan / Tahun toggle only moves the window of the two
//! period cards. Each window ends at `today` inclusive and starts at:
//!
//! ```text
//! Hari    today
//! Minggu  Monday of today's week
//! Bulan   the 1st of today's month
//! Tahun   1 January of today's year
//! ```
//!
//! Orders dated after `today` fall outside every window.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use tracing::debug;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Order, OrderStatus, PaymentStatus};
use crate::validation::too_large;

/// Window selected by the dashboard period toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StatsPeriod {
    #[default]
    #[serde(rename = "hari")]
    Day,
    #[serde(rename = "minggu")]
    Week,
    #[serde(rename = "bulan")]
    Month,
    #[serde(rename = "tahun")]
    Year,
}

impl StatsPeriod {
    pub const ALL: [StatsPeriod; 4] = [StatsPeriod::Day, StatsPeriod::Week, StatsPeriod::Month, StatsPeriod::Year];

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            StatsPeriod::Day => "Hari",
            StatsPeriod::Week => "Minggu",
            StatsPeriod::Month => "Bulan",
            StatsPeriod::Year => "Tahun",
        }
    }

    /// First day of the window ending at `today`.
    pub fn start(&self, today: NaiveDate) -> NaiveDate {
        match self {
            StatsPeriod::Day => today,
            StatsPeriod::Week => today - Duration::days(i64::from(today.weekday().num_days_from_monday())),
            StatsPeriod::Month => today.with_day(1).unwrap_or(today),
            StatsPeriod::Year => today.with_ordinal(1).unwrap_or(today),
        }
    }

    /// Whether `date` is inside the window ending at `today`.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        self.start(today) <= date && date <= today
    }
}

/// Dashboard card values.
///
/// Field names are English; the wire keeps the names the dashboard
/// frontend already reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub period: StatsPeriod,
    #[serde(rename = "itemTerjual")]
    pub items_sold: i64,
    #[serde(rename = "itemBelumDiproses")]
    pub items_unprocessed: i64,
    #[serde(rename = "orderHariIni")]
    pub orders_in_period: usize,
    #[serde(rename = "orderBelumLunas")]
    pub orders_unpaid: usize,
    #[serde(rename = "orderBelumDiproses")]
    pub orders_unprocessed: usize,
    #[serde(rename = "penjualanHariIni")]
    pub sales_in_period: Money,
}

fn is_cancelled(order: &Order) -> bool {
    order.order_status == OrderStatus::Dibatalkan || order.payment_status == PaymentStatus::Dibatalkan
}

fn add_quantity(total: i64, quantity: i64, field: &str) -> CoreResult<i64> {
    Ok(total.checked_add(quantity).ok_or_else(|| too_large(field))?)
}

/// Computes the dashboard cards for the `period` ending at `today`.
///
/// ## Errors
/// `Validation(TooLarge)` if a quantity or sales sum overflows.
pub fn compute_dashboard_stats(
    orders: &[Order],
    period: StatsPeriod,
    today: NaiveDate,
) -> CoreResult<DashboardStats> {
    let mut stats = DashboardStats {
        period,
        ..DashboardStats::default()
    };

    for order in orders {
        let cancelled = is_cancelled(order);
        let pending = order.order_status == OrderStatus::Pending;
        let quantity = order.total_quantity()?;

        if !cancelled {
            stats.items_sold = add_quantity(stats.items_sold, quantity, "items sold")?;
        }
        if pending {
            stats.items_unprocessed = add_quantity(stats.items_unprocessed, quantity, "items unprocessed")?;
            stats.orders_unprocessed += 1;
        }
        if order.payment_status.is_outstanding() {
            stats.orders_unpaid += 1;
        }
        if period.contains(order.date, today) {
            stats.orders_in_period += 1;
            if !cancelled {
                stats.sales_in_period = stats
                    .sales_in_period
                    .checked_add(order.total)
                    .ok_or_else(|| too_large("sales"))?;
            }
        }
    }

    debug!(
        period = period.label(),
        %today,
        orders = orders.len(),
        in_period = stats.orders_in_period,
        "Computed dashboard stats"
    );
    Ok(stats)
}
