//! # Backoffice Admin Demo
//!
//! Drives the view state over sample data and logs what each screen would
//! show.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration
//! 3. Render the order, product and customer tables
//! 4. Fill an order form and submit it
//! 5. Compute the dashboard cards for each period

use backoffice_admin::{fixtures, init_tracing, ApiResult, ConfigState, OrderForm, TableView};
use backoffice_core::schema::{CUSTOMER_SCHEMA, ORDER_SCHEMA, PRODUCT_SCHEMA};
use backoffice_core::stats::compute_dashboard_stats;
use backoffice_core::{Money, StatsPeriod};
use tracing::{error, info};

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(code = ?err.code, message = %err.message, "Demo failed");
        std::process::exit(1);
    }
}

fn run() -> ApiResult<()> {
    let config = ConfigState::from_env();
    info!(store = %config.store_name, currency = %config.currency_code, page_size = config.page_size, "Starting backoffice admin");

    let orders = fixtures::orders(23)?;
    let products = fixtures::products();
    let customers = fixtures::customers();

    // Orders: search, then last page, then select it
    let mut order_table = TableView::new(ORDER_SCHEMA, config.page_size)?;
    order_table.set_query("ORD-2024")?;
    order_table.go_to(usize::MAX);
    let page = order_table.render(&orders)?;
    order_table.toggle_page(&page);
    info!(
        range = %page.range_label,
        page = page.meta.page,
        total_pages = page.meta.total_pages,
        selected = order_table.selection().count(),
        "Order table"
    );
    for order in &page.items {
        info!(
            number = %order.order_number,
            customer = %order.customer.name,
            payment = order.payment_status.label(),
            total = %config.format_currency(order.total),
            "  row"
        );
    }

    // Products in one category
    let mut product_table = TableView::new(PRODUCT_SCHEMA, config.page_size)?;
    product_table.set_category("Pakaian");
    let page = product_table.render(&products)?;
    info!(range = %page.range_label, "Product table");
    for product in &page.items {
        info!(sku = %product.sku, name = %product.name, stock = product.stock, "  row");
    }

    // Customers by phone prefix
    let mut customer_table = TableView::new(CUSTOMER_SCHEMA, config.page_size)?;
    customer_table.set_query("0857")?;
    let page = customer_table.render(&customers)?;
    info!(range = %page.range_label, "Customer table");

    // Order form
    let mut form = OrderForm::edit(&orders[0])?;
    form.add_item();
    if let Some(headset) = products.iter().find(|product| product.sku == "HS-01") {
        form.select_product(1, headset)?;
        form.set_quantity(1, 2)?;
    }
    form.set_discount(Money::from_rupiah(10_000))?;
    form.set_insurance(Money::from_rupiah(5_000))?;

    let summary = form.summary()?;
    info!(
        items = summary.item_count,
        subtotal = %config.format_currency(summary.subtotal),
        total = %config.format_currency(summary.total),
        weight_grams = summary.weight,
        "Order form"
    );
    let saved = form.submit(&orders[0])?;

    // Dashboard cards, with the edited order swapped in
    let mut updated = orders.clone();
    updated[0] = saved;
    for period in StatsPeriod::ALL {
        let stats = compute_dashboard_stats(&updated, period, fixtures::reference_date())?;
        info!(
            period = period.label(),
            items_sold = stats.items_sold,
            orders = stats.orders_in_period,
            orders_unpaid = stats.orders_unpaid,
            sales = %config.format_currency(stats.sales_in_period),
            "Dashboard"
        );
    }

    Ok(())
}
