//! # Sample Data
//!
//! Records for the demo binary and the view-state tests, shaped like what
//! the dashboard API returns.

use backoffice_core::catalog::total_stock;
use backoffice_core::{
    CoreResult, Customer, CustomerCategory, LineItem, Money, Order, OrderAdjustments, OrderAggregate,
    OrderStatus, PaymentStatus, PriceTiers, Product, ProductType, ProductVariant, Warehouse,
};
use chrono::NaiveDate;

/// Date every sample order is placed around; the demo treats it as "today".
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default()
}

fn customer(id: &str, name: &str, category: CustomerCategory, phone: &str, email: &str, city: &str) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        category,
        province: "Jawa Barat".to_string(),
        city: city.to_string(),
        district: String::new(),
        village: String::new(),
        postal_code: "40111".to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: "Jl. Merdeka No. 1".to_string(),
    }
}

pub fn customers() -> Vec<Customer> {
    vec![
        customer("CUST-001", "John Doe", CustomerCategory::Customer, "081234567890", "john@example.com", "Bandung"),
        customer("CUST-002", "Siti Aminah", CustomerCategory::Reseller, "085700001111", "siti@toko.id", "Cimahi"),
        customer("CUST-003", "Budi Santoso", CustomerCategory::Agen, "081311112222", "budi@agen.id", "Bogor"),
        customer("CUST-004", "Dewi Lestari", CustomerCategory::Reseller, "087822223333", "dewi@example.com", "Depok"),
        customer("CUST-005", "Andi Wijaya", CustomerCategory::Member, "081955554444", "andi@example.com", "Bekasi"),
    ]
}

pub fn warehouse() -> Warehouse {
    Warehouse {
        id: "WH-001".to_string(),
        name: "Gudang Utama".to_string(),
        origin: "Bandung".to_string(),
        phone: "0221234567".to_string(),
        address: "Jl. Soekarno Hatta No. 100".to_string(),
        description: None,
        active: true,
    }
}

fn variant(id: &str, color: &str, size: &str, stock: i64, sku: &str) -> ProductVariant {
    ProductVariant {
        id: id.to_string(),
        color: color.to_string(),
        size: size.to_string(),
        stock,
        sku: sku.to_string(),
    }
}

fn product(
    id: &str,
    name: &str,
    sku: &str,
    category: &str,
    normal_price: i64,
    weight: i64,
    variants: Vec<ProductVariant>,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        sku: sku.to_string(),
        category: category.to_string(),
        product_type: ProductType::BarangSendiri,
        description: String::new(),
        // Fixture stocks are single digits
        stock: total_stock(&variants).unwrap_or_default(),
        variants,
        weight,
        prices: PriceTiers {
            purchase: Money::from_rupiah(normal_price * 6 / 10),
            agent: Money::from_rupiah(normal_price * 8 / 10),
            reseller: Money::from_rupiah(normal_price * 85 / 100),
            member: Money::from_rupiah(normal_price * 9 / 10),
            normal: Money::from_rupiah(normal_price),
        },
        image: None,
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product(
            "PRD-001",
            "Kaos Polos",
            "KAOS-01",
            "Pakaian",
            75_000,
            200,
            vec![
                variant("V-001", "Hitam", "M", 4, "KAOS-01-HTM-M"),
                variant("V-002", "Hitam", "L", 6, "KAOS-01-HTM-L"),
            ],
        ),
        product(
            "PRD-002",
            "Kemeja Flanel",
            "KMJ-02",
            "Pakaian",
            185_000,
            350,
            vec![variant("V-003", "Merah", "L", 12, "KMJ-02-MRH-L")],
        ),
        product("PRD-003", "Gelang Kaos", "GLG-01", "Aksesoris", 15_000, 20, Vec::new()),
        product(
            "PRD-004",
            "Headset Bluetooth",
            "HS-01",
            "Elektronik",
            500_000,
            150,
            vec![variant("V-004", "Putih", "", 3, "HS-01-PTH")],
        ),
    ]
}

const CHANNELS: [&str; 3] = ["WhatsApp", "Shopee", "Tokopedia"];

/// `count` orders numbered `ORD-2024-001` upward, totals derived by the
/// order aggregate.
pub fn orders(count: usize) -> CoreResult<Vec<Order>> {
    let customers = customers();
    let products = products();
    let today = reference_date();
    let payments = [PaymentStatus::Lunas, PaymentStatus::BelumDibayar, PaymentStatus::Cicilan];
    let statuses = [OrderStatus::Selesai, OrderStatus::Pending, OrderStatus::Diproses, OrderStatus::Dikirim];

    (0..count)
        .map(|i| -> CoreResult<Order> {
            let product = &products[i % products.len()];
            let quantity = (i % 3) as i64 + 1;
            let items = vec![LineItem::new(
                product.id.clone(),
                product.name.clone(),
                "",
                quantity,
                product.prices.normal,
                product.weight,
            )?];
            let adjustments = OrderAdjustments::new(Money::from_rupiah(15_000), Money::zero(), Money::zero())?;
            let aggregate = OrderAggregate::with_items(items, adjustments)?;

            let draft = Order {
                id: format!("{}", i + 1),
                order_number: format!("ORD-2024-{:03}", i + 1),
                date: today - chrono::Duration::days((i % 4) as i64),
                customer: customers[i % customers.len()].clone(),
                products: Vec::new(),
                warehouse: warehouse(),
                sales_channel: CHANNELS[i % CHANNELS.len()].to_string(),
                shipping_cost: Money::zero(),
                weight: 0,
                insurance: Money::zero(),
                discount: Money::zero(),
                subtotal: Money::zero(),
                total: Money::zero(),
                payment_status: payments[i % payments.len()],
                order_status: statuses[i % statuses.len()],
                note: None,
                receiving_account: Some("BCA 1234567890".to_string()),
            };

            aggregate.apply_to(&draft)
        })
        .collect()
}
