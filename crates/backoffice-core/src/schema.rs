//! # Table Schemas
//!
//! Which fields each table searches and filters on.
//!
//! | Table     | Search fields                | Category dropdown     |
//! |-----------|------------------------------|-----------------------|
//! | Order     | order number, customer name  | none                  |
//! | Product   | name, SKU                    | product category      |
//! | Customer  | name, phone, email           | customer category     |
//!
//! Payment status is shown as a badge on the order table but is not a
//! filter.

use crate::table::RecordSchema;
use crate::types::{Customer, Order, Product};

fn order_number(order: &Order) -> &str {
    &order.order_number
}

fn order_customer_name(order: &Order) -> &str {
    &order.customer.name
}

fn product_name(product: &Product) -> &str {
    &product.name
}

fn product_sku(product: &Product) -> &str {
    &product.sku
}

fn product_category(product: &Product) -> &str {
    &product.category
}

fn customer_name(customer: &Customer) -> &str {
    &customer.name
}

fn customer_phone(customer: &Customer) -> &str {
    &customer.phone
}

fn customer_email(customer: &Customer) -> &str {
    &customer.email
}

fn customer_category(customer: &Customer) -> &str {
    customer.category.as_str()
}

pub const ORDER_SCHEMA: RecordSchema<Order> = RecordSchema {
    noun: "order",
    search_fields: &[order_number, order_customer_name],
    category_field: None,
};

pub const PRODUCT_SCHEMA: RecordSchema<Product> = RecordSchema {
    noun: "produk",
    search_fields: &[product_name, product_sku],
    category_field: Some(product_category),
};

pub const CUSTOMER_SCHEMA: RecordSchema<Customer> = RecordSchema {
    noun: "customer",
    search_fields: &[customer_name, customer_phone, customer_email],
    category_field: Some(customer_category),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{run_pipeline, CategoryFilter, FilterState};
    use crate::types::{CustomerCategory, PriceTiers, ProductType};

    fn customer(id: &str, name: &str, phone: &str, email: &str, category: CustomerCategory) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            category,
            province: String::new(),
            city: String::new(),
            district: String::new(),
            village: String::new(),
            postal_code: String::new(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: String::new(),
        }
    }

    fn product(id: &str, name: &str, sku: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            sku: sku.to_string(),
            category: category.to_string(),
            product_type: ProductType::BarangSendiri,
            description: String::new(),
            variants: Vec::new(),
            weight: 0,
            prices: PriceTiers::default(),
            stock: 0,
            image: None,
        }
    }

    fn filter(query: &str, category: &str) -> FilterState {
        FilterState {
            query: query.to_string(),
            category: CategoryFilter::parse(category),
        }
    }

    #[test]
    fn test_customer_search_covers_phone_and_email() {
        let customers = vec![
            customer("1", "John Doe", "081234567890", "john@example.com", CustomerCategory::Customer),
            customer("2", "Siti Aminah", "085700001111", "siti@toko.id", CustomerCategory::Reseller),
        ];

        let by_phone = run_pipeline(&customers, &CUSTOMER_SCHEMA, &filter("0857", "all"), 1, 10).unwrap();
        assert_eq!(by_phone.items[0].id, "2");

        let by_email = run_pipeline(&customers, &CUSTOMER_SCHEMA, &filter("EXAMPLE.COM", "all"), 1, 10).unwrap();
        assert_eq!(by_email.items[0].id, "1");
    }

    #[test]
    fn test_customer_category_uses_wire_value() {
        let customers = vec![
            customer("1", "A", "", "", CustomerCategory::Agen),
            customer("2", "B", "", "", CustomerCategory::Member),
            customer("3", "C", "", "", CustomerCategory::Agen),
        ];

        let agen = run_pipeline(&customers, &CUSTOMER_SCHEMA, &filter("", "agen"), 1, 10).unwrap();
        let ids: Vec<&str> = agen.items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_product_search_and_category() {
        let products = vec![
            product("1", "Kaos Polos", "KAOS-01", "Pakaian"),
            product("2", "Gelang Kaos", "GLG-01", "Aksesoris"),
            product("3", "Headset", "HS-01", "Elektronik"),
        ];

        let page = run_pipeline(&products, &PRODUCT_SCHEMA, &filter("kaos", "Aksesoris"), 1, 10).unwrap();
        assert_eq!(page.meta.total_count, 1);
        assert_eq!(page.items[0].sku, "GLG-01");

        let by_sku = run_pipeline(&products, &PRODUCT_SCHEMA, &filter("hs-", "all"), 1, 10).unwrap();
        assert_eq!(by_sku.items[0].name, "Headset");
    }
}
