//! Record builders shared by the view tests.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, NaiveDate, Utc};
use storedash_core::{CategoryRef, LineItem, Order, OrderId, OrderStatus, Product, ProductId, Review};

pub fn at(date: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc()
}

pub fn item(name: &str, quantity: u32, price: f64) -> LineItem {
    LineItem {
        product_id: Some(ProductId::new(format!("p-{name}"))),
        name: name.to_string(),
        quantity,
        price,
    }
}

pub fn order(number: &str, date: &str, total: f64, status: Option<OrderStatus>) -> Order {
    Order {
        id: OrderId::new(format!("id-{number}")),
        order_number: number.to_string(),
        created_at: at(date),
        total,
        items: vec![],
        status,
    }
}

pub fn product(name: &str, price: f64, stock_level: u32) -> Product {
    Product {
        id: ProductId::new(format!("p-{name}")),
        name: name.to_string(),
        slug: None,
        price,
        discount_percentage: None,
        stock_level,
        category: Some(CategoryRef::Title("Pantry".to_string())),
        description: None,
        image_url: None,
        is_featured: false,
        created_at: at("2024-01-01"),
    }
}

pub fn review(user: &str, text: &str, rating: u8, date: &str) -> Review {
    Review {
        id: None,
        product_id: ProductId::new("p-1"),
        user_name: user.to_string(),
        text: text.to_string(),
        created_at: at(date),
        rating,
    }
}
