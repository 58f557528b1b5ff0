#![allow(clippy::unwrap_used)]

use axum_test::TestServer;
use serde_json::json;
use storefront_core::{Catalog, Product};

use crate::{auth::AdminAccount, router::setup_router, state::AppState};


pub fn setup_server() -> TestServer {
    setup_server_with(Catalog::builtin().unwrap())
}

pub fn setup_server_with(catalog: Catalog) -> TestServer {
    let admin = AdminAccount::new("Admin", "123456", "John").unwrap();
    let app = setup_router(AppState::new(catalog, admin), false);

    TestServer::builder().save_cookies().build(app).unwrap()
}

pub async fn login(server: &TestServer) {
    server
        .post("/api/login")
        .json(&json!({
            "username": "Admin",
            "password": "123456"
        }))
        .await
        .assert_status_ok();
}

/// 25 products named "Product 01".."Product 25", the first 10 in stock
pub fn sample_catalog() -> Catalog {
    let products = (1..=25)
        .map(|i| Product {
            id: i,
            name: format!("Product {:02}", i),
            description: format!("Sample product number {}", i),
            price: f64::from(i) * 25.0,
            availability: i <= 10,
            ratings: 3.5,
            image: format!("https://picsum.photos/seed/sample-{}/400/300", i),
        })
        .collect();

    Catalog::from_products(products).unwrap()
}
