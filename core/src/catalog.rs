use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::models::{FilterRequest, PageResult, Product};
use crate::query::query_products;

const BUILTIN_CATALOG: &str = include_str!("../data/products.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid product {id}: {reason}")]
    Invalid { id: u32, reason: String },
}

/// Read-only product collection shared between requests
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// The mock catalog bundled with the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load a JSON array of products from disk
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        validate(&products)?;
        Ok(Self {
            products: products.into(),
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Run a filter request against this snapshot
    pub fn query(&self, request: &FilterRequest) -> PageResult {
        query_products(&self.products, request)
    }
}

fn validate(products: &[Product]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();

    for product in products {
        let invalid = |reason: &str| CatalogError::Invalid {
            id: product.id,
            reason: reason.to_string(),
        };

        if !ids.insert(product.id) {
            return Err(invalid("duplicate id"));
        }
        if product.price.is_nan() || product.price < 0.0 {
            return Err(invalid("price must be a non-negative number"));
        }
        if !(0.0..=5.0).contains(&product.ratings) {
            return Err(invalid("ratings must be between 0 and 5"));
        }
    }

    Ok(())
}
