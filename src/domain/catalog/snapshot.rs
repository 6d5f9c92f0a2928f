use std::{collections::HashSet, sync::Arc};

use anyhow::{Context, bail};
use camino::Utf8Path;
use tracing::info;

use crate::domain::ProductId;

use super::Product;

/// In-memory snapshot of the catalog, in the order the catalog listed it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                bail!("Product {} appears more than once in the catalog.", product.id);
            }
        }
        Ok(Self {
            products: Arc::new(products),
        })
    }

    /// Loads a JSON array of products.
    pub fn load(path: &Utf8Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read catalog seed file {path}."))?;
        let products: Vec<Product> = serde_json::from_str(&raw)
            .with_context(|| format!("Catalog seed file {path} is not a valid product list."))?;
        let catalog = Self::new(products)?;
        info!("Loaded {} catalog products from {path}", catalog.products.len());
        Ok(catalog)
    }

    pub fn find(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == *product_id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
