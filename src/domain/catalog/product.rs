use rust_decimal::Decimal;

use crate::domain::{ProductId, pricing::effective_price};

/// A product record as served by the catalog.
/// Stock is a snapshot taken at fetch time, not a live count.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub discount_price: Option<Decimal>,
    #[serde(default)]
    pub stock_quantity: Option<u32>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    pub fn effective_price(&self) -> Decimal {
        effective_price(self.price, self.discount_price)
    }

    /// Missing stock counts as none.
    pub fn stock_ceiling(&self) -> u32 {
        self.stock_quantity.unwrap_or(0)
    }

    pub fn primary_image(&self) -> String {
        self.images.first().cloned().unwrap_or_default()
    }
}
