//! Cart Store
//!
//! Line items are kept in insertion order and keyed by product id. The aggregate totals are
//! maintained incrementally by every mutation so they always equal the sums over `items`.
//! The mutations themselves live in their slices (`add_item`, `remove_item`, `clear_cart`).

use rust_decimal::Decimal;

use crate::domain::ProductId;

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    /// Unit price captured when the line was created.
    pub price: Decimal,
    pub image: String,
    pub quantity: u32,
    /// Stock ceiling captured when the line was created.
    pub max_quantity: u32,
    pub total_price: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartStore {
    pub(super) items: Vec<CartLineItem>,
    pub(super) total_quantity: u32,
    pub(super) total_amount: Decimal,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn total_quantity(&self) -> u32 {
        self.total_quantity
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == *product_id)
    }

    /// Units of a product already in the cart, zero when it has no line.
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.line(product_id).map_or(0, |item| item.quantity)
    }

    pub(super) fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| item.id == *product_id)
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            total_quantity: self.total_quantity,
            total_amount: self.total_amount,
        }
    }
}

/// Read-only view of the cart handed to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CartSnapshot {
    pub items: Vec<CartLineItem>,
    pub total_quantity: u32,
    pub total_amount: Decimal,
}

//-------------------------- Tests -------------------------------
