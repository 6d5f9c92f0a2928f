//! Money and quantity arithmetic shared by the cart, catalog and checkout.

use rust_decimal::Decimal;

/// Price actually charged for one unit. A discount only applies when it undercuts the list price.
pub fn effective_price(price: Decimal, discount_price: Option<Decimal>) -> Decimal {
    match discount_price {
        Some(discount) if discount < price => discount,
        _ => price,
    }
}

pub fn line_total(price: Decimal, quantity: u32) -> Decimal {
    price * Decimal::from(quantity)
}

/// Flat-rate shipping that becomes free once the order amount is strictly above the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShippingPolicy {
    pub free_shipping_threshold: Decimal,
    pub flat_rate: Decimal,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Decimal::ONE_HUNDRED,
            flat_rate: Decimal::TEN,
        }
    }
}

impl ShippingPolicy {
    pub fn cost_for(&self, amount: Decimal) -> Decimal {
        if amount > self.free_shipping_threshold {
            Decimal::ZERO
        } else {
            self.flat_rate
        }
    }
}

//-------------------------- Tests -------------------------------
