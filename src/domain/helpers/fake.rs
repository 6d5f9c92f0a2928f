use fake::{Dummy, rand::seq::IteratorRandom};
use rust_decimal::Decimal;

/// Prices between 0.10 and 9.99 with two decimal places.
pub struct Price;

impl Dummy<Price> for Decimal {
    fn dummy_with_rng<R: fake::Rng + ?Sized>(_config: &Price, rng: &mut R) -> Self {
        let value = (10..1000).choose(rng).unwrap_or(10);
        Decimal::new(value, 2)
    }
}

/// Stock levels small enough for tests to walk a line item up to its ceiling.
pub struct StockLevel;

impl Dummy<StockLevel> for u32 {
    fn dummy_with_rng<R: fake::Rng + ?Sized>(_config: &StockLevel, rng: &mut R) -> Self {
        (1..8).choose(rng).unwrap_or(1)
    }
}
