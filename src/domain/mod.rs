pub mod cart;
pub mod catalog;
pub mod checkout;
mod helpers;
mod ids;
pub mod pricing;
pub mod session;

pub use helpers::fake;
pub use ids::{CheckoutId, ProductId, SessionId};
