mod add_item;
mod availability;
mod cart_items;
mod clear_cart;
mod errors;
mod remove_item;
pub(crate) mod store;

pub use add_item::{AddItemCommand, AddItemPayload, AddItemResponse, AddOutcome, add_item_endpoint};
pub use availability::{
    ProductListing, StockAvailability, available_stock, product_endpoint, products_endpoint,
};
pub use cart_items::cart_items_endpoint;
pub use clear_cart::clear_cart_endpoint;
pub use errors::CartError;
pub use remove_item::{RemoveItemPayload, RemoveItemResponse, RemoveOutcome, remove_item_endpoint};
pub use store::{CartLineItem, CartSnapshot, CartStore};
