mod product;
mod snapshot;

pub use product::Product;
pub use snapshot::Catalog;
