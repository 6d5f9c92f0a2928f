use crate::domain::ProductId;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CartError {
    #[error("Product {0} does not exist in the catalog.")]
    ProductDoesNotExist(ProductId),
}
