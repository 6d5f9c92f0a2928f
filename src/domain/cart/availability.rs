//! Stock availability slice
//!
//! How many more units of a product may go into the cart. This is a pure projection of the
//! catalog snapshot and the live cart, so it is recomputed on every request and never cached.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    domain::{
        ProductId, SessionId,
        catalog::{Catalog, Product},
        session::Sessions,
    },
    infra::ClientError,
};

use super::{CartError, CartStore};

//------------------------- Web API ----------------------------

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ProductListing {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub effective_price: Decimal,
    pub images: Vec<String>,
    pub stock: StockAvailability,
}

impl ProductListing {
    fn new(product: &Product, cart: &CartStore) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            discount_price: product.discount_price,
            effective_price: product.effective_price(),
            images: product.images.clone(),
            stock: available_stock(product, cart),
        }
    }
}

pub async fn products_endpoint(
    State(sessions): State<Sessions>,
    State(catalog): State<Catalog>,
    Path(session_uuid): Path<Uuid>,
) -> Result<Json<Vec<ProductListing>>, ClientError> {
    let listings = sessions
        .with_session(SessionId::from(session_uuid), |session| {
            catalog
                .products()
                .iter()
                .map(|product| ProductListing::new(product, &session.cart))
                .collect::<Vec<_>>()
        })
        .await?;
    Ok(Json(listings))
}

pub async fn product_endpoint(
    State(sessions): State<Sessions>,
    State(catalog): State<Catalog>,
    Path((session_uuid, product_uuid)): Path<(Uuid, Uuid)>,
) -> Result<Json<ProductListing>, ClientError> {
    let product_id = ProductId::from(product_uuid);
    let product = catalog
        .find(&product_id)
        .ok_or(CartError::ProductDoesNotExist(product_id))?;
    let listing = sessions
        .with_session(SessionId::from(session_uuid), |session| {
            ProductListing::new(product, &session.cart)
        })
        .await?;
    Ok(Json(listing))
}

//----------------------- Implementation --------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct StockAvailability {
    pub stock_quantity: u32,
    pub in_cart: u32,
    pub available: u32,
    pub is_out_of_stock: bool,
}

pub fn available_stock(product: &Product, cart: &CartStore) -> StockAvailability {
    let stock_quantity = product.stock_ceiling();
    let in_cart = cart.quantity_of(&product.id);
    let available = stock_quantity.saturating_sub(in_cart);
    StockAvailability {
        stock_quantity,
        in_cart,
        available,
        is_out_of_stock: available < 1,
    }
}

//-------------------------- Tests -------------------------------
