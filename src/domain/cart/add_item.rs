//! Add Item slice

use axum::Json;
use axum::extract::{Path, State};
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::catalog::{Catalog, Product};
use crate::domain::session::Sessions;
use crate::domain::{ProductId, SessionId};
use crate::infra::ClientError;

use super::{CartError, CartLineItem, CartSnapshot, CartStore};

//------------------------- Web API ----------------------------

#[derive(Debug, Clone, serde::Deserialize)]
pub struct AddItemPayload {
    pub product_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AddItemResponse {
    pub outcome: AddOutcome,
    pub cart: CartSnapshot,
}

pub async fn add_item_endpoint(
    State(sessions): State<Sessions>,
    State(catalog): State<Catalog>,
    Path(session_uuid): Path<Uuid>,
    Json(payload): Json<AddItemPayload>,
) -> Result<Json<AddItemResponse>, ClientError> {
    let session_id = SessionId::from(session_uuid);
    let product_id = ProductId::from(payload.product_id);
    let product = catalog
        .find(&product_id)
        .ok_or(CartError::ProductDoesNotExist(product_id))?;
    let command = AddItemCommand::from(product);

    let response = sessions
        .with_session(session_id, |session| {
            let outcome = session.cart.add_item(command);
            AddItemResponse {
                outcome,
                cart: session.cart.snapshot(),
            }
        })
        .await?;

    Ok(Json(response))
}

//------------------------- Command ----------------------------

/// A request to put one more unit of a product in the cart.
/// `max_quantity` is the stock ceiling at the moment of the call.
#[derive(Debug, Clone, PartialEq)]
pub struct AddItemCommand {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub max_quantity: u32,
}

impl From<&Product> for AddItemCommand {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.effective_price(),
            image: product.primary_image(),
            max_quantity: product.stock_ceiling(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AddOutcome {
    Added { quantity: u32 },
    /// The stock ceiling was already reached. Nothing changed.
    AtCapacity,
}

impl CartStore {
    /// Adds one unit. Never raises: a call that would pass the stock ceiling leaves the cart
    /// untouched and reports `AtCapacity`.
    ///
    /// An existing line keeps the price and ceiling it was created with.
    pub fn add_item(&mut self, command: AddItemCommand) -> AddOutcome {
        let price = match self.line_mut(&command.product_id) {
            Some(line) => {
                if line.quantity >= line.max_quantity {
                    debug!("Product {} is at its stock ceiling of {}", line.id, line.max_quantity);
                    return AddOutcome::AtCapacity;
                }
                line.quantity += 1;
                line.total_price += line.price;
                line.price
            }
            None => {
                if command.max_quantity < 1 {
                    debug!("Product {} has no stock to add", command.product_id);
                    return AddOutcome::AtCapacity;
                }
                self.items.push(CartLineItem {
                    id: command.product_id,
                    name: command.name,
                    price: command.price,
                    image: command.image,
                    quantity: 1,
                    max_quantity: command.max_quantity,
                    total_price: command.price,
                });
                command.price
            }
        };

        self.total_quantity += 1;
        self.total_amount += price;

        let quantity = self.quantity_of(&command.product_id);
        info!("Added product {} to cart, quantity now {quantity}", command.product_id);
        AddOutcome::Added { quantity }
    }
}

//-------------------------- Tests -------------------------------
