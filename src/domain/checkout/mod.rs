mod begin_checkout;
mod collaborators;
mod confirm_order;
mod errors;
mod sandbox;
mod session;
mod submit_payment;
mod submit_shipping;

pub use begin_checkout::{abandon_checkout_endpoint, begin_checkout_endpoint, checkout_endpoint};
pub use collaborators::{
    CollaboratorError, OrderConfirmation, OrderRequest, OrderService, PaymentDetails,
    PaymentGateway, PaymentSummary, SharedOrderService, SharedPaymentGateway,
};
pub use confirm_order::{OrderPlaced, confirm_order, confirm_order_endpoint};
pub use errors::CheckoutError;
pub use sandbox::{DECLINED_CARD_SUFFIX, SandboxOrderService, SandboxPaymentGateway};
pub use session::{CheckoutSession, CheckoutStage, FrozenTotals, RequestTicket, ShippingDetails};
pub use submit_payment::{submit_payment, submit_payment_endpoint};
pub use submit_shipping::{go_back_to_shipping_endpoint, submit_shipping_endpoint};
