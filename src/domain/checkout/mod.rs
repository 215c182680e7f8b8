//! Checkout of one prescription across the pharmacies it was split over.

mod errors;
mod gateway;
mod order_request;
mod payment;
mod place_order;
mod summary;

pub use errors::{CheckoutError, GatewayError};
pub use gateway::{LoggingOrderGateway, OrderGateway, OrderReceipt};
pub use order_request::{CreateOrderRequest, OrderLine, PayRequest, PharmacyOrder};
pub use payment::{
    CardDetails, PaymentDetails, PaymentMethod, format_card_number, format_expiry_date,
};
pub use place_order::{PlacedOrder, place_order};
pub use summary::CheckoutSummary;
