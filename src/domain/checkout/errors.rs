use crate::infra::storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("No items selected to pay.")]
    NoItemsSelected,
    #[error("Please fill in all card details.")]
    MissingCardDetails,
    #[error("Please enter a valid card number.")]
    InvalidCardNumber,
    #[error("Please enter a valid CVV.")]
    InvalidCvv,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("The order was placed but the cart could not be updated.")]
    Storage(#[from] StorageError),
}

/// Failures reported by the order backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("Failed to place order: {0}")]
    OrderRejected(String),
    #[error("Payment for order {order_code} failed: {message}")]
    PaymentFailed { order_code: String, message: String },
}
