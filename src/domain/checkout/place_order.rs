//! Place Order slice

use tracing::{error, info, instrument, warn};

use crate::{domain::cart::AggregatedCart, infra::storage::KeyValueStore};

use super::{
    CheckoutError, CheckoutSummary, CreateOrderRequest, OrderGateway, PayRequest, PaymentDetails,
};

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOrder {
    pub order_code: Option<String>,
    pub paid: bool,
    pub summary: CheckoutSummary,
    pub request: CreateOrderRequest,
}

/// Creates and pays one order for the selected lines of `prescription_id`.
///
/// The prescription is cleared from the cart only once payment succeeded. A failed payment
/// leaves the cart as it was so the customer can retry. When the backend does not return an
/// order code no payment is attempted and the cart is kept.
#[instrument(skip(cart, gateway, payment))]
pub fn place_order<S, G>(
    cart: &mut AggregatedCart<S>,
    gateway: &mut G,
    prescription_id: &str,
    payment: &PaymentDetails,
) -> Result<PlacedOrder, CheckoutError>
where
    S: KeyValueStore,
    G: OrderGateway,
{
    let summary = CheckoutSummary::for_prescription(cart, prescription_id);
    if summary.is_empty() {
        return Err(CheckoutError::NoItemsSelected);
    }
    payment.validate()?;

    let request = CreateOrderRequest::from_summary(&summary, payment.method());
    let receipt = gateway
        .create_order(&request)
        .inspect_err(|e| error!("PlaceOrder: creating order for {prescription_id} failed with {e}"))?;

    let Some(order_code) = receipt.order_code else {
        warn!("PlaceOrder: backend returned no order code for {prescription_id}, payment skipped.");
        return Ok(PlacedOrder {
            order_code: None,
            paid: false,
            summary,
            request,
        });
    };

    gateway
        .pay(&order_code, &PayRequest::for_payment(payment))
        .inspect_err(|e| error!("PlaceOrder: paying order {order_code} failed with {e}"))?;

    cart.clear_prescription(Some(prescription_id))?;
    info!("PlaceOrder: order {order_code} placed and paid, {prescription_id} cleared from cart.");

    Ok(PlacedOrder {
        order_code: Some(order_code),
        paid: true,
        summary,
        request,
    })
}

//-------------------------- Tests -------------------------------
