//! Boundary to the order backend.

use serde_json::Value;
use tracing::info;

use super::{CreateOrderRequest, GatewayError, PayRequest};

/// What the backend answered to an order creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderReceipt {
    pub order_code: Option<String>,
    pub response: Value,
}

impl OrderReceipt {
    /// Backends name the code `orderCode`, `code` or `id`; the first present one wins.
    pub fn from_response(response: Value) -> Self {
        let order_code = ["orderCode", "code", "id"]
            .iter()
            .find_map(|field| match response.get(field) {
                Some(Value::String(code)) if !code.is_empty() => Some(code.clone()),
                Some(Value::Number(code)) => Some(code.to_string()),
                _ => None,
            });
        Self {
            order_code,
            response,
        }
    }
}

pub trait OrderGateway {
    fn create_order(&mut self, request: &CreateOrderRequest) -> Result<OrderReceipt, GatewayError>;

    fn pay(&mut self, order_code: &str, request: &PayRequest) -> Result<(), GatewayError>;
}

/// Accepts every order and payment and only logs them. Stands in for the payment API,
/// which this crate does not talk to.
#[derive(Debug, Default)]
pub struct LoggingOrderGateway;

impl OrderGateway for LoggingOrderGateway {
    fn create_order(&mut self, request: &CreateOrderRequest) -> Result<OrderReceipt, GatewayError> {
        let order_code = format!("ORD-{}", uuid::Uuid::now_v7().simple());
        info!(
            "LoggingOrderGateway: order {order_code} for {} across {} pharmacy group(s) paid by {}",
            request.prescription_code,
            request.pharmacies.len(),
            request.payment_method
        );
        Ok(OrderReceipt::from_response(
            serde_json::json!({ "orderCode": order_code }),
        ))
    }

    fn pay(&mut self, order_code: &str, request: &PayRequest) -> Result<(), GatewayError> {
        info!(
            "LoggingOrderGateway: payment of order {order_code} by {}",
            request.payment_method
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn order_code_is_taken_from_the_first_known_field() {
        assert_eq!(
            OrderReceipt::from_response(json!({"code": "C-1", "id": 9})).order_code.as_deref(),
            Some("C-1")
        );
        assert_eq!(
            OrderReceipt::from_response(json!({"id": 9})).order_code.as_deref(),
            Some("9")
        );
        assert_eq!(OrderReceipt::from_response(json!({"status": "ok"})).order_code, None);
    }
}
