//! Runs a parsed [`Command`] against a cart and renders the result as JSON.

use serde_json::{Value, json};
use tracing::info;

use crate::{
    domain::{
        cart::{AggregatedCart, CartItem},
        checkout::{
            CardDetails, CheckoutSummary, OrderGateway, PaymentDetails, format_card_number,
            format_expiry_date, place_order,
        },
    },
    infra::{ClientError, Command, PaymentChoice, storage::KeyValueStore},
};

pub fn execute<S, G>(
    cart: &mut AggregatedCart<S>,
    gateway: &mut G,
    command: Command,
) -> Result<Value, ClientError>
where
    S: KeyValueStore,
    G: OrderGateway,
{
    let output = match command {
        Command::Show { prescription } => {
            json!({ "items": cart.get_items_by_prescription(prescription.as_deref()) })
        }
        Command::Add { items } => {
            let items = parse_items(&items)?;
            render(cart.add_items(items)?)?
        }
        Command::SetScope {
            prescription,
            pharmacy,
            items,
        } => {
            let items = parse_items(&items)?;
            let items = cart.set_items_for_prescription_and_pharmacy(
                &prescription,
                pharmacy.as_deref(),
                items,
            )?;
            json!({ "items": items })
        }
        Command::ClearPrescription { prescription } => {
            cart.clear_prescription(prescription.as_deref())?;
            json!({ "items": cart.get_items() })
        }
        Command::Clear => {
            cart.clear_cart()?;
            json!({ "items": [] })
        }
        Command::Summary { prescription } => {
            render(CheckoutSummary::for_prescription(cart, &prescription))?
        }
        Command::Checkout {
            prescription,
            payment,
            card_number,
            expiry,
            cvv,
            cardholder,
        } => {
            let payment = match payment {
                PaymentChoice::Cash => PaymentDetails::Cash,
                PaymentChoice::Card => PaymentDetails::Card(CardDetails {
                    card_number: format_card_number(&card_number.unwrap_or_default()),
                    expiry_date: format_expiry_date(&expiry.unwrap_or_default()),
                    cvv: cvv.unwrap_or_default(),
                    cardholder_name: cardholder.unwrap_or_default(),
                }),
            };
            let placed = place_order(cart, gateway, &prescription, &payment)?;
            info!(
                "Checkout: {prescription} finished with order {:?}",
                placed.order_code
            );
            render(placed)?
        }
        Command::EndSession => {
            return Err(ClientError::Payload(
                "Ending a session is only possible on a session store.".to_owned(),
            ));
        }
    };
    Ok(output)
}

fn parse_items(raw_items: &[String]) -> Result<Vec<CartItem>, ClientError> {
    raw_items
        .iter()
        .map(|raw| {
            serde_json::from_str::<CartItem>(raw)
                .map_err(|e| ClientError::Payload(format!("Invalid cart line {raw}: {e}")))
        })
        .collect()
}

fn render(value: impl serde::Serialize) -> Result<Value, ClientError> {
    serde_json::to_value(value)
        .map_err(|e| ClientError::Internal(anyhow::Error::new(e).context("Rendering output failed.")))
}
