//! Order payloads sent to the order backend.

use tracing::warn;

use crate::domain::cart::CartItem;

use super::{CardDetails, CheckoutSummary, PaymentDetails, PaymentMethod};

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub prescription_code: String,
    pub payment_method: PaymentMethod,
    pub pharmacies: Vec<PharmacyOrder>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyOrder {
    pub pharmacy_id: Option<i64>,
    pub items: Vec<OrderLine>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub submission_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum PharmacyGroup {
    Id(i64),
    Name(String),
}

impl PharmacyGroup {
    fn of(item: &CartItem) -> Self {
        match item.pharmacy_id {
            Some(id) => PharmacyGroup::Id(id),
            None if item.pharmacy_name.is_blank() => PharmacyGroup::Name("unknown".to_owned()),
            None => PharmacyGroup::Name(item.pharmacy_name.to_string()),
        }
    }
}

impl CreateOrderRequest {
    /// One order for the whole summary, split per pharmacy in first-seen order.
    /// Lines without a pharmacy id are grouped by pharmacy name; the backend may reject those.
    pub fn from_summary(summary: &CheckoutSummary, payment_method: PaymentMethod) -> Self {
        let mut groups: Vec<(PharmacyGroup, PharmacyOrder)> = Vec::new();
        for item in &summary.items {
            let group = PharmacyGroup::of(item);
            let line = OrderLine {
                submission_id: item.id.to_string(),
                quantity: item.effective_quantity(),
            };
            match groups.iter_mut().find(|(g, _)| *g == group) {
                Some((_, order)) => order.items.push(line),
                None => groups.push((
                    group,
                    PharmacyOrder {
                        pharmacy_id: item.pharmacy_id,
                        items: vec![line],
                    },
                )),
            }
        }

        if groups.iter().any(|(_, order)| order.pharmacy_id.is_none()) {
            warn!(
                "CreateOrderRequest: some lines of {} lack a pharmacy id; the order may be rejected.",
                summary.prescription_id
            );
        }

        Self {
            prescription_code: summary.prescription_id.to_string(),
            payment_method,
            pharmacies: groups.into_iter().map(|(_, order)| order).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayRequest {
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_last4: Option<String>,
}

impl PayRequest {
    pub fn cash() -> Self {
        Self {
            payment_method: PaymentMethod::Cash,
            gateway_reference: None,
            card_last4: None,
        }
    }

    /// Card payments carry a gateway reference and only the last four card digits.
    pub fn card(card: &CardDetails, gateway_reference: impl Into<String>) -> Self {
        Self {
            payment_method: PaymentMethod::CreditCard,
            gateway_reference: Some(gateway_reference.into()),
            card_last4: Some(card.last4()),
        }
    }

    pub fn for_payment(payment: &PaymentDetails) -> Self {
        match payment {
            PaymentDetails::Cash => Self::cash(),
            PaymentDetails::Card(card) => {
                Self::card(card, format!("demo_{}", uuid::Uuid::now_v7().simple()))
            }
        }
    }
}
