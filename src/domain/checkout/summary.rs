//! Checkout Summary slice

use rust_decimal::Decimal;
use tracing::warn;

use crate::{
    domain::cart::{AggregatedCart, CartItem, PrescriptionId},
    infra::storage::KeyValueStore,
};

/// The lines a customer is about to pay for, with their totals.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub prescription_id: PrescriptionId,
    pub items: Vec<CartItem>,
    pub subtotal: Decimal,
    pub total: Decimal,
}

impl CheckoutSummary {
    /// Lines of `prescription_id`. When any line carries a selection flag, only selected
    /// lines are kept. Totals are derived from the lines alone, there are no discounts.
    pub fn for_prescription<S: KeyValueStore>(
        cart: &AggregatedCart<S>,
        prescription_id: &str,
    ) -> Self {
        // A blank id would select the whole cart.
        let items = if prescription_id.is_empty() {
            Vec::new()
        } else {
            cart.get_items_by_prescription(Some(prescription_id))
        };
        Self::from_items(prescription_id, items)
    }

    pub fn from_items<I>(prescription_id: &str, items: I) -> Self
    where
        I: IntoIterator<Item = CartItem>,
    {
        let items: Vec<CartItem> = items.into_iter().collect();
        let has_selection_flags = items.iter().any(|item| item.selected.is_some());
        let items: Vec<CartItem> = if has_selection_flags {
            items
                .into_iter()
                .filter(|item| item.selected == Some(true))
                .collect()
        } else {
            items
        };

        let mut subtotal = Decimal::ZERO;
        for item in &items {
            let Some(line_total) = item.line_total() else {
                warn!("CheckoutSummary: line {} has no usable price, counting it as zero.", item.id);
                continue;
            };
            match subtotal.checked_add(line_total) {
                Some(sum) => subtotal = sum,
                None => warn!("CheckoutSummary: line {} overflows the subtotal, counting it as zero.", item.id),
            }
        }

        Self {
            prescription_id: prescription_id.into(),
            items,
            subtotal,
            total: subtotal,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

//-------------------------- Tests -------------------------------
