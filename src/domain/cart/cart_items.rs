//! Cart Items slice

use crate::infra::storage::KeyValueStore;

use super::{AggregatedCart, CartItem};

impl<S: KeyValueStore> AggregatedCart<S> {
    pub fn get_items(&self) -> Vec<CartItem> {
        self.get_cart().items
    }

    /// Lines belonging to `prescription_id`. A missing or blank id selects every line.
    pub fn get_items_by_prescription(&self, prescription_id: Option<&str>) -> Vec<CartItem> {
        let items = self.get_items();
        match prescription_id.filter(|id| !id.is_empty()) {
            Some(prescription_id) => items
                .into_iter()
                .filter(|item| item.prescription_id == *prescription_id)
                .collect(),
            None => items,
        }
    }
}

//-------------------------- Tests -------------------------------
