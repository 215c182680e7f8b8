//! Clear Prescription slice

use tracing::{debug, instrument};

use crate::infra::storage::{KeyValueStore, StorageError};

use super::AggregatedCart;

impl<S: KeyValueStore> AggregatedCart<S> {
    /// Removes every line of `prescription_id` and keeps the rest in order.
    ///
    /// A missing or blank id does nothing, so unscoped lines can never be cleared by accident.
    #[instrument(skip(self))]
    pub fn clear_prescription(&mut self, prescription_id: Option<&str>) -> Result<(), StorageError> {
        let Some(prescription_id) = prescription_id.filter(|id| !id.is_empty()) else {
            return Ok(());
        };

        let mut cart = self.get_cart();
        let before = cart.items.len();
        cart.items
            .retain(|item| item.prescription_id != *prescription_id);
        self.save_cart(&cart)?;
        debug!(
            "ClearPrescription: removed {} line(s) of {prescription_id}",
            before - cart.items.len()
        );
        Ok(())
    }
}

//-------------------------- Tests -------------------------------
