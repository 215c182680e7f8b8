//! Set Scope Items slice
//!
//! Replaces the lines of one `(prescription, pharmacy)` pair with the pharmacist's current
//! selection, e.g. when a customer ticks medications on an order preview.

use tracing::{debug, instrument};

use crate::infra::storage::{KeyValueStore, StorageError};

use super::{AggregatedCart, CartItem, PharmacyName, PrescriptionId};

impl<S: KeyValueStore> AggregatedCart<S> {
    /// Makes `items` the complete content of the `(prescription_id, pharmacy_name)` scope and
    /// returns the whole item list. Lines of other scopes, including other pharmacies of the
    /// same prescription, are left alone.
    ///
    /// Supplied lines are stamped with the scope and a quantity of at least one, then appended
    /// as given: the scope holds exactly as many lines as were supplied.
    #[instrument(skip(self, items))]
    pub fn set_items_for_prescription_and_pharmacy<I>(
        &mut self,
        prescription_id: &str,
        pharmacy_name: Option<&str>,
        items: I,
    ) -> Result<Vec<CartItem>, StorageError>
    where
        I: IntoIterator<Item = CartItem>,
    {
        let prescription_id = PrescriptionId::from(prescription_id);
        let pharmacy_name = PharmacyName::from(pharmacy_name);

        let mut cart = self.get_cart();
        cart.items.retain(|item| {
            item.prescription_id != prescription_id || item.pharmacy_name != pharmacy_name
        });
        let kept = cart.items.len();

        cart.items.extend(items.into_iter().map(|item| {
            CartItem {
                prescription_id: prescription_id.clone(),
                pharmacy_name: pharmacy_name.clone(),
                ..item
            }
            .normalized()
        }));

        self.save_cart(&cart)?;
        debug!(
            "SetScopeItems: {} line(s) now in scope, {kept} line(s) outside it",
            cart.items.len() - kept
        );
        Ok(cart.items)
    }
}

//-------------------------- Tests -------------------------------
