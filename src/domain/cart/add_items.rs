//! Add Items slice

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::infra::storage::{KeyValueStore, StorageError};

use super::{AggregatedCart, Cart, CartItem, CartKey, MergePolicy};

impl<S: KeyValueStore> AggregatedCart<S> {
    /// Merges `new_items` into the cart by [`CartKey`] and persists the result.
    ///
    /// A line whose key is already present has its quantity increased by the incoming
    /// quantity; a new key is appended. Adding the same list twice therefore doubles the
    /// quantities. Lines keep the position of their first occurrence.
    #[instrument(skip_all, fields(incoming = tracing::field::Empty))]
    pub fn add_items<I>(&mut self, new_items: I) -> Result<Cart, StorageError>
    where
        I: IntoIterator<Item = CartItem>,
    {
        let cart = self.get_cart();
        let mut lines = MergedLines::with_capacity(cart.items.len());
        for item in cart.items {
            lines.replace(item);
        }

        let mut incoming = 0usize;
        for item in new_items {
            incoming += 1;
            lines.accumulate(item.normalized(), self.merge_policy());
        }
        tracing::Span::current().record("incoming", incoming);

        let cart = Cart::new(lines.into_items());
        self.save_cart(&cart)?;
        debug!("AddItems: merged {incoming} line(s), cart now has {}", cart.items.len());
        Ok(cart)
    }
}

/// Insertion-ordered lines with at most one line per key.
struct MergedLines {
    positions: HashMap<CartKey, usize>,
    items: Vec<CartItem>,
}

impl MergedLines {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: HashMap::with_capacity(capacity),
            items: Vec::with_capacity(capacity),
        }
    }

    /// A later stored line with an already seen key replaces the earlier one in place.
    fn replace(&mut self, item: CartItem) {
        match self.positions.get(&item.key()) {
            Some(&position) => self.items[position] = item,
            None => self.push(item),
        }
    }

    fn accumulate(&mut self, item: CartItem, policy: MergePolicy) {
        let Some(&position) = self.positions.get(&item.key()) else {
            self.push(item);
            return;
        };

        let existing = &mut self.items[position];
        let quantity = existing
            .effective_quantity()
            .saturating_add(item.effective_quantity());
        match policy {
            MergePolicy::PreferIncoming => *existing = item.with_quantity(quantity),
            MergePolicy::KeepExisting => existing.quantity = quantity,
        }
    }

    fn push(&mut self, item: CartItem) {
        self.positions.insert(item.key(), self.items.len());
        self.items.push(item);
    }

    fn into_items(self) -> Vec<CartItem> {
        self.items
    }
}

//-------------------------- Tests -------------------------------
