//! Aggregated Cart
//!
//! A session-scoped collection of cart lines drawn from any number of pharmacies and
//! prescriptions. The whole cart is persisted as one JSON value under one storage key.
//! Reading never fails: a missing, unreadable or corrupt value is the empty cart.

use serde_json::Value;
use tracing::{debug, warn};

use crate::infra::storage::{KeyValueStore, StorageError};

use super::CartItem;

pub const DEFAULT_STORAGE_KEY: &str = "pp.AggregatedCart.v1";

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// What `add_items` does with the non-quantity fields of a line that is already in the cart.
/// Quantities are summed under either policy.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MergePolicy {
    /// Fields of the incoming line replace the stored ones.
    #[default]
    PreferIncoming,
    /// The stored line keeps its fields.
    KeepExisting,
}

pub struct AggregatedCart<S> {
    store: S,
    storage_key: String,
    merge_policy: MergePolicy,
}

impl<S: KeyValueStore> AggregatedCart<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            storage_key: storage_key.into(),
            merge_policy: MergePolicy::default(),
        }
    }

    pub fn with_merge_policy(mut self, merge_policy: MergePolicy) -> Self {
        self.merge_policy = merge_policy;
        self
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn merge_policy(&self) -> MergePolicy {
        self.merge_policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn get_cart(&self) -> Cart {
        let raw = match self.store.get(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::default(),
            Err(e) => {
                warn!("AggregatedCart: reading {} failed, using an empty cart. {e}", self.storage_key);
                return Cart::default();
            }
        };

        let items = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(mut cart)) => match cart.remove("items") {
                Some(Value::Array(items)) => items,
                Some(Value::Null) | None => Vec::new(),
                Some(other) => {
                    warn!("AggregatedCart: stored items are not a list ({other}), using an empty cart.");
                    return Cart::default();
                }
            },
            Ok(other) => {
                warn!("AggregatedCart: stored cart is not an object ({other}), using an empty cart.");
                return Cart::default();
            }
            Err(e) => {
                warn!("AggregatedCart: stored cart is not valid JSON, using an empty cart. {e}");
                return Cart::default();
            }
        };

        let items = items
            .into_iter()
            .filter_map(|value| {
                serde_json::from_value::<CartItem>(value.clone())
                    .inspect_err(|e| warn!("AggregatedCart: dropping unreadable cart line {value}. {e}"))
                    .ok()
            })
            .collect();

        Cart { items }
    }

    pub fn save_cart(&mut self, cart: &Cart) -> Result<(), StorageError> {
        let raw = serde_json::to_string(cart).map_err(|source| StorageError::Serialize {
            key: self.storage_key.clone(),
            source,
        })?;
        self.store.set(&self.storage_key, &raw)?;
        debug!("AggregatedCart: saved {} line(s) under {}", cart.items.len(), self.storage_key);
        Ok(())
    }

    pub fn clear_cart(&mut self) -> Result<(), StorageError> {
        self.store.remove(&self.storage_key)
    }
}

//-------------------------- Tests -------------------------------
