mod add_items;
mod aggregated_cart;
mod cart_item;
mod cart_items;
mod clear_prescription;
mod ids;
mod set_scope_items;

pub use aggregated_cart::{AggregatedCart, Cart, DEFAULT_STORAGE_KEY, MergePolicy};
pub use cart_item::CartItem;
pub use ids::*;
