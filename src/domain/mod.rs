pub mod cart;
pub mod checkout;
mod helpers;

pub use helpers::fake;
