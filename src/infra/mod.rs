mod cli;
mod client_error;
mod config;
pub mod storage;

pub use cli::{Cli, Command, PaymentChoice};
pub use client_error::ClientError;
pub use config::{ApplicationSettings, CartSettings, Settings, StorageSettings, get_config_settings};
