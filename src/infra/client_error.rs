use std::process::ExitCode;

use crate::{domain::checkout::CheckoutError, infra::storage::StorageError};

/// Error shown to the person running the command. Internal details go to the log only.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Payload(String),
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
    #[error("Cart storage problem. Please check the logs.")]
    Storage(#[from] StorageError),
    #[error("Please check the logs.")]
    Internal(#[from] anyhow::Error),
}

impl ClientError {
    pub fn exit_code(&self) -> ExitCode {
        let code = match self {
            ClientError::Payload(_) => 2,
            ClientError::Checkout(CheckoutError::Gateway(_) | CheckoutError::Storage(_)) => 1,
            ClientError::Checkout(_) => 3,
            ClientError::Storage(_) | ClientError::Internal(_) => 1,
        };
        ExitCode::from(code)
    }
}
