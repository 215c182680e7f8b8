pub mod commands;
pub mod domain;
pub mod infra;

use domain::{
    cart::AggregatedCart,
    checkout::LoggingOrderGateway,
};
use infra::{
    Cli, ClientError, Command, Settings,
    storage::{FileSessionStore, StorageError},
};
use serde_json::{Value, json};
use tracing_appender::non_blocking::WorkerGuard;

pub fn configure_tracing(settings: &Settings) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(
        settings.application.logs_directory.clone(),
        "pharmacy_cart.log",
    );
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(non_blocking)
        .init();
    _guard
}

/// The store of `session`, or of the configured session when none is given.
pub fn open_session_store(
    settings: &Settings,
    session: Option<&str>,
) -> Result<FileSessionStore, StorageError> {
    let session = session.unwrap_or(settings.storage.session.as_str());
    FileSessionStore::new(&settings.storage.directory, session)
}

pub fn open_cart(settings: &Settings, store: FileSessionStore) -> AggregatedCart<FileSessionStore> {
    AggregatedCart::with_key(store, settings.cart.storage_key.clone())
        .with_merge_policy(settings.cart.merge_policy)
}

pub fn run(settings: &Settings, cli: Cli) -> Result<Value, ClientError> {
    let mut store = open_session_store(settings, cli.session.as_deref())?;

    if cli.command == Command::EndSession {
        store.end_session()?;
        return Ok(json!({ "session": store.session_dir().as_str(), "ended": true }));
    }

    let mut cart = open_cart(settings, store);
    commands::execute(&mut cart, &mut LoggingOrderGateway, cli.command)
}
