use anyhow::Context;
use camino::Utf8PathBuf;
use config::Config;
use serde::Deserialize;

use crate::domain::cart::MergePolicy;

#[derive(Clone, Deserialize, Debug)]
pub struct Settings {
    pub environment: String,
    pub application: ApplicationSettings,
    pub storage: StorageSettings,
    pub cart: CartSettings,
}

#[derive(Clone, Deserialize, Debug)]
pub struct ApplicationSettings {
    pub logs_directory: String,
}

#[derive(Clone, Deserialize, Debug)]
pub struct StorageSettings {
    /// Root directory holding one sub-directory per session.
    pub directory: Utf8PathBuf,
    pub session: String,
}

#[derive(Clone, Deserialize, Debug)]
pub struct CartSettings {
    pub storage_key: String,
    #[serde(default)]
    pub merge_policy: MergePolicy,
}

fn find_config_dir() -> anyhow::Result<Utf8PathBuf> {
    let current_dir =
        std::env::current_dir().context("Failed to determine the current directory.")?;
    let current_dir =
        Utf8PathBuf::try_from(current_dir).context("Could not convert PathBuf to Utf8PathBuf")?;

    current_dir
        .ancestors()
        .map(|p| p.join("config"))
        .find(|p| {
            let base_path = p.join("base.yaml");
            p.is_dir() && base_path.is_file()
        })
        .ok_or_else(|| anyhow::anyhow!("Cannot find config directory!"))
}

pub fn get_config_settings() -> anyhow::Result<Settings> {
    let config_directory = find_config_dir()?;

    // Detect the running environment - default to `development` if unspecified.
    let environment: String =
        std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".to_owned());

    // Read the base configuration file called "base".
    let base_source =
        config::File::from(config_directory.join("base").into_std_path_buf()).required(true);

    // Read another file for environment-specific values.
    let env_source =
        config::File::from(config_directory.join(environment.as_str()).into_std_path_buf())
            .required(true);

    // Overrides from environment variables with a prefix of APP and '__' as separator,
    // e.g. `APP_STORAGE__SESSION=tab-2` sets `Settings.storage.session`.
    let overrides_source = config::Environment::with_prefix("app")
        .prefix_separator("_")
        .separator("__");

    let config = Config::builder()
        .add_source(base_source)
        .add_source(env_source)
        .add_source(overrides_source)
        .build()?;

    config
        .try_deserialize()
        .context("Could not deserialise config settings.")
}
