use camino::Utf8PathBuf;
use pharmacy_cart::{
    domain::cart::{DEFAULT_STORAGE_KEY, MergePolicy},
    infra::{ApplicationSettings, CartSettings, Settings, StorageSettings},
};
use uuid::Uuid;

/// A fresh directory below the system temp dir. Removed again when dropped.
pub struct TempRoot(pub Utf8PathBuf);

impl TempRoot {
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("pharmacy_cart-it-{}", Uuid::now_v7()));
        TempRoot(Utf8PathBuf::try_from(dir).expect("Temp dir should be UTF-8."))
    }
}

impl Drop for TempRoot {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

/// Settings pointing all storage and logs into `root`.
pub fn test_settings(root: &TempRoot) -> Settings {
    Settings {
        environment: "test".to_owned(),
        application: ApplicationSettings {
            logs_directory: root.0.join("logs").to_string(),
        },
        storage: StorageSettings {
            directory: root.0.join("sessions"),
            session: "default".to_owned(),
        },
        cart: CartSettings {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            merge_policy: MergePolicy::PreferIncoming,
        },
    }
}
