use pharmacy_cart::{
    domain::cart::{DEFAULT_STORAGE_KEY, MergePolicy},
    infra::get_config_settings,
};
use serial_test::serial;

#[test]
#[serial]
fn development_settings_are_read_from_the_config_directory() {
    let settings = get_config_settings().expect("Settings should be read.");

    assert_eq!(settings.environment, "development");
    assert_eq!(settings.cart.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(settings.cart.merge_policy, MergePolicy::PreferIncoming);
    assert_eq!(settings.storage.session, "default");
}

#[test]
#[serial]
fn environment_variables_override_files() {
    // SAFETY: `#[serial]` keeps every test touching the environment on its own.
    unsafe {
        std::env::set_var("APP_STORAGE__SESSION", "tab-7");
        std::env::set_var("APP_CART__MERGE_POLICY", "keep_existing");
    }

    let settings = get_config_settings();

    unsafe {
        std::env::remove_var("APP_STORAGE__SESSION");
        std::env::remove_var("APP_CART__MERGE_POLICY");
    }

    let settings = settings.expect("Settings should be read.");
    assert_eq!(settings.storage.session, "tab-7");
    assert_eq!(settings.cart.merge_policy, MergePolicy::KeepExisting);
}
