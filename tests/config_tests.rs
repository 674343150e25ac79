use std::fs;
use std::path::PathBuf;

use fio_shipping::config::{ConfigOrigin, DEFAULT_FIO_BASE_URL, FioConfig};
use fio_shipping::ShippingConfig;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("fio_shipping_{}_{}", std::process::id(), name))
}

#[test]
fn test_default_config_is_valid() {
    let config = ShippingConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.fio.base_url, DEFAULT_FIO_BASE_URL);
    assert_eq!(config.calculator.max_concurrent_planets, 4);
    assert_eq!(config.logging.verbosity, 1);
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = ShippingConfig::default();
    config.calculator.max_concurrent_planets = 0;
    assert!(config.validate().is_err(), "Zero concurrency must be rejected");

    let mut config = ShippingConfig::default();
    config.fio.base_url = "rest.fnar.net".to_string();
    assert!(config.validate().is_err(), "Base URL needs a scheme");
}

#[test]
fn test_load_writes_defaults_then_reads_edits() {
    let dir = temp_path("config");
    let path = dir.join("fio_shipping.toml");
    let path_str = path.to_str().unwrap();
    let _ = fs::remove_dir_all(&dir);

    let (created, origin) = ShippingConfig::load(path_str, true).expect("Default config should be created");
    assert_eq!(origin, ConfigOrigin::Created);
    assert!(path.exists(), "Config file should be written on first load");
    assert_eq!(created.calculator.max_concurrent_planets, 4);

    let mut edited = created.clone();
    edited.fio.username = "trader".to_string();
    edited.calculator.max_concurrent_planets = 8;
    edited.save(path_str).unwrap();

    let (reloaded, origin) = ShippingConfig::load(path_str, true).unwrap();
    assert_eq!(origin, ConfigOrigin::File);
    assert_eq!(reloaded.fio.username, "trader");
    assert_eq!(reloaded.calculator.max_concurrent_planets, 8);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_load_without_create_leaves_disk_untouched() {
    let dir = temp_path("offline");
    let path = dir.join("fio_shipping.toml");
    let _ = fs::remove_dir_all(&dir);

    let (config, origin) = ShippingConfig::load(path.to_str().unwrap(), false).unwrap();

    assert_eq!(origin, ConfigOrigin::Defaults);
    assert!(!path.exists(), "No config file should be written");
    assert!(!dir.exists(), "No parent directory should be created");
    assert_eq!(config.fio.base_url, DEFAULT_FIO_BASE_URL);
}

#[test]
fn test_invalid_toml_is_a_config_error() {
    let path = temp_path("broken.toml");
    fs::write(&path, "[fio\nbase_url = ").unwrap();

    let result = ShippingConfig::load(path.to_str().unwrap(), true);
    assert!(matches!(result, Err(fio_shipping::ShippingError::Config(_))));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_configured_credentials_take_precedence() {
    let fio = FioConfig {
        base_url: DEFAULT_FIO_BASE_URL.to_string(),
        username: "trader".to_string(),
        api_key: "secret-key".to_string(),
    };

    let (api_key, username) = fio.resolve_credentials().unwrap();
    assert_eq!(api_key, "secret-key");
    assert_eq!(username, "trader");
}
