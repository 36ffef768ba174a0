//! Loading configuration and price lists from disk

use std::fs;

use garage_app::config::Config;
use garage_app::pricing::load_price_list;
use garage_app::session::{Command, Outcome, Session};
use garage_types::{ConfigError, Error, VehicleCategory};
use tempfile::tempdir;

#[test]
fn test_missing_config_is_not_found() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("Config.json");

    let err = Config::load(&path).unwrap_err();
    match err {
        Error::Config(ConfigError::NotFound(missing)) => assert_eq!(missing, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_price_list_is_not_found() {
    let dir = tempdir().expect("Failed to create temp dir");
    let err = load_price_list(&dir.path().join("Pricelist.json")).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::NotFound(_))));
}

#[test]
fn test_malformed_config_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("Config.json");
    fs::write(&path, "{\"spaceCount\": \"many\"}").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
}

#[test]
fn test_toml_files_by_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config_path = dir.path().join("garage.toml");
    let prices_path = dir.path().join("prices.toml");
    fs::write(
        &config_path,
        "spaceCount = 2\n\n[vehicleTypeLimits]\nCAR = 1\n",
    )
    .unwrap();
    fs::write(&prices_path, "[Prices]\nCAR = 20\n").unwrap();

    let config = Config::load(&config_path).unwrap();
    let prices = load_price_list(&prices_path).unwrap();
    assert_eq!(prices.rate(VehicleCategory::Car), Some(20));

    let mut session = Session::from_config(&config, prices).unwrap();
    let now = chrono::Utc::now();
    let park = |reg: &str| Command::Park {
        category: "CAR".to_string(),
        registration: reg.to_string(),
    };
    assert!(!session.dispatch(park("A1"), now).is_rejected());
    assert!(!session.dispatch(park("A2"), now).is_rejected());
    assert!(matches!(
        session.dispatch(park("A3"), now),
        Outcome::Rejected { .. }
    ));

    let mc = Command::Park {
        category: "MC".to_string(),
        registration: "M1".to_string(),
    };
    assert!(session.dispatch(mc, now).is_rejected());
}

#[test]
fn test_legacy_json_files() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config_path = dir.path().join("Config.json");
    let prices_path = dir.path().join("Pricelist.json");
    fs::write(
        &config_path,
        r#"{"VehicleTypes": {"CAR": {"MaxPerSpace": 1}, "MC": {"MaxPerSpace": 2}}}"#,
    )
    .unwrap();
    fs::write(&prices_path, r#"{"Prices": {"CAR": 20, "MC": 10}}"#).unwrap();

    let config = Config::load(&config_path).unwrap();
    assert_eq!(config.space_count, 100);
    let prices = load_price_list(&prices_path).unwrap();
    assert_eq!(prices.rate(VehicleCategory::Motorcycle), Some(10));
}
