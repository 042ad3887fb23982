use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:5000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.output_dir, PathBuf::from("."));
    assert!(cfg.catalog_path.is_none());
    assert_eq!(cfg.max_batch_size, 100_000);
    assert_eq!(cfg.preview_rows, 50);
    assert_eq!(cfg.rate_limit_per_minute, 30);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("LEADGEN_ENV", "production");
    map.insert("LEADGEN_BIND_ADDR", "127.0.0.1:8080");
    map.insert("LEADGEN_OUTPUT_DIR", "/var/lib/leadgen");
    map.insert("LEADGEN_CATALOG_PATH", "./config/catalog.yaml");
    map.insert("LEADGEN_MAX_BATCH_SIZE", "500");
    map.insert("LEADGEN_PREVIEW_ROWS", "20");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.output_dir, PathBuf::from("/var/lib/leadgen"));
    assert_eq!(
        cfg.catalog_path,
        Some(PathBuf::from("./config/catalog.yaml"))
    );
    assert_eq!(cfg.max_batch_size, 500);
    assert_eq!(cfg.preview_rows, 20);
}

#[test]
fn build_app_config_ignores_blank_catalog_path() {
    let mut map = HashMap::new();
    map.insert("LEADGEN_CATALOG_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.catalog_path.is_none());
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("LEADGEN_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LEADGEN_BIND_ADDR"
        ),
        "expected InvalidEnvVar(LEADGEN_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_max_batch_size() {
    let mut map = HashMap::new();
    map.insert("LEADGEN_MAX_BATCH_SIZE", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LEADGEN_MAX_BATCH_SIZE"
        ),
        "expected InvalidEnvVar(LEADGEN_MAX_BATCH_SIZE), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_max_batch_size() {
    let mut map = HashMap::new();
    map.insert("LEADGEN_MAX_BATCH_SIZE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn build_app_config_rejects_zero_preview_rows() {
    let mut map = HashMap::new();
    map.insert("LEADGEN_PREVIEW_ROWS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}
