use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed or fails validation.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed or fails validation.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("LEADGEN_ENV", "development"));

    let bind_addr = parse("LEADGEN_BIND_ADDR", "0.0.0.0:5000")?;
    let log_level = or_default("LEADGEN_LOG_LEVEL", "info");
    let output_dir = PathBuf::from(or_default("LEADGEN_OUTPUT_DIR", "."));
    let catalog_path = lookup("LEADGEN_CATALOG_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let max_batch_size = parse_u32("LEADGEN_MAX_BATCH_SIZE", "100000")?;
    let preview_rows = parse_usize("LEADGEN_PREVIEW_ROWS", "50")?;
    let rate_limit_per_minute = parse_usize("LEADGEN_RATE_LIMIT_PER_MINUTE", "30")?;

    if max_batch_size == 0 {
        return Err(ConfigError::Validation(
            "LEADGEN_MAX_BATCH_SIZE must be greater than zero".to_string(),
        ));
    }
    if preview_rows == 0 {
        return Err(ConfigError::Validation(
            "LEADGEN_PREVIEW_ROWS must be greater than zero".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        output_dir,
        catalog_path,
        max_batch_size,
        preview_rows,
        rate_limit_per_minute,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
