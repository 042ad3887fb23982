pub mod app_config;
pub mod catalog;
pub mod config;
pub mod lead;
pub mod telemetry;

pub use app_config::{AppConfig, Environment};
pub use catalog::{
    load_catalog, normalize_list, parse_count, split_list, Catalog, DEFAULT_COUNT,
    DEFAULT_DECISION_MAKER_TITLES, REQUEST_DEFAULT_INDUSTRIES, REQUEST_DEFAULT_LOCATIONS,
    REQUEST_DEFAULT_SIZES,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use lead::{CellValue, Lead, LEAD_COLUMNS};
pub use telemetry::{BatchTelemetry, TelemetrySnapshot};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[source] serde_yaml::Error),

    #[error("configuration validation failed: {0}")]
    Validation(String),
}
