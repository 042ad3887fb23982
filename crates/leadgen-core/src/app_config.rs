use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Directory where lead workbooks are written and discovered.
    pub output_dir: PathBuf,
    /// Optional YAML override for the fallback category catalog.
    pub catalog_path: Option<PathBuf>,
    pub max_batch_size: u32,
    pub preview_rows: usize,
    pub rate_limit_per_minute: usize,
}
