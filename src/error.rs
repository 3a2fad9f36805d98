use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the demo runners. The builders and the other demos are total;
/// only the setup and output around them can fail.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to set up logging: {0}")]
    Logging(String),
}

impl ReportError {
    pub fn read_config(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadConfig {
            path: path.into(),
            source,
        }
    }
}
