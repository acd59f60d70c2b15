use std::path::PathBuf;

/// Errors that can occur while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("could not read config {path}: {source}")]
    Io {
        /// The file that failed to read.
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`Config`](super::Config).
    #[error("invalid config {path}: {source}")]
    Json {
        /// The file that failed to parse.
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The configured minimum first name length is zero.
    #[error("first_name_min_len must be at least 1")]
    ZeroMinLength,
}
