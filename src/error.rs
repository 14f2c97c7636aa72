use thiserror::Error;

use crate::config::ConfigError;
use crate::options::ValidationError;

/// Errors that stop the service from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid CORS policy: {0}")]
    Cors(#[from] ValidationError),
    #[error("server I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
