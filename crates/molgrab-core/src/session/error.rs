use crate::core::models::molecule::BuildError;
use crate::session::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Structure build failed: {0}")]
    Build(#[from] BuildError),
    #[error("Configuration rejected: {0}")]
    Config(#[from] ConfigError),
}
