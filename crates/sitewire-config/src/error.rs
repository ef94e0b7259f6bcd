//! Facade configuration error.

use std::path::PathBuf;

use sitewire_nav::NavError;
use sitewire_pipeline::PipelineError;
use sitewire_theme::ThemeError;

/// Configuration error.
///
/// All variants are build-time and fail-fast: configuration either succeeds
/// as a whole or fails as a whole before any page render begins.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading the configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Navigation tree validation error.
    #[error(transparent)]
    Nav(#[from] NavError),
    /// Theme validation or composition error.
    #[error(transparent)]
    Theme(#[from] ThemeError),
    /// Plugin stage composition error.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    /// Plugin table names a plugin the engine does not know.
    #[error("unknown plugin '{0}' (known: diagrams, openapi)")]
    UnknownPlugin(String),
}
