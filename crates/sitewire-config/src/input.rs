//! Declarative site input.

use std::path::Path;

use serde::Deserialize;
use sitewire_theme::ThemeOptions;

use crate::error::ConfigError;

/// Environment variable overriding the site base path.
pub const BASE_ENV: &str = "SITE_BASE";

/// Declarative site configuration as parsed from TOML.
///
/// Constructed once at configuration-load time. The base path is not part
/// of the file; it is sourced from the [`BASE_ENV`] environment variable at
/// build time (see [`base_from_env`]).
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInput {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Whether the light/dark appearance switch is enabled.
    pub appearance: Appearance,
    /// Whether last-updated timestamps are shown.
    pub last_updated: bool,
    /// Theme options.
    pub theme: ThemeOptions,
    /// Plugin stage configuration tables, keyed by plugin name.
    pub plugins: toml::Table,
}

/// Appearance flag wrapper so the default is `true`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Appearance(pub bool);

impl Default for Appearance {
    fn default() -> Self {
        Self(true)
    }
}

impl SiteInput {
    /// Parse declarative input from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML or unknown
    /// top-level/theme keys.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load declarative input from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist,
    /// [`ConfigError::Io`] if it cannot be read, or [`ConfigError::Parse`]
    /// if it fails to parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded site configuration");
        Self::parse(&content)
    }
}

/// Base path from the [`BASE_ENV`] environment variable.
///
/// Falls back to `/` when the variable is unset or empty. Read once at
/// build time by [`SiteBuilder::build`](crate::SiteBuilder::build).
#[must_use]
pub fn base_from_env() -> String {
    std::env::var(BASE_ENV)
        .ok()
        .filter(|base| !base.is_empty())
        .unwrap_or_else(|| "/".to_owned())
}
