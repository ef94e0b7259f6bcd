//! Pipeline composition errors.

use serde::de::DeserializeOwned;

/// Error composing plugin stages.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Stage configuration contains an unrecognized or malformed option.
    ///
    /// Raised at composition time so typos surface before any page renders;
    /// the stage is not partially applied.
    #[error("invalid options for plugin stage '{stage}': {message}")]
    UnknownOption {
        /// Name of the stage being configured.
        stage: String,
        /// Description of the offending option.
        message: String,
    },
}

/// Parse stage options from a TOML value, rejecting unknown keys.
///
/// `None` yields the documented defaults.
pub(crate) fn parse_options<T>(stage: &str, value: Option<&toml::Value>) -> Result<T, PipelineError>
where
    T: DeserializeOwned + Default,
{
    match value {
        None => Ok(T::default()),
        Some(value) => {
            value
                .clone()
                .try_into()
                .map_err(|e: toml::de::Error| PipelineError::UnknownOption {
                    stage: stage.to_owned(),
                    message: e.to_string(),
                })
        }
    }
}
