//! Theme validation and composition errors.

use std::error::Error;
use std::fmt;

/// Theme error.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// Option validation error.
    #[error("theme configuration error: {0}")]
    Validation(String),
    /// A theme or enhancer failed during composition.
    ///
    /// Composition is a build-time, single-shot operation: no partial
    /// rollback is attempted, recovery means re-running the whole build.
    #[error("theme component '{name}' failed")]
    Enhancer {
        /// Name of the failing theme or enhancer.
        name: String,
        /// The originating cause.
        #[source]
        source: EnhancerFailure,
    },
}

/// Failure reported by a [`Theme`](crate::Theme) or [`Enhancer`](crate::Enhancer).
///
/// Carries a message and an optional originating cause so the build aborts
/// with the full error chain attached.
#[derive(Debug)]
pub struct EnhancerFailure {
    message: String,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl EnhancerFailure {
    /// Create a failure with a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a failure with a message and an originating cause.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl fmt::Display for EnhancerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for EnhancerFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}
