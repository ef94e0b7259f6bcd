//! Navigation validation errors.

/// Error produced when validating a navigation tree.
///
/// All variants are build-time, fail-fast errors: the configuration is
/// deterministic, so none of them is worth retrying without a fix.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Entry has neither a link nor child items to navigate to.
    #[error("navigation entry '{text}' has neither a link nor child items")]
    MissingTarget {
        /// Display text of the offending entry.
        text: String,
    },
    /// Two entries in the same sibling list share a link.
    #[error("duplicate link '{link}' among sibling navigation entries")]
    DuplicateLink {
        /// The duplicated link.
        link: String,
    },
    /// `active_match` pattern failed to compile.
    #[error("invalid active_match pattern on entry '{text}'")]
    Pattern {
        /// Display text of the offending entry.
        text: String,
        /// The underlying regex compile error.
        #[source]
        source: regex::Error,
    },
}
