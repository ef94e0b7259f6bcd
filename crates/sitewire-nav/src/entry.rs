//! Declarative navigation entry.

use serde::{Deserialize, Serialize};

/// One node in the declarative navigation/sidebar tree.
///
/// This is the raw input shape as it appears in the site configuration.
/// It carries no guarantees; see [`NavTree::validate`](crate::NavTree::validate)
/// for the validated form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavEntry {
    /// Display text.
    pub text: String,
    /// Link target path. Optional for pure container entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Pattern deciding when this entry is highlighted as active.
    ///
    /// Disambiguates active-state highlighting, not navigation identity:
    /// the same link may appear in different branches with different
    /// patterns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,
    /// Child entries, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<NavEntry>>,
}

impl NavEntry {
    /// Create a leaf entry with text and link.
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            active_match: None,
            items: None,
        }
    }

    /// Create a pure container entry (no link of its own).
    #[must_use]
    pub fn group(text: impl Into<String>, items: Vec<NavEntry>) -> Self {
        Self {
            text: text.into(),
            link: None,
            active_match: None,
            items: Some(items),
        }
    }

    /// Set child entries.
    #[must_use]
    pub fn with_items(mut self, items: Vec<NavEntry>) -> Self {
        self.items = Some(items);
        self
    }

    /// Set the active-match pattern.
    #[must_use]
    pub fn with_active_match(mut self, pattern: impl Into<String>) -> Self {
        self.active_match = Some(pattern.into());
        self
    }
}
