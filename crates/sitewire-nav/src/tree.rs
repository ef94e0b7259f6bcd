//! Validated navigation tree with traversal.
//!
//! Pure data: validation has no side effects and the resulting tree is
//! immutable. Pages are kept in declaration order throughout; traversal is
//! depth-first pre-order and restartable.

use std::collections::HashSet;

use regex::Regex;

use crate::entry::NavEntry;
use crate::error::NavError;

/// Validated navigation node with a compiled active-match pattern.
#[derive(Clone, Debug)]
pub struct NavNode {
    /// Display text.
    pub text: String,
    /// Link target path. `None` for pure container nodes.
    pub link: Option<String>,
    /// Compiled active-match pattern.
    active_match: Option<Regex>,
    /// Child nodes, in declaration order.
    pub items: Vec<NavNode>,
}

impl NavNode {
    /// Validate a single entry and its subtree.
    fn from_entry(entry: &NavEntry) -> Result<Self, NavError> {
        // An explicitly empty items list counts as absent.
        let child_entries = entry.items.as_deref().unwrap_or_default();
        let has_link = entry.link.as_deref().is_some_and(|l| !l.is_empty());

        if !has_link && child_entries.is_empty() {
            return Err(NavError::MissingTarget {
                text: entry.text.clone(),
            });
        }

        let active_match = match &entry.active_match {
            Some(pattern) => Some(Regex::new(pattern).map_err(|source| NavError::Pattern {
                text: entry.text.clone(),
                source,
            })?),
            None => None,
        };

        Ok(Self {
            text: entry.text.clone(),
            link: entry.link.clone().filter(|l| !l.is_empty()),
            active_match,
            items: validate_siblings(child_entries)?,
        })
    }

    /// The active-match pattern as written in the configuration, if any.
    #[must_use]
    pub fn active_match(&self) -> Option<&str> {
        self.active_match.as_ref().map(Regex::as_str)
    }

    /// Whether this node should be highlighted as active for a page path.
    ///
    /// Uses the `active_match` pattern when one is set, and falls back to
    /// exact link equality otherwise. Container nodes without a link are
    /// never active themselves.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        match &self.active_match {
            Some(pattern) => pattern.is_match(path),
            None => self.link.as_deref() == Some(path),
        }
    }
}

/// Validate a sibling list: each entry recursively, plus link uniqueness
/// within the list.
fn validate_siblings(entries: &[NavEntry]) -> Result<Vec<NavNode>, NavError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if let Some(link) = entry.link.as_deref().filter(|l| !l.is_empty())
            && !seen.insert(link)
        {
            return Err(NavError::DuplicateLink {
                link: link.to_owned(),
            });
        }
    }
    entries.iter().map(NavNode::from_entry).collect()
}

/// Validated, ordered navigation tree.
///
/// Constructed once at configuration-load time via [`NavTree::validate`];
/// immutable thereafter and consumed read-only by the renderer.
#[derive(Clone, Debug, Default)]
pub struct NavTree {
    roots: Vec<NavNode>,
}

impl NavTree {
    /// Validate a declarative entry list into a navigation tree.
    ///
    /// # Errors
    ///
    /// - [`NavError::MissingTarget`] if an entry has neither a non-empty
    ///   link nor non-empty child items.
    /// - [`NavError::DuplicateLink`] if two entries in the same sibling
    ///   list share a link. Duplicates across branches are permitted.
    /// - [`NavError::Pattern`] if an `active_match` pattern fails to
    ///   compile.
    pub fn validate(entries: &[NavEntry]) -> Result<Self, NavError> {
        Ok(Self {
            roots: validate_siblings(entries)?,
        })
    }

    /// Root nodes in declaration order.
    #[must_use]
    pub fn roots(&self) -> &[NavNode] {
        &self.roots
    }

    /// Whether the tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Iterate over all nodes in depth-first pre-order.
    ///
    /// Sibling order is preserved. Iteration is stateless with respect to
    /// the tree and may be restarted any number of times.
    #[must_use]
    pub fn flatten(&self) -> Flatten<'_> {
        let mut stack: Vec<&NavNode> = self.roots.iter().collect();
        stack.reverse();
        Flatten { stack }
    }
}

/// Depth-first pre-order iterator over a [`NavTree`].
///
/// Created by [`NavTree::flatten`].
pub struct Flatten<'a> {
    stack: Vec<&'a NavNode>,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = &'a NavNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Children are pushed in reverse so the first child pops next.
        self.stack.extend(node.items.iter().rev());
        Some(node)
    }
}
