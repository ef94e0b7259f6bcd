//! Validated navigation tree for documentation sites.
//!
//! This crate provides the declarative [`NavEntry`] input type and the
//! validated, immutable [`NavTree`] consumed by the render pipeline.
//!
//! # Architecture
//!
//! Navigation is declared as a tree of [`NavEntry`] values (usually
//! deserialized from the site's TOML configuration) and validated once at
//! configuration-load time:
//! - entries must carry a link or non-empty child items
//! - sibling links must be unambiguous (duplicates across branches are fine)
//! - `active_match` patterns must compile
//!
//! Validation produces a [`NavTree`] of [`NavNode`] values with compiled
//! active-match patterns. The tree is immutable and read-only thereafter.
//!
//! # Example
//!
//! ```
//! use sitewire_nav::{NavEntry, NavTree};
//!
//! let entries = vec![
//!     NavEntry::new("Home", "/"),
//!     NavEntry::new("Guide", "/guide").with_items(vec![
//!         NavEntry::new("Setup", "/guide/setup"),
//!     ]),
//! ];
//! let tree = NavTree::validate(&entries)?;
//! assert_eq!(tree.flatten().count(), 3);
//! # Ok::<(), sitewire_nav::NavError>(())
//! ```

mod entry;
mod error;
mod tree;

pub use entry::NavEntry;
pub use error::NavError;
pub use tree::{Flatten, NavNode, NavTree};
