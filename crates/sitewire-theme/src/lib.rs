//! Theme options, capability registry, and composition engine.
//!
//! # Architecture
//!
//! A theme is composed, not inherited:
//! - [`ThemeOptions`] is the validated, immutable option set from the site
//!   configuration.
//! - [`AppHandle`] is an explicit, passed-by-handle capability registry —
//!   never ambient global state — so registration order and conflict
//!   resolution stay visible and testable.
//! - [`compose`] applies a base [`Theme`] first (defaults), then each
//!   [`Enhancer`] exactly once in declaration order against the same handle.
//!   Later enhancers observe registrations made by earlier ones, which is
//!   how an enhancer can delegate to a nested theme and still rename its
//!   own registrations around it.
//!
//! Conflicts are resolved last-write-wins: if two enhancers register a
//! capability under the same name, the later registration silently replaces
//! the earlier one (a `tracing` debug event is emitted so the replacement
//! is observable).
//!
//! # Example
//!
//! ```
//! use sitewire_theme::{AppHandle, DefaultTheme, ThemeOptions, compose};
//!
//! let options = ThemeOptions::default();
//! let theme = compose(&DefaultTheme, &[], AppHandle::new(), &options)?;
//! assert!(theme.capability("Badge").is_some());
//! # Ok::<(), sitewire_theme::ThemeError>(())
//! ```

mod builtin;
mod compose;
mod error;
mod options;
mod registry;

pub use builtin::{ApiReferenceEnhancer, ApiReferenceTheme, Badge, DefaultTheme};
pub use compose::{EffectiveTheme, Enhancer, Theme, compose};
pub use error::{EnhancerFailure, ThemeError};
pub use options::{
    EditLink, Footer, Outline, Search, SearchProvider, SiteTitle, SocialIcon, SocialLink,
    ThemeOptions,
};
pub use registry::{AppHandle, Capability, CapabilityRegistry};
