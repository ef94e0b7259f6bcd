//! Site configuration facade.
//!
//! Single entry point combining the validated navigation tree, the composed
//! theme, and plugin wiring into one [`SiteConfig`] consumed by the external
//! render pipeline.
//!
//! # Architecture
//!
//! Configuration is a build-time, single-shot, synchronous operation:
//! declarative input ([`SiteInput`], usually a TOML file) flows through
//! validation, theme composition, and pipeline wrapping, producing either
//! one immutable [`SiteConfig`] or the first error encountered — fail-fast,
//! no partial config. The result is read-only and safely shareable across
//! rendering workers; nothing mutates shared state after building completes.
//!
//! # Example
//!
//! ```
//! use sitewire_config::{SiteBuilder, SiteInput};
//! use sitewire_pipeline::RenderPipeline;
//!
//! struct Passthrough;
//! impl RenderPipeline for Passthrough {
//!     fn render(&self, input: &str) -> String {
//!         input.to_owned()
//!     }
//! }
//!
//! let input = SiteInput::parse(r#"
//! title = "TORCH"
//! description = "TORCH Documentation"
//!
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//! "#)?;
//! let config = SiteBuilder::new(input, Box::new(Passthrough)).build()?;
//! assert_eq!(config.nav.roots()[0].text, "Home");
//! # Ok::<(), sitewire_config::ConfigError>(())
//! ```

mod builder;
mod error;
mod input;

pub use builder::{SiteBuilder, SiteConfig};
pub use error::ConfigError;
pub use input::{Appearance, BASE_ENV, SiteInput, base_from_env};

// Re-exports for consumers wiring themes and pipelines.
pub use sitewire_nav::{NavEntry, NavTree};
pub use sitewire_pipeline::{RenderPipeline, WrappedPipeline};
pub use sitewire_theme::{EffectiveTheme, Enhancer, Theme, ThemeOptions};
