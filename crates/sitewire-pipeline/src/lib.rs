//! Plugin stage wrapping for the page render pipeline.
//!
//! The markdown-to-HTML renderer itself is an external collaborator behind
//! the [`RenderPipeline`] trait. This crate wraps it with ordered
//! [`PluginStage`] hooks:
//!
//! - pre-stages transform source content before the base renderer runs, in
//!   declared order;
//! - post-stages transform the rendered markup after, in *reverse* declared
//!   order (standard wrapping discipline: the last-registered pre-stage runs
//!   closest to the renderer, and its corresponding post-stage unwraps
//!   first).
//!
//! Stage kind is declared by the plugin, never inferred. Stage options come
//! from TOML tables with documented defaults; unrecognized keys are rejected
//! at composition time rather than silently ignored.
//!
//! # Example
//!
//! ```
//! use sitewire_pipeline::{DiagramStage, RenderPipeline, WrappedPipeline};
//!
//! struct Passthrough;
//! impl RenderPipeline for Passthrough {
//!     fn render(&self, input: &str) -> String {
//!         input.to_owned()
//!     }
//! }
//!
//! let pipeline = WrappedPipeline::wrap(
//!     Box::new(Passthrough),
//!     vec![Box::new(DiagramStage::default())],
//! );
//! let html = pipeline.render("```mermaid\nA --> B\n```\n");
//! assert!(html.contains("sw-diagram"));
//! ```

mod diagram;
mod error;
mod fence;
mod openapi;
mod stage;

pub use diagram::{DiagramStage, DiagramStageOptions};
pub use error::PipelineError;
pub use openapi::{OpenApiStage, OpenApiStageOptions};
pub use stage::{PluginStage, RenderPipeline, StageKind, WrappedPipeline};

/// Minimal HTML escaping for text embedded in stage output.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
