//! Diagram rendering stage.
//!
//! Pre-stage that lifts fenced diagram code blocks out of the markdown
//! source and replaces them with embed elements the client-side diagram
//! renderer mounts. The actual diagram rendering is the plugin's own
//! business; this stage only emits the mount markup.

use serde::Deserialize;

use crate::error::{PipelineError, parse_options};
use crate::fence::Fence;
use crate::stage::{PluginStage, StageKind};

/// Fence languages recognized as diagrams.
const DIAGRAM_LANGUAGES: &[&str] = &["mermaid"];

/// Options for the diagram stage.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagramStageOptions {
    /// Diagram theme passed through to the client renderer.
    ///
    /// Default: `"default"`.
    pub theme: String,
}

impl Default for DiagramStageOptions {
    fn default() -> Self {
        Self {
            theme: "default".to_owned(),
        }
    }
}

/// Fence currently being scanned through.
enum OpenFence {
    /// Non-diagram fence; its content passes through untouched, including
    /// any diagram fence syntax it happens to contain.
    Foreign(Fence),
    /// Diagram fence; its source is collected for the embed element.
    Diagram {
        fence: Fence,
        /// Raw opening line, kept so an unclosed fence can be restored.
        opening: String,
        source: String,
    },
}

/// Pre-stage replacing diagram fences with embed elements.
#[derive(Clone, Debug, Default)]
pub struct DiagramStage {
    options: DiagramStageOptions,
}

impl DiagramStage {
    /// Create a stage with explicit options.
    #[must_use]
    pub fn new(options: DiagramStageOptions) -> Self {
        Self { options }
    }

    /// Create a stage from a TOML options table.
    ///
    /// `None` yields the documented defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::UnknownOption`] if the table contains an
    /// unrecognized or malformed key.
    pub fn from_value(value: Option<&toml::Value>) -> Result<Self, PipelineError> {
        Ok(Self::new(parse_options("diagrams", value)?))
    }

    fn embed(&self, source: &str) -> String {
        format!(
            r#"<div class="sw-diagram" data-engine="mermaid" data-theme="{}">{}</div>"#,
            crate::escape_html(&self.options.theme),
            crate::escape_html(source.trim_end()),
        )
    }
}

impl PluginStage for DiagramStage {
    fn name(&self) -> &str {
        "diagrams"
    }

    fn kind(&self) -> StageKind {
        StageKind::Pre
    }

    fn apply(&self, content: &str) -> String {
        let mut out = String::with_capacity(content.len());
        let mut open: Option<OpenFence> = None;

        for line in content.lines() {
            match &mut open {
                None => match Fence::open(line) {
                    Some((fence, info)) if DIAGRAM_LANGUAGES.contains(&info) => {
                        open = Some(OpenFence::Diagram {
                            fence,
                            opening: line.to_owned(),
                            source: String::new(),
                        });
                    }
                    Some((fence, _)) => {
                        open = Some(OpenFence::Foreign(fence));
                        out.push_str(line);
                        out.push('\n');
                    }
                    None => {
                        out.push_str(line);
                        out.push('\n');
                    }
                },
                Some(OpenFence::Foreign(fence)) => {
                    let closed = fence.closes(line);
                    out.push_str(line);
                    out.push('\n');
                    if closed {
                        open = None;
                    }
                }
                Some(OpenFence::Diagram { fence, source, .. }) => {
                    if fence.closes(line) {
                        out.push_str(&self.embed(source));
                        out.push('\n');
                        open = None;
                    } else {
                        source.push_str(line);
                        source.push('\n');
                    }
                }
            }
        }

        // Unclosed diagram fence at end of input: put the raw text back
        // untouched. An unclosed foreign fence already passed through.
        if let Some(OpenFence::Diagram {
            opening, source, ..
        }) = open
        {
            out.push_str(&opening);
            out.push('\n');
            out.push_str(&source);
        }

        if !content.ends_with('\n') && out.ends_with('\n') {
            out.pop();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_mermaid_fence_replaced() {
        let stage = DiagramStage::default();
        let output = stage.apply("before\n```mermaid\nA --> B\n```\nafter\n");
        assert_eq!(
            output,
            "before\n<div class=\"sw-diagram\" data-engine=\"mermaid\" \
             data-theme=\"default\">A --&gt; B</div>\nafter\n"
        );
    }

    #[test]
    fn test_other_fences_untouched() {
        let stage = DiagramStage::default();
        let input = "```rust\nfn main() {}\n```\n";
        assert_eq!(stage.apply(input), input);
    }

    #[test]
    fn test_diagram_fence_inside_code_block_untouched() {
        let stage = DiagramStage::default();
        // A documentation example showing how to author a diagram: the
        // inner mermaid fence is content of the outer block, not a diagram.
        let input = "````markdown\n```mermaid\nA --> B\n```\n````\n";
        assert_eq!(stage.apply(input), input);
    }

    #[test]
    fn test_diagram_fence_inside_tilde_block_untouched() {
        let stage = DiagramStage::default();
        let input = "~~~text\n```mermaid\nA --> B\n```\n~~~\n";
        assert_eq!(stage.apply(input), input);
    }

    #[test]
    fn test_diagram_after_enclosing_block_still_replaced() {
        let stage = DiagramStage::default();
        let output = stage.apply(
            "````markdown\n```mermaid\nexample\n```\n````\n```mermaid\nA --> B\n```\n",
        );
        // Only the fence outside the enclosing block becomes an embed.
        assert_eq!(output.matches("sw-diagram").count(), 1);
        assert!(output.contains("```mermaid\nexample\n```"));
        assert!(output.contains("A --&gt; B"));
    }

    #[test]
    fn test_longer_diagram_fence_closed_by_matching_length() {
        let stage = DiagramStage::default();
        let output = stage.apply("````mermaid\nA --> B\n```\nstill source\n````\n");
        // The three-backtick line is source, not a closing fence.
        assert_eq!(output.matches("sw-diagram").count(), 1);
        assert!(output.contains("still source"));
    }

    #[test]
    fn test_unclosed_fence_passes_through() {
        let stage = DiagramStage::default();
        let input = "```mermaid\nA --> B\n";
        assert_eq!(stage.apply(input), input);
    }

    #[test]
    fn test_theme_option_reflected() {
        let value: toml::Value = toml::from_str(r#"theme = "dark""#).unwrap();
        let stage = DiagramStage::from_value(Some(&value)).unwrap();
        let output = stage.apply("```mermaid\nA\n```\n");
        assert!(output.contains(r#"data-theme="dark""#));
    }

    #[test]
    fn test_defaults_without_table() {
        let stage = DiagramStage::from_value(None).unwrap();
        assert_eq!(stage.options, DiagramStageOptions::default());
    }

    #[test]
    fn test_unknown_option_rejected() {
        let value: toml::Value = toml::from_str("dpi = 192").unwrap();
        let err = DiagramStage::from_value(Some(&value)).unwrap_err();
        let PipelineError::UnknownOption { stage, message } = err;
        assert_eq!(stage, "diagrams");
        assert!(message.contains("dpi"), "unexpected message: {message}");
    }
}
