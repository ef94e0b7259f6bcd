//! OpenAPI reference stage.
//!
//! Post-stage that replaces `<!-- openapi:PATH -->` markers in rendered
//! markup with mount elements for the client-side API-reference renderer.
//! Runs after the base renderer because HTML comments pass through markdown
//! rendering unchanged.

use serde::Deserialize;

use crate::error::{PipelineError, parse_options};
use crate::stage::{PluginStage, StageKind};

const MARKER_OPEN: &str = "<!-- openapi:";
const MARKER_CLOSE: &str = "-->";

/// Options for the OpenAPI reference stage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpenApiStageOptions {
    /// Hide the interactive "try it out" panel. Default: `false`.
    pub hide_try_it_out: bool,
    /// Hide the servers selector. Default: `false`.
    pub hide_servers: bool,
    /// Proxy URL for try-it-out requests. Default: unset.
    pub proxy: Option<String>,
}

/// Post-stage mounting API-reference views at marker positions.
#[derive(Clone, Debug, Default)]
pub struct OpenApiStage {
    options: OpenApiStageOptions,
}

impl OpenApiStage {
    /// Create a stage with explicit options.
    #[must_use]
    pub fn new(options: OpenApiStageOptions) -> Self {
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
        Ok(Self::new(parse_options("openapi", value)?))
    }

    fn mount(&self, spec: &str) -> String {
        let mut attrs = format!(r#"data-spec="{}""#, crate::escape_html(spec));
        if self.options.hide_try_it_out {
            attrs.push_str(r#" data-hide-try-it-out="true""#);
        }
        if self.options.hide_servers {
            attrs.push_str(r#" data-hide-servers="true""#);
        }
        if let Some(proxy) = &self.options.proxy {
            attrs.push_str(&format!(r#" data-proxy="{}""#, crate::escape_html(proxy)));
        }
        format!(r#"<div class="sw-api-reference" {attrs}></div>"#)
    }
}

impl PluginStage for OpenApiStage {
    fn name(&self) -> &str {
        "openapi"
    }

    fn kind(&self) -> StageKind {
        StageKind::Post
    }

    fn apply(&self, content: &str) -> String {
        let mut out = String::with_capacity(content.len());
        let mut rest = content;

        while let Some(start) = rest.find(MARKER_OPEN) {
            out.push_str(&rest[..start]);
            let after = &rest[start + MARKER_OPEN.len()..];
            match after.find(MARKER_CLOSE) {
                Some(end) => {
                    out.push_str(&self.mount(after[..end].trim()));
                    rest = &after[end + MARKER_CLOSE.len()..];
                }
                None => {
                    // Unterminated marker: emit the remainder untouched.
                    rest = &rest[start..];
                    break;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_marker_replaced_with_mount() {
        let stage = OpenApiStage::default();
        let output = stage.apply("<h1>API</h1>\n<!-- openapi:/specs/torch.yaml -->\n");
        assert_eq!(
            output,
            "<h1>API</h1>\n<div class=\"sw-api-reference\" \
             data-spec=\"/specs/torch.yaml\"></div>\n"
        );
    }

    #[test]
    fn test_options_reflected_in_mount() {
        let value: toml::Value = toml::from_str(
            r#"
hide_try_it_out = true
hide_servers = true
proxy = "https://proxy.example.com"
"#,
        )
        .unwrap();
        let stage = OpenApiStage::from_value(Some(&value)).unwrap();
        let output = stage.apply("<!-- openapi:/api.yaml -->");
        assert!(output.contains(r#"data-hide-try-it-out="true""#));
        assert!(output.contains(r#"data-hide-servers="true""#));
        assert!(output.contains(r#"data-proxy="https://proxy.example.com""#));
    }

    #[test]
    fn test_documented_defaults() {
        let options = OpenApiStageOptions::default();
        assert!(!options.hide_try_it_out);
        assert!(!options.hide_servers);
        assert_eq!(options.proxy, None);
    }

    #[test]
    fn test_multiple_markers_replaced() {
        let stage = OpenApiStage::default();
        let output = stage.apply("<!-- openapi:/a.yaml --><p>x</p><!-- openapi:/b.yaml -->");
        assert_eq!(output.matches("sw-api-reference").count(), 2);
        assert!(output.contains(r#"data-spec="/a.yaml""#));
        assert!(output.contains(r#"data-spec="/b.yaml""#));
    }

    #[test]
    fn test_unterminated_marker_untouched() {
        let stage = OpenApiStage::default();
        let input = "<p>text</p><!-- openapi:/a.yaml";
        assert_eq!(stage.apply(input), input);
    }

    #[test]
    fn test_content_without_markers_untouched() {
        let stage = OpenApiStage::default();
        let input = "<p>no markers here</p>";
        assert_eq!(stage.apply(input), input);
    }

    #[test]
    fn test_unknown_option_rejected() {
        let value: toml::Value = toml::from_str("hide_foo = true").unwrap();
        let err = OpenApiStage::from_value(Some(&value)).unwrap_err();
        let PipelineError::UnknownOption { stage, message } = err;
        assert_eq!(stage, "openapi");
        assert!(message.contains("hide_foo"), "unexpected message: {message}");
    }
}
