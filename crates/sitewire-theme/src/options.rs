//! Recognized theme options.
//!
//! Mirrors the `[theme]` table of the site configuration. Unknown keys are
//! rejected at parse time; value invariants (heading ranges, placeholder
//! presence, link schemes) are checked by [`ThemeOptions::validate`].

use serde::Deserialize;
use sitewire_nav::NavEntry;

use crate::error::ThemeError;

/// Document heading depth range usable for the outline.
const HEADING_MIN: u8 = 2;
const HEADING_MAX: u8 = 6;

/// Placeholder substituted with the page path in edit-link patterns.
const PATH_PLACEHOLDER: &str = ":path";

/// Theme option set.
///
/// Constructed once from the declarative configuration, read-only for the
/// process lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeOptions {
    /// Site title shown in the navbar. A string replaces the default title;
    /// `false` hides it entirely.
    pub site_title: SiteTitle,
    /// "Edit this page" link configuration.
    pub edit_link: Option<EditLink>,
    /// Social links shown in the navbar, in declaration order.
    pub social_links: Vec<SocialLink>,
    /// Footer configuration.
    pub footer: Option<Footer>,
    /// Search configuration.
    pub search: Option<Search>,
    /// Outline (on-page table of contents) configuration.
    pub outline: Option<Outline>,
    /// Top navigation entries.
    pub nav: Vec<NavEntry>,
    /// Sidebar entries, possibly grouped under named container sections.
    pub sidebar: Vec<NavEntry>,
}

/// Site title override: a replacement string, or `false` to hide.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SiteTitle {
    /// Replacement title text.
    Text(String),
    /// `true` keeps the default title, `false` hides it.
    Visible(bool),
}

impl Default for SiteTitle {
    fn default() -> Self {
        Self::Visible(true)
    }
}

impl SiteTitle {
    /// Whether the title is hidden entirely.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Visible(false))
    }
}

/// "Edit this page" link.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditLink {
    /// URL pattern containing the `:path` placeholder.
    pub pattern: String,
    /// Link text.
    pub text: String,
}

impl Default for EditLink {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            text: "Edit this page".to_owned(),
        }
    }
}

/// Social link icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    /// GitHub.
    Github,
    /// GitLab.
    Gitlab,
    /// Discord.
    Discord,
    /// Mastodon.
    Mastodon,
    /// LinkedIn.
    Linkedin,
    /// YouTube.
    Youtube,
}

/// One social link in the navbar.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Icon to display.
    pub icon: SocialIcon,
    /// Link target URL.
    pub link: String,
}

/// Footer configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Footer {
    /// Footer message. May contain markup.
    pub message: String,
}

/// Search provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side local index.
    #[default]
    Local,
}

/// Search configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Search {
    /// Search provider. The index backend itself is an external collaborator.
    pub provider: SearchProvider,
}

/// Outline configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Outline {
    /// Heading levels shown in the outline as `[min, max]`.
    pub level: [u8; 2],
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ThemeError> {
    if value.is_empty() {
        return Err(ThemeError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ThemeError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ThemeError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl ThemeOptions {
    /// Validate option values.
    ///
    /// Checks the outline heading range, the edit-link placeholder, and
    /// social link URL schemes. Navigation entries are validated separately
    /// by `sitewire-nav`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Validation`] on the first violation.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if let Some(outline) = &self.outline {
            let [min, max] = outline.level;
            if min > max {
                return Err(ThemeError::Validation(format!(
                    "outline.level min ({min}) cannot exceed max ({max})"
                )));
            }
            if min < HEADING_MIN || max > HEADING_MAX {
                return Err(ThemeError::Validation(format!(
                    "outline.level must be within {HEADING_MIN}..={HEADING_MAX}, got [{min}, {max}]"
                )));
            }
        }

        if let Some(edit_link) = &self.edit_link {
            require_non_empty(&edit_link.pattern, "edit_link.pattern")?;
            if !edit_link.pattern.contains(PATH_PLACEHOLDER) {
                return Err(ThemeError::Validation(format!(
                    "edit_link.pattern must contain the '{PATH_PLACEHOLDER}' placeholder"
                )));
            }
            require_non_empty(&edit_link.text, "edit_link.text")?;
        }

        for social in &self.social_links {
            require_http_url(&social.link, "social_links.link")?;
        }

        Ok(())
    }
}
