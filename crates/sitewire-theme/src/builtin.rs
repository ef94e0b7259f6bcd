//! Built-in theme, badge capability, and API-reference integration.

use std::sync::Arc;

use crate::compose::{Enhancer, Theme};
use crate::error::EnhancerFailure;
use crate::options::ThemeOptions;
use crate::registry::{AppHandle, Capability};

/// Inline badge element for marking API stability, versions, and the like.
#[derive(Clone, Copy, Debug, Default)]
pub struct Badge;

impl Capability for Badge {
    fn render(&self, props: &str) -> String {
        format!(r#"<span class="sw-badge">{props}</span>"#)
    }
}

/// Default theme: registers the [`Badge`] capability under `Badge`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTheme;

impl Theme for DefaultTheme {
    fn name(&self) -> &str {
        "default"
    }

    fn apply(&self, app: &mut AppHandle, _options: &ThemeOptions) -> Result<(), EnhancerFailure> {
        app.register("Badge", Arc::new(Badge));
        Ok(())
    }
}

/// Mount element for an OpenAPI specification view.
#[derive(Clone, Copy, Debug, Default)]
struct SpecView;

impl Capability for SpecView {
    fn render(&self, props: &str) -> String {
        format!(r#"<div class="sw-oa-spec" {props}></div>"#)
    }
}

/// Nested theme shipped with the API-reference integration.
///
/// Registers the `OASpec` mount capability. Usually wired through
/// [`ApiReferenceEnhancer`] rather than used as a base theme directly.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiReferenceTheme;

impl Theme for ApiReferenceTheme {
    fn name(&self) -> &str {
        "api-reference"
    }

    fn apply(&self, app: &mut AppHandle, _options: &ThemeOptions) -> Result<(), EnhancerFailure> {
        app.register("OASpec", Arc::new(SpecView));
        Ok(())
    }
}

/// Enhancer wiring the API-reference theme into an existing composition.
///
/// Delegates to [`ApiReferenceTheme`]'s own registration, then registers its
/// badge under `ApiBadge` so it composes with a base theme's `Badge` instead
/// of replacing it.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiReferenceEnhancer;

impl Enhancer for ApiReferenceEnhancer {
    fn name(&self) -> &str {
        "api-reference"
    }

    fn enhance(&self, app: &mut AppHandle, options: &ThemeOptions) -> Result<(), EnhancerFailure> {
        ApiReferenceTheme.apply(app, options)?;
        app.register("ApiBadge", Arc::new(Badge));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::compose::compose;

    #[test]
    fn test_default_theme_registers_badge() {
        let theme = compose(&DefaultTheme, &[], AppHandle::new(), &ThemeOptions::default())
            .unwrap();
        assert_eq!(
            theme.capability("Badge").unwrap().render("beta"),
            r#"<span class="sw-badge">beta</span>"#
        );
    }

    #[test]
    fn test_api_reference_enhancer_composes_without_clobbering() {
        let enhancers: Vec<Box<dyn Enhancer>> = vec![Box::new(ApiReferenceEnhancer)];
        let theme = compose(
            &DefaultTheme,
            &enhancers,
            AppHandle::new(),
            &ThemeOptions::default(),
        )
        .unwrap();
        // Base badge survives, the API integration adds its own names.
        assert_eq!(theme.registry().names(), vec!["ApiBadge", "Badge", "OASpec"]);
        assert!(
            theme
                .capability("OASpec")
                .unwrap()
                .render(r#"data-spec="/openapi.yaml""#)
                .contains("sw-oa-spec")
        );
    }
}
