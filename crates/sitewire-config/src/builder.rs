//! Site builder producing the final immutable configuration.

use sitewire_nav::NavTree;
use sitewire_pipeline::{
    DiagramStage, OpenApiStage, PluginStage, RenderPipeline, WrappedPipeline,
};
use sitewire_theme::{
    AppHandle, DefaultTheme, EffectiveTheme, Enhancer, Theme, ThemeOptions, compose,
};

use crate::error::ConfigError;
use crate::input::{SiteInput, base_from_env};

/// The final immutable site configuration.
///
/// Pure aggregation of the validated navigation trees, the composed theme,
/// and the wrapped render pipeline. This shape is the stable contract
/// between the configuration core and the external render pipeline, which
/// consumes it read-only.
#[derive(Debug)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Base path, sourced from the environment (see [`crate::BASE_ENV`]).
    pub base: String,
    /// Whether the appearance switch is enabled.
    pub appearance: bool,
    /// Whether last-updated timestamps are shown.
    pub last_updated: bool,
    /// Validated top navigation tree.
    pub nav: NavTree,
    /// Validated sidebar tree.
    pub sidebar: NavTree,
    /// Composed effective theme with its capability registry.
    pub theme: EffectiveTheme,
    /// Validated presentation options, for the rendering layer.
    pub theme_options: ThemeOptions,
    /// Render pipeline wrapped with the configured plugin stages.
    pub pipeline: WrappedPipeline,
}

/// Builder assembling a [`SiteConfig`] from declarative input.
///
/// The base theme defaults to [`DefaultTheme`]; enhancers are applied in
/// the order they are added.
pub struct SiteBuilder {
    input: SiteInput,
    base_theme: Box<dyn Theme>,
    enhancers: Vec<Box<dyn Enhancer>>,
    renderer: Box<dyn RenderPipeline>,
}

impl SiteBuilder {
    /// Create a builder for the given input and external render pipeline.
    #[must_use]
    pub fn new(input: SiteInput, renderer: Box<dyn RenderPipeline>) -> Self {
        Self {
            input,
            base_theme: Box::new(DefaultTheme),
            enhancers: Vec::new(),
            renderer,
        }
    }

    /// Replace the base theme.
    #[must_use]
    pub fn with_base_theme(mut self, theme: Box<dyn Theme>) -> Self {
        self.base_theme = theme;
        self
    }

    /// Append a theme enhancer. Order of calls is application order.
    #[must_use]
    pub fn with_enhancer(mut self, enhancer: Box<dyn Enhancer>) -> Self {
        self.enhancers.push(enhancer);
        self
    }

    /// Build the site configuration.
    ///
    /// Fail-fast: validates theme options and navigation trees, wires
    /// plugin stages, composes the theme, and wraps the render pipeline,
    /// returning the first error encountered — never a partial config.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Theme`] on option validation or enhancer failure.
    /// - [`ConfigError::Nav`] on navigation tree violations.
    /// - [`ConfigError::UnknownPlugin`] / [`ConfigError::Pipeline`] on
    ///   plugin wiring problems.
    pub fn build(self) -> Result<SiteConfig, ConfigError> {
        let input = self.input;
        input.theme.validate()?;

        let nav = NavTree::validate(&input.theme.nav)?;
        let sidebar = NavTree::validate(&input.theme.sidebar)?;

        let stages = stages_from_plugins(&input.plugins)?;

        let theme = compose(
            self.base_theme.as_ref(),
            &self.enhancers,
            AppHandle::new(),
            &input.theme,
        )?;

        let pipeline = WrappedPipeline::wrap(self.renderer, stages);

        tracing::debug!(
            title = %input.title,
            stages = ?pipeline.stage_names(),
            capabilities = ?theme.registry().names(),
            "site configuration built"
        );

        Ok(SiteConfig {
            title: input.title,
            description: input.description,
            base: base_from_env(),
            appearance: input.appearance.0,
            last_updated: input.last_updated,
            nav,
            sidebar,
            theme,
            theme_options: input.theme,
            pipeline,
        })
    }
}

/// Wire plugin stages from the `[plugins.*]` tables.
///
/// Stages are wired in pipeline order: the diagram pre-stage first, then
/// the OpenAPI post-stage. An unrecognized plugin name fails the build.
fn stages_from_plugins(plugins: &toml::Table) -> Result<Vec<Box<dyn PluginStage>>, ConfigError> {
    for name in plugins.keys() {
        if name != "diagrams" && name != "openapi" {
            return Err(ConfigError::UnknownPlugin(name.clone()));
        }
    }

    let mut stages: Vec<Box<dyn PluginStage>> = Vec::new();
    if let Some(value) = plugins.get("diagrams") {
        stages.push(Box::new(DiagramStage::from_value(Some(value))?));
    }
    if let Some(value) = plugins.get("openapi") {
        stages.push(Box::new(OpenApiStage::from_value(Some(value))?));
    }
    Ok(stages)
}
