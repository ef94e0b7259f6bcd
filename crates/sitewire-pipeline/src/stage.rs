//! Render pipeline and plugin stage contracts.

/// The external page render pipeline (markdown → HTML).
///
/// The engine never looks inside; it only wraps implementations with plugin
/// stages. Implementations must be safe to share read-only across however
/// many rendering workers the external pipeline runs.
pub trait RenderPipeline: Send + Sync {
    /// Render page source to markup.
    fn render(&self, input: &str) -> String;
}

/// Whether a stage runs before or after the base renderer.
///
/// Declared by the plugin, never inferred from behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageKind {
    /// Transforms source content before the base renderer runs.
    Pre,
    /// Transforms output markup after the base renderer runs.
    Post,
}

/// A named pre/post-processing hook contributed by a rendering plugin.
///
/// Registered at composition time, invoked per rendered page thereafter.
pub trait PluginStage: Send + Sync {
    /// Stage name, used in logs and error messages.
    fn name(&self) -> &str;

    /// Declared stage kind.
    fn kind(&self) -> StageKind;

    /// Transform content (source for [`StageKind::Pre`], markup for
    /// [`StageKind::Post`]).
    fn apply(&self, content: &str) -> String;
}

/// A render pipeline wrapped with ordered plugin stages.
///
/// Pre-stages execute in declared order and post-stages in reverse declared
/// order, so the last-registered pre-stage runs closest to the base renderer
/// and its corresponding post-stage unwraps first.
pub struct WrappedPipeline {
    base: Box<dyn RenderPipeline>,
    stages: Vec<Box<dyn PluginStage>>,
}

impl WrappedPipeline {
    /// Wrap a base pipeline with a declared stage list.
    #[must_use]
    pub fn wrap(base: Box<dyn RenderPipeline>, stages: Vec<Box<dyn PluginStage>>) -> Self {
        Self { base, stages }
    }

    /// Names of the wrapped stages, in declaration order.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl RenderPipeline for WrappedPipeline {
    fn render(&self, input: &str) -> String {
        let mut content = input.to_owned();
        for stage in self.stages.iter().filter(|s| s.kind() == StageKind::Pre) {
            tracing::trace!(stage = %stage.name(), "running pre-stage");
            content = stage.apply(&content);
        }

        let mut output = self.base.render(&content);

        for stage in self
            .stages
            .iter()
            .rev()
            .filter(|s| s.kind() == StageKind::Post)
        {
            tracing::trace!(stage = %stage.name(), "running post-stage");
            output = stage.apply(&output);
        }
        output
    }
}

impl std::fmt::Debug for WrappedPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WrappedPipeline")
            .field("stages", &self.stage_names())
            .finish_non_exhaustive()
    }
}
