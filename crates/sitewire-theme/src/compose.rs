//! Theme composition.
//!
//! Explicit function composition instead of inheritance: the base theme
//! establishes defaults, then enhancers run in declaration order against the
//! shared [`AppHandle`]. There is no hidden override ordering — what you
//! declare is what runs.

use std::sync::Arc;

use crate::error::{EnhancerFailure, ThemeError};
use crate::options::ThemeOptions;
use crate::registry::{AppHandle, Capability, CapabilityRegistry};

/// A base theme.
///
/// Applied exactly once, before any enhancer, establishing default
/// capabilities.
pub trait Theme {
    /// Theme name, used in logs and error chains.
    fn name(&self) -> &str;

    /// Register this theme's capabilities on the handle.
    ///
    /// # Errors
    ///
    /// Returns [`EnhancerFailure`] to abort composition.
    fn apply(&self, app: &mut AppHandle, options: &ThemeOptions) -> Result<(), EnhancerFailure>;
}

/// A named registration function applied during theme composition.
///
/// Enhancers run in declaration order against the shared handle, so later
/// enhancers observe earlier registrations. An enhancer may delegate to a
/// nested theme's own registration logic; see
/// [`ApiReferenceEnhancer`](crate::ApiReferenceEnhancer) for the shipped
/// example.
pub trait Enhancer {
    /// Enhancer name, used in logs and error chains.
    fn name(&self) -> &str;

    /// Register capabilities on the handle.
    ///
    /// # Errors
    ///
    /// Returns [`EnhancerFailure`] to abort composition. No partial
    /// rollback is attempted.
    fn enhance(&self, app: &mut AppHandle, options: &ThemeOptions) -> Result<(), EnhancerFailure>;
}

/// The effective runtime theme produced by [`compose`].
///
/// Owns the final capability registry (moved out of the handle, not
/// duplicated) and records what was applied, for downstream inspection.
/// Immutable and read-only shareable across rendering workers.
#[derive(Debug)]
pub struct EffectiveTheme {
    base: String,
    applied: Vec<String>,
    registry: CapabilityRegistry,
}

impl EffectiveTheme {
    /// Name of the base theme.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Names of the applied enhancers, in application order.
    #[must_use]
    pub fn applied(&self) -> &[String] {
        &self.applied
    }

    /// Resolve a capability by name.
    #[must_use]
    pub fn capability(&self, name: &str) -> Option<&Arc<dyn Capability>> {
        self.registry.get(name)
    }

    /// The full capability registry.
    #[must_use]
    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }
}

/// Compose a base theme with an ordered enhancer list.
///
/// Applies `base` first, then each enhancer exactly once in list order,
/// passing the same `app` handle throughout. Capability conflicts resolve
/// last-write-wins (see [`AppHandle::register`]).
///
/// The handle is consumed: its registry moves into the returned
/// [`EffectiveTheme`] without being duplicated.
///
/// # Errors
///
/// Returns [`ThemeError::Enhancer`] naming the failing theme or enhancer
/// and carrying the originating cause. Composition aborts on the first
/// failure; recovery means re-running the whole build.
pub fn compose(
    base: &dyn Theme,
    enhancers: &[Box<dyn Enhancer>],
    mut app: AppHandle,
    options: &ThemeOptions,
) -> Result<EffectiveTheme, ThemeError> {
    base.apply(&mut app, options)
        .map_err(|source| ThemeError::Enhancer {
            name: base.name().to_owned(),
            source,
        })?;

    let mut applied = Vec::with_capacity(enhancers.len());
    for enhancer in enhancers {
        tracing::debug!(enhancer = %enhancer.name(), "applying theme enhancer");
        enhancer
            .enhance(&mut app, options)
            .map_err(|source| ThemeError::Enhancer {
                name: enhancer.name().to_owned(),
                source,
            })?;
        applied.push(enhancer.name().to_owned());
    }

    Ok(EffectiveTheme {
        base: base.name().to_owned(),
        applied,
        registry: app.into_registry(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Fixed(&'static str);

    impl Capability for Fixed {
        fn render(&self, _props: &str) -> String {
            self.0.to_owned()
        }
    }

    /// Enhancer registering one fixed capability under a chosen name.
    struct Registers {
        name: &'static str,
        capability: &'static str,
        output: &'static str,
    }

    impl Enhancer for Registers {
        fn name(&self) -> &str {
            self.name
        }

        fn enhance(
            &self,
            app: &mut AppHandle,
            _options: &ThemeOptions,
        ) -> Result<(), EnhancerFailure> {
            app.register(self.capability, Arc::new(Fixed(self.output)));
            Ok(())
        }
    }

    struct Failing;

    impl Enhancer for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn enhance(
            &self,
            _app: &mut AppHandle,
            _options: &ThemeOptions,
        ) -> Result<(), EnhancerFailure> {
            Err(EnhancerFailure::new("component bundle missing"))
        }
    }

    struct EmptyBase;

    impl Theme for EmptyBase {
        fn name(&self) -> &str {
            "empty"
        }

        fn apply(
            &self,
            _app: &mut AppHandle,
            _options: &ThemeOptions,
        ) -> Result<(), EnhancerFailure> {
            Ok(())
        }
    }

    fn badge_enhancer(name: &'static str, output: &'static str) -> Box<dyn Enhancer> {
        Box::new(Registers {
            name,
            capability: "Badge",
            output,
        })
    }

    #[test]
    fn test_later_enhancer_wins_conflict() {
        let enhancers = vec![badge_enhancer("a", "from-a"), badge_enhancer("b", "from-b")];
        let theme = compose(&EmptyBase, &enhancers, AppHandle::new(), &ThemeOptions::default())
            .unwrap();
        assert_eq!(theme.capability("Badge").unwrap().render(""), "from-b");
    }

    #[test]
    fn test_reversed_order_flips_conflict() {
        let enhancers = vec![badge_enhancer("b", "from-b"), badge_enhancer("a", "from-a")];
        let theme = compose(&EmptyBase, &enhancers, AppHandle::new(), &ThemeOptions::default())
            .unwrap();
        assert_eq!(theme.capability("Badge").unwrap().render(""), "from-a");
    }

    #[test]
    fn test_applied_records_declaration_order() {
        let enhancers = vec![badge_enhancer("first", "1"), badge_enhancer("second", "2")];
        let theme = compose(&EmptyBase, &enhancers, AppHandle::new(), &ThemeOptions::default())
            .unwrap();
        assert_eq!(theme.base(), "empty");
        assert_eq!(theme.applied(), ["first", "second"]);
    }

    #[test]
    fn test_enhancer_failure_aborts_composition() {
        let enhancers: Vec<Box<dyn Enhancer>> = vec![
            badge_enhancer("ok", "1"),
            Box::new(Failing),
            badge_enhancer("never-runs", "2"),
        ];
        let err = compose(&EmptyBase, &enhancers, AppHandle::new(), &ThemeOptions::default())
            .unwrap_err();
        match err {
            ThemeError::Enhancer { name, source } => {
                assert_eq!(name, "failing");
                assert_eq!(source.to_string(), "component bundle missing");
            }
            other => panic!("Expected ThemeError::Enhancer, got {other:?}"),
        }
    }

    #[test]
    fn test_base_theme_failure_names_the_base() {
        struct BrokenBase;

        impl Theme for BrokenBase {
            fn name(&self) -> &str {
                "broken-base"
            }

            fn apply(
                &self,
                _app: &mut AppHandle,
                _options: &ThemeOptions,
            ) -> Result<(), EnhancerFailure> {
                Err(EnhancerFailure::new("layout assets missing"))
            }
        }

        let err = compose(&BrokenBase, &[], AppHandle::new(), &ThemeOptions::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "theme component 'broken-base' failed");
        match err {
            ThemeError::Enhancer { name, source } => {
                assert_eq!(name, "broken-base");
                assert_eq!(source.to_string(), "layout assets missing");
            }
            other => panic!("Expected ThemeError::Enhancer, got {other:?}"),
        }
    }

    #[test]
    fn test_later_enhancer_observes_earlier_registration() {
        struct ObservesBadge;

        impl Enhancer for ObservesBadge {
            fn name(&self) -> &str {
                "observer"
            }

            fn enhance(
                &self,
                app: &mut AppHandle,
                _options: &ThemeOptions,
            ) -> Result<(), EnhancerFailure> {
                if app.capability("Badge").is_none() {
                    return Err(EnhancerFailure::new("expected Badge to be registered"));
                }
                app.register("BadgeSeen", Arc::new(Fixed("yes")));
                Ok(())
            }
        }

        let enhancers: Vec<Box<dyn Enhancer>> =
            vec![badge_enhancer("a", "from-a"), Box::new(ObservesBadge)];
        let theme = compose(&EmptyBase, &enhancers, AppHandle::new(), &ThemeOptions::default())
            .unwrap();
        assert!(theme.capability("BadgeSeen").is_some());
    }
}
