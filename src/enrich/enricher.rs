//! Enricher trait: strategies that add links to representations

use super::context::EnrichmentContext;
use crate::domain::ResourceType;
use crate::error::HalResult;
use crate::hal::HalAppender;

/// A strategy that appends links or embedded resources to the
/// representation of one resource type.
///
/// Enrichers are registered against a [`ResourceType`] and run after the
/// mapper has produced the entity's own fields and structural links. They
/// read what they need from the context and write through the appender.
pub trait HalEnricher: Send + Sync {
    /// Stable identifier; registration is idempotent per (type, id).
    fn id(&self) -> &str;

    /// The resource type this enricher declares itself for.
    ///
    /// Used by the startup catalog. Enrichers returning `None` are only
    /// reachable through explicit `register` calls.
    fn target(&self) -> Option<ResourceType> {
        None
    }

    fn enrich(
        &self,
        context: &EnrichmentContext<'_>,
        appender: &mut dyn HalAppender,
    ) -> HalResult<()>;
}

/// Adapts a closure into an enricher, mostly for tests and small plugins.
pub struct FnEnricher<F> {
    id: String,
    target: Option<ResourceType>,
    f: F,
}

impl<F> FnEnricher<F>
where
    F: Fn(&EnrichmentContext<'_>, &mut dyn HalAppender) -> HalResult<()> + Send + Sync,
{
    pub fn new(id: impl Into<String>, f: F) -> Self {
        Self {
            id: id.into(),
            target: None,
            f,
        }
    }

    pub fn targeting(mut self, target: ResourceType) -> Self {
        self.target = Some(target);
        self
    }
}

impl<F> HalEnricher for FnEnricher<F>
where
    F: Fn(&EnrichmentContext<'_>, &mut dyn HalAppender) -> HalResult<()> + Send + Sync,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn target(&self) -> Option<ResourceType> {
        self.target
    }

    fn enrich(
        &self,
        context: &EnrichmentContext<'_>,
        appender: &mut dyn HalAppender,
    ) -> HalResult<()> {
        (self.f)(context, appender)
    }
}
