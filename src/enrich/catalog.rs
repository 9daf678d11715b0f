//! Startup registration of enrichers
//!
//! Enrichers are collected into an [`EnricherCatalog`] while the process
//! boots and registered with the registry in one pass. Each enricher is
//! registered under the type its `target()` declares.

use super::context::EnrichmentContext;
use super::enricher::HalEnricher;
use super::registry::EnricherRegistry;
use crate::domain::types::INDEX;
use crate::domain::ResourceType;
use crate::error::{HalError, HalResult};
use crate::hal::HalAppender;
use crate::permission::{checks, SharedSubject};
use crate::uri::ResourceLinks;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What the catalog does with enrichers that declare no target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UntargetedPolicy {
    /// Log and leave them out.
    #[default]
    Skip,
    /// Fail the bootstrap with `MissingTargetType`.
    Reject,
}

/// Outcome of one bootstrap pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CatalogReport {
    pub registered: Vec<(String, ResourceType)>,
    pub skipped: Vec<String>,
}

/// Explicit table of enrichers known at startup.
#[derive(Default)]
pub struct EnricherCatalog {
    enrichers: Vec<Arc<dyn HalEnricher>>,
    policy: UntargetedPolicy,
}

impl EnricherCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: UntargetedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Add an enricher to the table.
    pub fn add(&mut self, enricher: Arc<dyn HalEnricher>) {
        self.enrichers.push(enricher);
    }

    /// Builder-style [`add`](Self::add).
    pub fn with(mut self, enricher: Arc<dyn HalEnricher>) -> Self {
        self.add(enricher);
        self
    }

    pub fn len(&self) -> usize {
        self.enrichers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enrichers.is_empty()
    }

    /// Register every enricher under its declared target type.
    pub fn register_discovered(&self, registry: &EnricherRegistry) -> HalResult<CatalogReport> {
        let mut report = CatalogReport::default();
        for enricher in &self.enrichers {
            match enricher.target() {
                Some(target) => {
                    registry.register(target, enricher.clone());
                    report.registered.push((enricher.id().to_string(), target));
                }
                None if self.policy == UntargetedPolicy::Reject => {
                    return Err(HalError::MissingTargetType(enricher.id().to_string()));
                }
                None => {
                    warn!(
                        enricher = enricher.id(),
                        "enricher declares no target type, skipping"
                    );
                    report.skipped.push(enricher.id().to_string());
                }
            }
        }
        info!(
            registered = report.registered.len(),
            skipped = report.skipped.len(),
            "enricher catalog registered"
        );
        Ok(report)
    }
}

/// Publishes a named configuration on the index document.
///
/// The link is added only when the subject may read that configuration.
pub struct ConfigurationLinkEnricher {
    id: String,
    name: String,
    links: ResourceLinks,
}

impl ConfigurationLinkEnricher {
    pub fn new(name: impl Into<String>, links: ResourceLinks) -> Self {
        let name = name.into();
        Self {
            id: format!("configuration:{}", name),
            name,
            links,
        }
    }
}

impl HalEnricher for ConfigurationLinkEnricher {
    fn id(&self) -> &str {
        &self.id
    }

    fn target(&self) -> Option<ResourceType> {
        Some(INDEX)
    }

    fn enrich(
        &self,
        context: &EnrichmentContext<'_>,
        appender: &mut dyn HalAppender,
    ) -> HalResult<()> {
        let subject = context.one_require_by_type::<SharedSubject>()?;
        if subject.is_permitted(&checks::configuration("read", &self.name)) {
            appender.append_link(&self.name, &self.links.config()?.named(&self.name))?;
        } else {
            debug!(configuration = %self.name, "configuration link not permitted");
        }
        Ok(())
    }
}
