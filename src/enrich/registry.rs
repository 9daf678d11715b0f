//! Enricher registry: dispatches enrichers by resource type
//!
//! Enrichers registered for a type apply to that type and to every type
//! that declares it as a supertype. Lookups return enrichers in global
//! registration order, each at most once, however many of the entity's
//! supertypes it is reachable through.

use super::context::EnrichmentContext;
use super::enricher::HalEnricher;
use crate::domain::ResourceType;
use crate::error::HalResult;
use crate::hal::HalAppender;
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace, warn};

#[derive(Clone)]
struct Registration {
    sequence: u64,
    enricher: Arc<dyn HalEnricher>,
}

/// Process-wide mapping from resource type to enrichers.
///
/// Populated once at startup and read concurrently afterwards. Late
/// `register` calls take the write lock of one shard only, so readers never
/// observe a half-updated list for a type.
pub struct EnricherRegistry {
    entries: DashMap<ResourceType, Vec<Registration>>,
    sequence: AtomicU64,
}

impl EnricherRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            sequence: AtomicU64::new(0),
        }
    }

    /// Associate `enricher` with `resource_type`.
    ///
    /// Registering the same enricher id for the same type again is a no-op.
    pub fn register(&self, resource_type: ResourceType, enricher: Arc<dyn HalEnricher>) {
        let mut slot = self.entries.entry(resource_type).or_default();
        if slot.iter().any(|r| r.enricher.id() == enricher.id()) {
            debug!(
                enricher = enricher.id(),
                resource_type = resource_type.name(),
                "enricher already registered"
            );
            return;
        }
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        debug!(
            enricher = enricher.id(),
            resource_type = resource_type.name(),
            sequence,
            "registered enricher"
        );
        slot.push(Registration { sequence, enricher });
    }

    /// Enrichers for `resource_type` and all of its supertypes, in
    /// registration order. Empty when nothing matches.
    pub fn strategies_for(&self, resource_type: &ResourceType) -> Vec<Arc<dyn HalEnricher>> {
        let mut found: Vec<Registration> = Vec::new();
        for ty in resource_type.lineage() {
            if let Some(registrations) = self.entries.get(&ty) {
                found.extend(registrations.iter().cloned());
            }
        }
        found.sort_by_key(|r| r.sequence);

        let mut seen = HashSet::new();
        found
            .into_iter()
            .filter(|r| seen.insert(r.enricher.id().to_string()))
            .map(|r| r.enricher)
            .collect()
    }

    /// Enrichers registered for exactly `resource_type`, ignoring supertypes.
    pub fn all_by_exact_type(&self, resource_type: &ResourceType) -> Vec<Arc<dyn HalEnricher>> {
        self.entries
            .get(resource_type)
            .map(|regs| regs.iter().map(|r| r.enricher.clone()).collect())
            .unwrap_or_default()
    }

    /// Types with at least one enricher, sorted by name.
    pub fn registered_types(&self) -> Vec<ResourceType> {
        let mut types: Vec<ResourceType> = self.entries.iter().map(|e| *e.key()).collect();
        types.sort_by_key(|t| t.name());
        types
    }

    /// Total number of (type, enricher) registrations.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|e| e.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run every enricher matching `resource_type` against the context.
    ///
    /// Stops at the first failing enricher; returns how many ran.
    pub fn enrich(
        &self,
        resource_type: &ResourceType,
        context: &EnrichmentContext<'_>,
        appender: &mut dyn HalAppender,
    ) -> HalResult<usize> {
        let strategies = self.strategies_for(resource_type);
        trace!(
            resource_type = resource_type.name(),
            count = strategies.len(),
            "applying enrichers"
        );
        for enricher in &strategies {
            if let Err(e) = enricher.enrich(context, appender) {
                warn!(
                    enricher = enricher.id(),
                    resource_type = resource_type.name(),
                    error = %e,
                    "enricher failed"
                );
                return Err(e);
            }
        }
        Ok(strategies.len())
    }
}

impl Default for EnricherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{
        GROUP, MODEL_OBJECT, REPOSITORY, REPOSITORY_COORDINATES, TAG, USER,
    };
    use crate::domain::Repository;
    use crate::enrich::FnEnricher;
    use crate::error::HalError;
    use crate::hal::{Representation, RepresentationAppender};
    use std::sync::Mutex;

    // === Test enricher implementations ===

    struct CountingEnricher {
        id: String,
        calls: Mutex<usize>,
    }

    impl CountingEnricher {
        fn new(id: &str) -> Arc<Self> {
            Arc::new(Self {
                id: id.to_string(),
                calls: Mutex::new(0),
            })
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    impl HalEnricher for CountingEnricher {
        fn id(&self) -> &str {
            &self.id
        }

        fn enrich(
            &self,
            _context: &EnrichmentContext<'_>,
            _appender: &mut dyn HalAppender,
        ) -> HalResult<()> {
            *self.calls.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn ids(strategies: &[Arc<dyn HalEnricher>]) -> Vec<String> {
        strategies.iter().map(|s| s.id().to_string()).collect()
    }

    // === Scenario: Nothing registered ===
    #[test]
    fn unknown_type_yields_empty_list() {
        let registry = EnricherRegistry::new();
        assert!(registry.strategies_for(&TAG).is_empty());
        assert!(registry.all_by_exact_type(&TAG).is_empty());
        assert!(registry.is_empty());
    }

    // === Scenario: Interface registration reaches implementors ===
    #[test]
    fn interface_enricher_applies_to_implementors() {
        let registry = EnricherRegistry::new();
        registry.register(MODEL_OBJECT, CountingEnricher::new("model"));

        assert_eq!(ids(&registry.strategies_for(&USER)), vec!["model"]);
        assert_eq!(ids(&registry.strategies_for(&GROUP)), vec!["model"]);
        assert!(registry.strategies_for(&TAG).is_empty());
        assert!(registry.all_by_exact_type(&USER).is_empty());
    }

    // === Scenario: Reachable through two interfaces, listed once ===
    #[test]
    fn enricher_on_two_interfaces_is_listed_once() {
        let registry = EnricherRegistry::new();
        let shared = CountingEnricher::new("shared");
        registry.register(MODEL_OBJECT, shared.clone());
        registry.register(REPOSITORY_COORDINATES, shared.clone());
        registry.register(REPOSITORY, shared);

        assert_eq!(ids(&registry.strategies_for(&REPOSITORY)), vec!["shared"]);
        assert_eq!(registry.len(), 3);
    }

    // === Scenario: Registration order is preserved across types ===
    #[test]
    fn strategies_follow_registration_order() {
        let registry = EnricherRegistry::new();
        registry.register(REPOSITORY, CountingEnricher::new("first"));
        registry.register(MODEL_OBJECT, CountingEnricher::new("second"));
        registry.register(REPOSITORY_COORDINATES, CountingEnricher::new("third"));
        registry.register(REPOSITORY, CountingEnricher::new("fourth"));

        assert_eq!(
            ids(&registry.strategies_for(&REPOSITORY)),
            vec!["first", "second", "third", "fourth"]
        );
        assert_eq!(
            ids(&registry.all_by_exact_type(&REPOSITORY)),
            vec!["first", "fourth"]
        );
    }

    // === Scenario: Duplicate registration is idempotent ===
    #[test]
    fn duplicate_registration_runs_once() {
        let registry = EnricherRegistry::new();
        let enricher = CountingEnricher::new("counting");
        registry.register(REPOSITORY, enricher.clone());
        registry.register(REPOSITORY, enricher.clone());

        let repo = Repository::new("1", "space", "repo", "git");
        let mut repr = Representation::new();
        let ran = registry
            .enrich(
                &REPOSITORY,
                &EnrichmentContext::of(&repo),
                &mut RepresentationAppender::new(&mut repr),
            )
            .unwrap();

        assert_eq!(ran, 1);
        assert_eq!(enricher.calls(), 1);
        assert_eq!(registry.len(), 1);
    }

    // === Scenario: Enricher reads the entity and appends a link ===
    #[test]
    fn enrich_appends_links_from_context() {
        let registry = EnricherRegistry::new();
        registry.register(
            REPOSITORY,
            Arc::new(FnEnricher::new("id-link", |ctx, appender| {
                let repository = ctx.one_require_by_type::<Repository>()?;
                appender.append_link("id", &format!("http://{}", repository.id))
            })),
        );

        let repo = Repository::new("1", "space", "repo", "git");
        let mut repr = Representation::new();
        registry
            .enrich(
                &REPOSITORY,
                &EnrichmentContext::of(&repo),
                &mut RepresentationAppender::new(&mut repr),
            )
            .unwrap();

        assert_eq!(repr.links().get_link_by("id").unwrap().href, "http://1");
    }

    // === Scenario: Contract violation inside an enricher propagates ===
    #[test]
    fn enricher_errors_propagate() {
        let registry = EnricherRegistry::new();
        registry.register(
            TAG,
            Arc::new(FnEnricher::new("needs-repo", |ctx, _appender| {
                ctx.one_require_by_type::<Repository>().map(|_| ())
            })),
        );

        let tag = crate::domain::Tag::new("1.0", "abc");
        let mut repr = Representation::new();
        let err = registry
            .enrich(
                &TAG,
                &EnrichmentContext::of(&tag),
                &mut RepresentationAppender::new(&mut repr),
            )
            .unwrap_err();
        assert!(matches!(err, HalError::MissingContext(_)));
    }

    #[test]
    fn registered_types_are_sorted() {
        let registry = EnricherRegistry::new();
        registry.register(USER, CountingEnricher::new("u"));
        registry.register(GROUP, CountingEnricher::new("g"));
        assert_eq!(registry.registered_types(), vec![GROUP, USER]);
    }

    #[test]
    fn concurrent_readers_see_complete_lists() {
        let registry = Arc::new(EnricherRegistry::new());
        registry.register(REPOSITORY, CountingEnricher::new("base"));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    registry.register(REPOSITORY, CountingEnricher::new(&format!("late-{}", i)));
                    let ids = ids(&registry.strategies_for(&REPOSITORY));
                    assert_eq!(ids[0], "base");
                    assert!(ids.contains(&format!("late-{}", i)));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.strategies_for(&REPOSITORY).len(), 5);
    }
}
