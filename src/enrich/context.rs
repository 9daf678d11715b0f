//! Typed facts available to an enricher during one enrichment pass

use crate::error::{HalError, HalResult};
use std::any::{type_name, Any};

/// One borrowed fact; the enricher downcasts it by type.
#[derive(Clone, Copy)]
struct Fact<'a> {
    value: &'a (dyn Any + Send + Sync),
    type_name: &'static str,
}

impl Fact<'_> {
    fn address(&self) -> *const () {
        self.value as *const (dyn Any + Send + Sync) as *const ()
    }
}

/// Immutable per-invocation bag of typed facts.
///
/// Lookup is by exact type. Supplying the same instance twice is not
/// ambiguous; two distinct instances of one type are.
#[derive(Clone, Default)]
pub struct EnrichmentContext<'a> {
    facts: Vec<Fact<'a>>,
}

impl<'a> EnrichmentContext<'a> {
    pub fn new() -> Self {
        Self { facts: Vec::new() }
    }

    /// Context holding only the enriched entity.
    pub fn of<T: Any + Send + Sync>(entity: &'a T) -> Self {
        Self::new().with(entity)
    }

    /// Add another fact, e.g. the owning repository's coordinates.
    pub fn with<T: Any + Send + Sync>(mut self, value: &'a T) -> Self {
        self.facts.push(Fact {
            value,
            type_name: type_name::<T>(),
        });
        self
    }

    /// Put `entity` in front of the facts supplied so far.
    pub fn led_by<T: Any + Send + Sync>(mut self, entity: &'a T) -> Self {
        self.facts.insert(
            0,
            Fact {
                value: entity,
                type_name: type_name::<T>(),
            },
        );
        self
    }

    fn matches<T: Any>(&self) -> Vec<&'a T> {
        let mut found: Vec<Fact<'a>> = Vec::new();
        for fact in &self.facts {
            if fact.value.is::<T>() && !found.iter().any(|f| f.address() == fact.address()) {
                found.push(*fact);
            }
        }
        found
            .into_iter()
            .filter_map(|f| f.value.downcast_ref::<T>())
            .collect()
    }

    /// The unique instance of `T`, or `None` when no fact has that type.
    pub fn one_by_type<T: Any>(&self) -> HalResult<Option<&'a T>> {
        let mut matches = self.matches::<T>();
        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            count => Err(HalError::AmbiguousContext {
                type_name: type_name::<T>(),
                count,
            }),
        }
    }

    /// The unique instance of `T`; fails when it is missing or ambiguous.
    pub fn one_require_by_type<T: Any>(&self) -> HalResult<&'a T> {
        self.one_by_type::<T>()?
            .ok_or(HalError::MissingContext(type_name::<T>()))
    }

    /// Type names of the supplied facts, in supply order.
    pub fn type_names(&self) -> Vec<&'static str> {
        self.facts.iter().map(|f| f.type_name).collect()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl std::fmt::Debug for EnrichmentContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrichmentContext")
            .field("facts", &self.type_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NamespaceAndName, Repository, Tag};

    #[test]
    fn returns_the_single_supplied_instance() {
        let tag = Tag::new("1.0.0", "abc");
        let ctx = EnrichmentContext::of(&tag);
        let found = ctx.one_require_by_type::<Tag>().unwrap();
        assert!(std::ptr::eq(found, &tag));
    }

    #[test]
    fn missing_type_fails_loudly() {
        let repo = Repository::new("1", "space", "repo", "git");
        let ctx = EnrichmentContext::of(&repo);
        let err = ctx.one_require_by_type::<Tag>().unwrap_err();
        assert!(matches!(err, HalError::MissingContext(name) if name.ends_with("Tag")));
    }

    #[test]
    fn optional_lookup_of_missing_type_is_none() {
        let repo = Repository::new("1", "space", "repo", "git");
        let ctx = EnrichmentContext::of(&repo);
        assert!(ctx.one_by_type::<Tag>().unwrap().is_none());
    }

    #[test]
    fn two_distinct_instances_are_ambiguous() {
        let first = Tag::new("1.0.0", "abc");
        let second = Tag::new("2.0.0", "def");
        let ctx = EnrichmentContext::of(&first).with(&second);
        let err = ctx.one_require_by_type::<Tag>().unwrap_err();
        assert!(matches!(err, HalError::AmbiguousContext { count: 2, .. }));
    }

    #[test]
    fn same_instance_twice_is_not_ambiguous() {
        let tag = Tag::new("1.0.0", "abc");
        let ctx = EnrichmentContext::of(&tag).with(&tag);
        assert!(ctx.one_require_by_type::<Tag>().is_ok());
    }

    #[test]
    fn secondary_facts_are_found_by_type() {
        let tag = Tag::new("1.0.0", "abc");
        let coordinates = NamespaceAndName::new("hitchhiker", "42Puzzle");
        let ctx = EnrichmentContext::of(&tag).with(&coordinates);

        let found = ctx.one_require_by_type::<NamespaceAndName>().unwrap();
        assert_eq!(found.namespace, "hitchhiker");
        assert_eq!(ctx.len(), 2);
    }

    #[test]
    fn led_by_puts_the_entity_first() {
        let tag = Tag::new("1.0.0", "abc");
        let coordinates = NamespaceAndName::new("hitchhiker", "42Puzzle");
        let ctx = EnrichmentContext::new().with(&coordinates).led_by(&tag);
        let names = ctx.type_names();
        assert!(names[0].ends_with("Tag"));
        assert!(names[1].ends_with("NamespaceAndName"));
    }
}
