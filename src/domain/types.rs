//! Resource type tags used for enricher dispatch
//!
//! Each domain type declares a tag plus the interfaces it implements. The
//! registry walks this static lineage instead of reflecting at runtime.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A resource type: a unique name plus its declared supertypes.
#[derive(Debug, Clone, Copy)]
pub struct ResourceType {
    name: &'static str,
    supertypes: &'static [ResourceType],
}

impl ResourceType {
    /// A type with no supertypes; also used for interfaces.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            supertypes: &[],
        }
    }

    pub const fn extending(name: &'static str, supertypes: &'static [ResourceType]) -> Self {
        Self { name, supertypes }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn supertypes(&self) -> &'static [ResourceType] {
        self.supertypes
    }

    /// This type followed by all transitive supertypes, each once,
    /// in declaration order.
    pub fn lineage(&self) -> Vec<ResourceType> {
        let mut seen: Vec<ResourceType> = Vec::new();
        let mut pending = vec![*self];
        while let Some(ty) = pending.pop() {
            if seen.contains(&ty) {
                continue;
            }
            seen.push(ty);
            for parent in ty.supertypes.iter().rev() {
                pending.push(*parent);
            }
        }
        seen
    }

    /// True if `self` is `other` or extends it.
    pub fn is_a(&self, other: &ResourceType) -> bool {
        self.lineage().contains(other)
    }
}

impl PartialEq for ResourceType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ResourceType {}

impl Hash for ResourceType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Implemented by every domain object that can be enriched.
pub trait Resource: Any + Send + Sync {
    const TYPE: ResourceType;
}

/// Interface: objects with an id and a type (repositories, users, groups).
pub const MODEL_OBJECT: ResourceType = ResourceType::new("ModelObject");
/// Interface: anything addressed by namespace and name.
pub const REPOSITORY_COORDINATES: ResourceType = ResourceType::new("RepositoryCoordinates");

pub const REPOSITORY: ResourceType =
    ResourceType::extending("Repository", &[MODEL_OBJECT, REPOSITORY_COORDINATES]);
pub const BRANCH: ResourceType = ResourceType::new("Branch");
pub const BRANCH_DETAILS: ResourceType = ResourceType::new("BranchDetails");
pub const TAG: ResourceType = ResourceType::new("Tag");
pub const USER: ResourceType = ResourceType::extending("User", &[MODEL_OBJECT]);
pub const ME: ResourceType = ResourceType::new("Me");
pub const GROUP: ResourceType = ResourceType::extending("Group", &[MODEL_OBJECT]);
pub const NAMESPACE: ResourceType = ResourceType::new("Namespace");
pub const SCM_CONFIGURATION: ResourceType = ResourceType::new("ScmConfiguration");
pub const INDEX: ResourceType = ResourceType::new("Index");

#[cfg(test)]
mod tests {
    use super::*;

    const CHILD: ResourceType = ResourceType::extending("Child", &[REPOSITORY, MODEL_OBJECT]);

    #[test]
    fn lineage_starts_with_self() {
        let lineage = REPOSITORY.lineage();
        assert_eq!(lineage[0], REPOSITORY);
        assert_eq!(lineage, vec![REPOSITORY, MODEL_OBJECT, REPOSITORY_COORDINATES]);
    }

    #[test]
    fn lineage_is_transitive_and_deduplicated() {
        let lineage = CHILD.lineage();
        assert_eq!(
            lineage,
            vec![CHILD, REPOSITORY, MODEL_OBJECT, REPOSITORY_COORDINATES]
        );
    }

    #[test]
    fn is_a_follows_interfaces() {
        assert!(USER.is_a(&MODEL_OBJECT));
        assert!(!USER.is_a(&REPOSITORY_COORDINATES));
        assert!(TAG.is_a(&TAG));
    }
}
