//! Entity → representation mappers
//!
//! Every mapper follows the same steps: copy the entity's fields into a
//! DTO, add the structural links its type always carries (some gated by
//! permission), run the enrichers registered for the entity's type, and
//! finally attach embedded sub-representations. DTOs also map back to
//! entities for incoming requests.

mod branch;
mod branch_details;
mod collection;
mod config;
mod group;
mod index;
mod me;
mod namespace;
mod repository;
mod tag;
mod user;

pub use branch::{BranchCollectionMapper, BranchDto, BranchMapper};
pub use branch_details::{BranchDetailsCollectionMapper, BranchDetailsDto, BranchDetailsMapper};
pub use collection::{paged_collection, PageRequest};
pub use config::{ConfigDto, ConfigMapper};
pub use group::{GroupCollectionMapper, GroupDto, GroupMapper};
pub use index::{IndexMapper, SearchableType, INDEX_RELS};
pub use me::{MeDto, MeMapper};
pub use namespace::{NamespaceCollectionMapper, NamespaceDto, NamespaceMapper};
pub use repository::{
    HealthCheckFailureDto, RepositoryCollectionMapper, RepositoryDto, RepositoryFeatures,
    RepositoryMapper, ScmProtocol,
};
pub use tag::{TagCollectionMapper, TagDto, TagMapper};
pub use user::{UserCollectionMapper, UserDto, UserMapper};

use crate::domain::Resource;
use crate::enrich::{EnricherRegistry, EnrichmentContext};
use crate::error::HalResult;
use crate::hal::{Representation, RepresentationAppender};
use crate::uri::ResourceLinks;
use std::sync::Arc;

/// Collaborators every mapper needs: link families and the enricher
/// registry.
#[derive(Clone)]
pub struct MapperBase {
    links: ResourceLinks,
    registry: Arc<EnricherRegistry>,
}

impl MapperBase {
    pub fn new(links: ResourceLinks, registry: Arc<EnricherRegistry>) -> Self {
        Self { links, registry }
    }

    pub fn links(&self) -> &ResourceLinks {
        &self.links
    }

    pub fn registry(&self) -> &EnricherRegistry {
        &self.registry
    }

    /// Run the enrichers registered for `E::TYPE` and its supertypes
    /// against `target`. The entity becomes the first fact, ahead of
    /// `facts`.
    pub(crate) fn apply_enrichers<'a, E: Resource>(
        &self,
        entity: &'a E,
        facts: EnrichmentContext<'a>,
        target: &mut Representation,
    ) -> HalResult<()> {
        let context = facts.led_by(entity);
        let mut appender = RepresentationAppender::new(target);
        self.registry.enrich(&E::TYPE, &context, &mut appender)?;
        Ok(())
    }
}
