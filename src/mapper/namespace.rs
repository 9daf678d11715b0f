//! Namespace representations

use super::MapperBase;
use crate::domain::Namespace;
use crate::enrich::EnrichmentContext;
use crate::error::HalResult;
use crate::hal::{HalAppender, Representation, RepresentationAppender};
use crate::permission::{checks, SharedSubject};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceDto {
    pub namespace: String,
}

impl From<&Namespace> for NamespaceDto {
    fn from(namespace: &Namespace) -> Self {
        Self {
            namespace: namespace.namespace.clone(),
        }
    }
}

#[derive(Clone)]
pub struct NamespaceMapper {
    base: MapperBase,
}

impl NamespaceMapper {
    pub fn new(base: MapperBase) -> Self {
        Self { base }
    }

    pub fn map(&self, namespace: &Namespace, subject: &SharedSubject) -> HalResult<Representation> {
        let namespace_links = self.base.links().namespace()?;
        let name = namespace.namespace.as_str();

        let mut repr = Representation::from_dto(&NamespaceDto::from(namespace))?;
        let mut appender = RepresentationAppender::new(&mut repr);
        appender.append_link("self", &namespace_links.self_link(name))?;
        appender.append_link("repositories", &namespace_links.repositories(name))?;
        if subject.is_permitted(checks::NAMESPACE_PERMISSION_READ) {
            appender.append_link("permissions", &namespace_links.permissions(name))?;
        }

        let facts = EnrichmentContext::new().with(subject);
        self.base.apply_enrichers(namespace, facts, &mut repr)?;
        Ok(repr)
    }
}

/// Maps every namespace the subject can see; namespaces are not paged.
#[derive(Clone)]
pub struct NamespaceCollectionMapper {
    mapper: NamespaceMapper,
}

impl NamespaceCollectionMapper {
    pub fn new(mapper: NamespaceMapper) -> Self {
        Self { mapper }
    }

    pub fn map(
        &self,
        namespaces: &[Namespace],
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        let items = namespaces
            .iter()
            .map(|namespace| self.mapper.map(namespace, subject))
            .collect::<HalResult<Vec<_>>>()?;

        let mut repr = Representation::new();
        let mut appender = RepresentationAppender::new(&mut repr);
        appender.append_link("self", &self.mapper.base.links().namespace()?.collection())?;
        appender.append_embedded_list("namespaces", items)?;
        Ok(repr)
    }
}
