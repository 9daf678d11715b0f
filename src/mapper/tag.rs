//! Tag representations

use super::MapperBase;
use crate::domain::{Repository, Tag};
use crate::enrich::EnrichmentContext;
use crate::error::HalResult;
use crate::hal::{HalAppender, Representation, RepresentationAppender};
use crate::permission::{checks, SharedSubject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub name: String,
    pub revision: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl From<&Tag> for TagDto {
    fn from(tag: &Tag) -> Self {
        Self {
            name: tag.name.clone(),
            revision: tag.revision.clone(),
            date: tag.date,
        }
    }
}

#[derive(Clone)]
pub struct TagMapper {
    base: MapperBase,
}

impl TagMapper {
    pub fn new(base: MapperBase) -> Self {
        Self { base }
    }

    pub fn map(
        &self,
        tag: &Tag,
        repository: &Repository,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        let links = self.base.links();
        let (ns, name) = (repository.namespace.as_str(), repository.name.as_str());
        let tag_links = links.tag()?;

        let mut repr = Representation::from_dto(&TagDto::from(tag))?;
        let mut appender = RepresentationAppender::new(&mut repr);
        appender.append_link("self", &tag_links.self_link(ns, name, &tag.name))?;
        appender.append_link("sources", &links.source()?.self_link(ns, name, &tag.revision))?;
        appender.append_link(
            "changeset",
            &links.changeset()?.self_link(ns, name, &tag.revision),
        )?;
        if subject.is_permitted(&checks::repository("push", &repository.id)) {
            appender.append_link("delete", &tag_links.delete(ns, name, &tag.name))?;
        }

        let coordinates = repository.namespace_and_name();
        let facts = EnrichmentContext::new()
            .with(repository)
            .with(&coordinates)
            .with(subject);
        self.base.apply_enrichers(tag, facts, &mut repr)?;
        Ok(repr)
    }
}

/// Maps all tags of one repository.
#[derive(Clone)]
pub struct TagCollectionMapper {
    mapper: TagMapper,
}

impl TagCollectionMapper {
    pub fn new(mapper: TagMapper) -> Self {
        Self { mapper }
    }

    pub fn map(
        &self,
        tags: &[Tag],
        repository: &Repository,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        let tag_links = self.mapper.base.links().tag()?;
        let (ns, name) = (repository.namespace.as_str(), repository.name.as_str());
        let items = tags
            .iter()
            .map(|tag| self.mapper.map(tag, repository, subject))
            .collect::<HalResult<Vec<_>>>()?;

        let mut repr = Representation::new();
        let mut appender = RepresentationAppender::new(&mut repr);
        appender.append_link("self", &tag_links.all(ns, name))?;
        if subject.is_permitted(&checks::repository("push", &repository.id)) {
            appender.append_link("create", &tag_links.create(ns, name))?;
        }
        appender.append_embedded_list("tags", items)?;
        Ok(repr)
    }
}
