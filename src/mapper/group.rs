//! Group representations

use super::collection::{paged_collection, PageRequest};
use super::MapperBase;
use crate::domain::{Group, PageResult};
use crate::enrich::EnrichmentContext;
use crate::error::HalResult;
use crate::hal::{HalAppender, Representation, RepresentationAppender};
use crate::permission::{checks, SharedSubject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub external: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl From<&Group> for GroupDto {
    fn from(group: &Group) -> Self {
        Self {
            name: group.name.clone(),
            description: group.description.clone(),
            group_type: group.group_type.clone(),
            members: group.members.clone(),
            external: group.external,
            creation_date: group.creation_date,
            last_modified: group.last_modified,
        }
    }
}

impl GroupDto {
    /// Map an incoming DTO to a group; duplicate members are dropped.
    pub fn into_entity(self) -> Group {
        let mut group = Group::new(self.name);
        group.description = self.description;
        group.group_type = self.group_type;
        group.external = self.external;
        for member in self.members {
            if !group.members.contains(&member) {
                group.members.push(member);
            }
        }
        group
    }
}

#[derive(Clone)]
pub struct GroupMapper {
    base: MapperBase,
}

impl GroupMapper {
    pub fn new(base: MapperBase) -> Self {
        Self { base }
    }

    pub fn map(&self, group: &Group, subject: &SharedSubject) -> HalResult<Representation> {
        let links = self.base.links();
        let group_links = links.group()?;
        let name = group.name.as_str();

        let mut repr = Representation::from_dto(&GroupDto::from(group))?;
        let mut appender = RepresentationAppender::new(&mut repr);
        appender.append_link("self", &group_links.self_link(name))?;
        if subject.is_permitted(&checks::group("delete", name)) {
            appender.append_link("delete", &group_links.delete(name))?;
        }
        if subject.is_permitted(&checks::group("modify", name)) {
            appender.append_link("update", &group_links.update(name))?;
        }
        if subject.is_permitted("permission:read") {
            appender.append_link("permissions", &group_links.permissions(name))?;
        }

        let facts = EnrichmentContext::new().with(subject);
        self.base.apply_enrichers(group, facts, &mut repr)?;

        let user_links = links.user()?;
        let members = group
            .members
            .iter()
            .map(|member| -> HalResult<Representation> {
                let mut item = Representation::new();
                item.set_attribute("name", member.as_str())?;
                RepresentationAppender::new(&mut item)
                    .append_link("self", &user_links.self_link(member))?;
                Ok(item)
            })
            .collect::<HalResult<Vec<_>>>()?;
        RepresentationAppender::new(&mut repr).append_embedded_list("members", members)?;
        Ok(repr)
    }
}

#[derive(Clone)]
pub struct GroupCollectionMapper {
    mapper: GroupMapper,
}

impl GroupCollectionMapper {
    pub fn new(mapper: GroupMapper) -> Self {
        Self { mapper }
    }

    pub fn map(
        &self,
        request: PageRequest,
        result: &PageResult<Group>,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        let items = result
            .entities
            .iter()
            .map(|group| self.mapper.map(group, subject))
            .collect::<HalResult<Vec<_>>>()?;
        let collection = self.mapper.base.links().group_collection()?;
        let create = subject
            .is_permitted(checks::GROUP_CREATE)
            .then(|| collection.create());
        paged_collection(&collection.self_link(), request, result, "groups", items, create)
    }
}
