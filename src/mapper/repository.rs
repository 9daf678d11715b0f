//! Repository representations

use super::collection::{paged_collection, PageRequest};
use super::index::SearchableType;
use super::MapperBase;
use crate::domain::{HealthCheckFailure, PageResult, Repository, ScmConfiguration};
use crate::enrich::EnrichmentContext;
use crate::error::HalResult;
use crate::hal::{HalAppender, Representation, RepresentationAppender};
use crate::permission::{checks, SharedSubject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Namespace strategies that allow moving a repository to another namespace.
const CHANGEABLE_NAMESPACE_STRATEGIES: &[&str] = &["CustomNamespaceStrategy"];

/// A protocol a repository can be cloned with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScmProtocol {
    #[serde(rename = "type")]
    pub protocol_type: String,
    pub url: String,
}

impl ScmProtocol {
    pub fn new(protocol_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            protocol_type: protocol_type.into(),
            url: url.into(),
        }
    }
}

/// What the repository's backend supports, as reported by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryFeatures {
    pub protocols: Vec<ScmProtocol>,
    pub tags: bool,
    pub branches: bool,
    pub branch_details: bool,
    pub bundle: bool,
    pub incoming: bool,
    pub diff_result: bool,
    pub health_check_running: bool,
}

impl Default for RepositoryFeatures {
    fn default() -> Self {
        Self {
            protocols: Vec::new(),
            tags: true,
            branches: true,
            branch_details: true,
            bundle: false,
            incoming: false,
            diff_result: false,
            health_check_running: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckFailureDto {
    pub id: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryDto {
    pub namespace: String,
    pub name: String,
    #[serde(rename = "type")]
    pub repository_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub health_check_running: bool,
}

impl RepositoryDto {
    /// Map an incoming DTO to a repository with the given id.
    ///
    /// Read-only fields (dates, health state) are not taken over.
    pub fn into_entity(self, id: impl Into<String>) -> Repository {
        let mut repository = Repository::new(id, self.namespace, self.name, self.repository_type);
        repository.contact = self.contact;
        repository.description = self.description;
        repository.archived = self.archived;
        repository
    }
}

/// Maps repositories, including permission gated and feature gated links.
#[derive(Clone)]
pub struct RepositoryMapper {
    base: MapperBase,
    configuration: ScmConfiguration,
    documentation_version: String,
    searchable_types: Vec<SearchableType>,
}

impl RepositoryMapper {
    pub fn new(base: MapperBase, configuration: ScmConfiguration) -> Self {
        Self {
            base,
            configuration,
            documentation_version: "latest".to_string(),
            searchable_types: Vec::new(),
        }
    }

    pub fn with_documentation_version(mut self, version: impl Into<String>) -> Self {
        self.documentation_version = version.into();
        self
    }

    pub fn with_searchable_types(mut self, types: Vec<SearchableType>) -> Self {
        self.searchable_types = types;
        self
    }

    fn is_rename_namespace_possible(&self) -> bool {
        CHANGEABLE_NAMESPACE_STRATEGIES.contains(&self.configuration.namespace_strategy.as_str())
    }

    fn to_dto(repository: &Repository, features: &RepositoryFeatures) -> RepositoryDto {
        RepositoryDto {
            namespace: repository.namespace.clone(),
            name: repository.name.clone(),
            repository_type: repository.repository_type.clone(),
            contact: repository.contact.clone(),
            description: repository.description.clone(),
            creation_date: repository.creation_date,
            last_modified: repository.last_modified,
            archived: repository.archived,
            health_check_running: features.health_check_running,
        }
    }

    fn map_failure(&self, failure: &HealthCheckFailure) -> HalResult<Representation> {
        let url = failure.url_for(&self.documentation_version);
        let mut repr = Representation::from_dto(&HealthCheckFailureDto {
            id: failure.id.clone(),
            summary: failure.summary.clone(),
            description: failure.description.clone(),
            url: url.clone(),
        })?;
        if let Some(url) = url {
            RepresentationAppender::new(&mut repr).append_link("documentation", &url)?;
        }
        Ok(repr)
    }

    pub fn map(
        &self,
        repository: &Repository,
        features: &RepositoryFeatures,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        let links = self.base.links();
        let (ns, name, id) = (
            repository.namespace.as_str(),
            repository.name.as_str(),
            repository.id.as_str(),
        );
        let permitted = |action: &str| subject.is_permitted(&checks::repository(action, id));

        let mut repr = Representation::from_dto(&Self::to_dto(repository, features))?;
        let mut appender = RepresentationAppender::new(&mut repr);

        let repo_links = links.repository()?;
        appender.append_link("self", &repo_links.self_link(ns, name))?;
        if permitted("*") {
            appender.append_link("reindex", &repo_links.reindex(ns, name))?;
        }
        if permitted("delete") {
            appender.append_link("delete", &repo_links.delete(ns, name))?;
        }
        if permitted("modify") {
            appender.append_link("update", &repo_links.update(ns, name))?;
        }
        if permitted("archive") {
            if repository.archived {
                appender.append_link("unarchive", &repo_links.unarchive(ns, name))?;
            } else {
                appender.append_link("archive", &repo_links.archive(ns, name))?;
            }
        }
        if permitted("rename") {
            let rel = if self.is_rename_namespace_possible() {
                "renameWithNamespace"
            } else {
                "rename"
            };
            appender.append_link(rel, &repo_links.rename(ns, name))?;
        }
        if permitted("permissionRead") {
            appender.append_link("permissions", &links.repository_permission()?.all(ns, name))?;
        }
        if permitted("pull") && !features.protocols.is_empty() {
            let mut protocols = appender.link_array_builder("protocol");
            for protocol in &features.protocols {
                protocols = protocols.append(&protocol.protocol_type, &protocol.url);
            }
            protocols.build()?;
        }
        if features.bundle && permitted("export") {
            appender.append_link(
                "export",
                &repo_links.export(ns, name, &repository.repository_type),
            )?;
            appender.append_link("fullExport", &repo_links.full_export(ns, name))?;
            appender.append_link("exportInfo", &repo_links.export_info(ns, name))?;
        }
        if features.tags {
            appender.append_link("tags", &links.tag()?.all(ns, name))?;
        }
        if features.branches {
            appender.append_link("branches", &links.branch_collection()?.self_link(ns, name))?;
        }
        if features.branch_details {
            appender.append_link(
                "branchDetailsCollection",
                &links.branch_details_collection()?.self_link(ns, name),
            )?;
        }
        if features.incoming {
            let incoming = links.incoming()?;
            appender.append_link("incomingChangesets", &incoming.changesets(ns, name))?;
            appender.append_link("incomingDiff", &incoming.diff(ns, name))?;
            if features.diff_result {
                appender.append_link("incomingDiffParsed", &incoming.diff_parsed(ns, name))?;
            }
        }
        let source = links.source()?;
        appender.append_link("changesets", &links.changeset()?.all(ns, name))?;
        appender.append_link("sources", &source.self_without_revision(ns, name))?;
        appender.append_link("content", &source.content_root(ns, name))?;
        if self.configuration.enabled_file_search {
            appender.append_link("paths", &repo_links.paths(ns, name))?;
        }
        if permitted("healthCheck") && !features.health_check_running {
            appender.append_link("runHealthCheck", &repo_links.run_health_check(ns, name))?;
        }

        let search = links.search()?;
        appender.append_link(
            "searchableTypes",
            &search.searchable_types_for_repository(ns, name),
        )?;
        let limitable: Vec<&SearchableType> = self
            .searchable_types
            .iter()
            .filter(|t| t.limitable_to_repository)
            .collect();
        if !limitable.is_empty() {
            let mut search_links = appender.link_array_builder("search");
            for searchable in limitable {
                search_links = search_links.append(
                    &searchable.name,
                    &search.query_for_repository(ns, name, &searchable.name),
                );
            }
            search_links.build()?;
        }

        let coordinates = repository.namespace_and_name();
        let facts = EnrichmentContext::new().with(&coordinates).with(subject);
        self.base.apply_enrichers(repository, facts, &mut repr)?;

        if !repository.health_check_failures.is_empty() {
            let failures = repository
                .health_check_failures
                .iter()
                .map(|failure| self.map_failure(failure))
                .collect::<HalResult<Vec<_>>>()?;
            RepresentationAppender::new(&mut repr)
                .append_embedded_list("healthCheckFailures", failures)?;
        }
        trace!(repository = %coordinates, "mapped repository");
        Ok(repr)
    }
}

/// Maps one page of repositories.
#[derive(Clone)]
pub struct RepositoryCollectionMapper {
    mapper: RepositoryMapper,
}

impl RepositoryCollectionMapper {
    pub fn new(mapper: RepositoryMapper) -> Self {
        Self { mapper }
    }

    pub fn map(
        &self,
        request: PageRequest,
        result: &PageResult<Repository>,
        features: &RepositoryFeatures,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        let items = result
            .entities
            .iter()
            .map(|repository| self.mapper.map(repository, features, subject))
            .collect::<HalResult<Vec<_>>>()?;
        let collection = self.mapper.base.links().repository_collection()?;
        let create = subject
            .is_permitted(checks::REPOSITORY_CREATE)
            .then(|| collection.create());
        paged_collection(
            &collection.self_link(),
            request,
            result,
            "repositories",
            items,
            create,
        )
    }
}
