//! Repositories, their coordinates, branches and tags

use super::types::{Resource, ResourceType, BRANCH, BRANCH_DETAILS, NAMESPACE, REPOSITORY, TAG};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace and name addressing one repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamespaceAndName {
    pub namespace: String,
    pub name: String,
}

impl NamespaceAndName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for NamespaceAndName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// A failed repository health check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheckFailure {
    pub id: String,
    pub summary: String,
    pub description: Option<String>,
    /// Documentation URL; `{0}` is replaced by the documentation version.
    pub url: Option<String>,
}

impl HealthCheckFailure {
    pub fn new(id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            description: None,
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Documentation URL for the given documentation version.
    pub fn url_for(&self, documentation_version: &str) -> Option<String> {
        self.url
            .as_ref()
            .map(|u| u.replace("{0}", documentation_version))
    }
}

/// A source-control repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: String,
    pub namespace: String,
    pub name: String,
    #[serde(rename = "type")]
    pub repository_type: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub health_check_failures: Vec<HealthCheckFailure>,
}

impl Repository {
    pub fn new(
        id: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
        repository_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            namespace: namespace.into(),
            name: name.into(),
            repository_type: repository_type.into(),
            contact: None,
            description: None,
            creation_date: None,
            last_modified: None,
            archived: false,
            health_check_failures: Vec::new(),
        }
    }

    pub fn namespace_and_name(&self) -> NamespaceAndName {
        NamespaceAndName::new(&self.namespace, &self.name)
    }
}

impl Resource for Repository {
    const TYPE: ResourceType = REPOSITORY;
}

/// A repository namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    pub namespace: String,
}

impl Namespace {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Resource for Namespace {
    const TYPE: ResourceType = NAMESPACE;
}

/// A branch of a repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub revision: String,
    #[serde(default)]
    pub default_branch: bool,
    #[serde(default)]
    pub last_commit_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_committer: Option<String>,
    #[serde(default)]
    pub stale: bool,
}

impl Branch {
    pub fn normal(name: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            revision: revision.into(),
            default_branch: false,
            last_commit_date: None,
            last_committer: None,
            stale: false,
        }
    }

    pub fn default_branch(name: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            default_branch: true,
            ..Self::normal(name, revision)
        }
    }
}

impl Resource for Branch {
    const TYPE: ResourceType = BRANCH;
}

/// Ahead/behind counts of a branch relative to the default branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchDetails {
    pub branch_name: String,
    #[serde(default)]
    pub changesets_ahead: Option<u32>,
    #[serde(default)]
    pub changesets_behind: Option<u32>,
}

impl BranchDetails {
    pub fn new(branch_name: impl Into<String>, ahead: Option<u32>, behind: Option<u32>) -> Self {
        Self {
            branch_name: branch_name.into(),
            changesets_ahead: ahead,
            changesets_behind: behind,
        }
    }
}

impl Resource for BranchDetails {
    const TYPE: ResourceType = BRANCH_DETAILS;
}

/// A tag pointing to a revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub revision: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl Tag {
    pub fn new(name: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            revision: revision.into(),
            date: None,
        }
    }
}

impl Resource for Tag {
    const TYPE: ResourceType = TAG;
}
