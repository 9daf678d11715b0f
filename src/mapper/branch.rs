//! Branch representations

use super::MapperBase;
use crate::domain::{Branch, Repository};
use crate::enrich::EnrichmentContext;
use crate::error::HalResult;
use crate::hal::{HalAppender, Representation, RepresentationAppender};
use crate::permission::{checks, SharedSubject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchDto {
    pub name: String,
    pub revision: String,
    pub default_branch: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_commit_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_committer: Option<String>,
    #[serde(default)]
    pub stale: bool,
}

impl From<&Branch> for BranchDto {
    fn from(branch: &Branch) -> Self {
        Self {
            name: branch.name.clone(),
            revision: branch.revision.clone(),
            default_branch: branch.default_branch,
            last_commit_date: branch.last_commit_date,
            last_committer: branch.last_committer.clone(),
            stale: branch.stale,
        }
    }
}

#[derive(Clone)]
pub struct BranchMapper {
    base: MapperBase,
}

impl BranchMapper {
    pub fn new(base: MapperBase) -> Self {
        Self { base }
    }

    /// Map a branch of `repository`.
    pub fn map(
        &self,
        branch: &Branch,
        repository: &Repository,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        let links = self.base.links();
        let (ns, name) = (repository.namespace.as_str(), repository.name.as_str());

        let mut repr = Representation::from_dto(&BranchDto::from(branch))?;
        let mut appender = RepresentationAppender::new(&mut repr);
        let branch_links = links.branch()?;
        appender.append_link("self", &branch_links.self_link(ns, name, &branch.name))?;
        appender.append_link("history", &branch_links.history(ns, name, &branch.name))?;
        appender.append_link(
            "changeset",
            &links.changeset()?.self_link(ns, name, &branch.revision),
        )?;
        appender.append_link(
            "source",
            &links.source()?.self_link(ns, name, &branch.revision),
        )?;
        if !branch.default_branch
            && subject.is_permitted(&checks::repository("push", &repository.id))
        {
            appender.append_link("delete", &branch_links.delete(ns, name, &branch.name))?;
        }

        let coordinates = repository.namespace_and_name();
        let facts = EnrichmentContext::new()
            .with(repository)
            .with(&coordinates)
            .with(subject);
        self.base.apply_enrichers(branch, facts, &mut repr)?;
        Ok(repr)
    }
}

/// Maps all branches of one repository.
#[derive(Clone)]
pub struct BranchCollectionMapper {
    mapper: BranchMapper,
}

impl BranchCollectionMapper {
    pub fn new(mapper: BranchMapper) -> Self {
        Self { mapper }
    }

    pub fn map(
        &self,
        branches: &[Branch],
        repository: &Repository,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        let links = self.mapper.base.links();
        let (ns, name) = (repository.namespace.as_str(), repository.name.as_str());
        let items = branches
            .iter()
            .map(|branch| self.mapper.map(branch, repository, subject))
            .collect::<HalResult<Vec<_>>>()?;

        let mut repr = Representation::new();
        let mut appender = RepresentationAppender::new(&mut repr);
        appender.append_link("self", &links.branch_collection()?.self_link(ns, name))?;
        if subject.is_permitted(&checks::repository("push", &repository.id)) {
            appender.append_link("create", &links.branch()?.create(ns, name))?;
        }
        appender.append_embedded_list("branches", items)?;
        Ok(repr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::test_support::{base, href, BASE};
    use crate::permission::PermissionSet;

    fn repository() -> Repository {
        Repository::new("42", "hitchhiker", "heartOfGold", "git")
    }

    fn pusher() -> SharedSubject {
        PermissionSet::new("trillian")
            .grant("repository:push:42")
            .into_shared()
    }

    #[test]
    fn branch_name_is_encoded_in_links() {
        let branch = Branch::normal("feature/hitchhiker42", "abc");
        let repr = BranchMapper::new(base())
            .map(&branch, &repository(), &pusher())
            .unwrap();
        let prefix = format!("{BASE}v2/repositories/hitchhiker/heartOfGold");
        assert_eq!(
            href(&repr, "self"),
            Some(format!("{prefix}/branches/feature%2Fhitchhiker42").as_str())
        );
        assert_eq!(
            href(&repr, "history"),
            Some(format!("{prefix}/branches/feature%2Fhitchhiker42/changesets/").as_str())
        );
        assert_eq!(href(&repr, "changeset"), Some(format!("{prefix}/changesets/abc").as_str()));
        assert_eq!(href(&repr, "source"), Some(format!("{prefix}/sources/abc/").as_str()));
        assert!(repr.links().contains("delete"));
    }

    #[test]
    fn default_branch_cannot_be_deleted() {
        let branch = Branch::default_branch("main", "abc");
        let repr = BranchMapper::new(base())
            .map(&branch, &repository(), &pusher())
            .unwrap();
        assert!(!repr.links().contains("delete"));
        assert_eq!(*repr.attribute("defaultBranch").unwrap(), true);
    }

    #[test]
    fn delete_needs_push_permission() {
        let branch = Branch::normal("develop", "abc");
        let repr = BranchMapper::new(base())
            .map(&branch, &repository(), &PermissionSet::new("dent").into_shared())
            .unwrap();
        assert!(!repr.links().contains("delete"));
    }

    #[test]
    fn collection_embeds_branches() {
        let branches = vec![Branch::default_branch("main", "a"), Branch::normal("develop", "b")];
        let repr = BranchCollectionMapper::new(BranchMapper::new(base()))
            .map(&branches, &repository(), &pusher())
            .unwrap();
        assert_eq!(repr.embedded().items("branches").len(), 2);
        assert_eq!(
            href(&repr, "create"),
            Some(format!("{BASE}v2/repositories/hitchhiker/heartOfGold/branches/").as_str())
        );
    }
}
