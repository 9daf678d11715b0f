//! Ahead/behind details of branches

use super::MapperBase;
use crate::domain::{BranchDetails, NamespaceAndName};
use crate::enrich::EnrichmentContext;
use crate::error::HalResult;
use crate::hal::{HalAppender, Representation, RepresentationAppender};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchDetailsDto {
    pub branch_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changesets_ahead: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changesets_behind: Option<u32>,
}

impl From<&BranchDetails> for BranchDetailsDto {
    fn from(details: &BranchDetails) -> Self {
        Self {
            branch_name: details.branch_name.clone(),
            changesets_ahead: details.changesets_ahead,
            changesets_behind: details.changesets_behind,
        }
    }
}

#[derive(Clone)]
pub struct BranchDetailsMapper {
    base: MapperBase,
}

impl BranchDetailsMapper {
    pub fn new(base: MapperBase) -> Self {
        Self { base }
    }

    /// Map the details of one branch of the repository at `coordinates`.
    pub fn map(
        &self,
        coordinates: &NamespaceAndName,
        details: &BranchDetails,
    ) -> HalResult<Representation> {
        let mut repr = Representation::from_dto(&BranchDetailsDto::from(details))?;
        RepresentationAppender::new(&mut repr).append_link(
            "self",
            &self.base.links().branch_details()?.self_link(
                &coordinates.namespace,
                &coordinates.name,
                &details.branch_name,
            ),
        )?;

        let facts = EnrichmentContext::new().with(coordinates);
        self.base.apply_enrichers(details, facts, &mut repr)?;
        Ok(repr)
    }
}

/// Maps the details of several branches of one repository.
#[derive(Clone)]
pub struct BranchDetailsCollectionMapper {
    mapper: BranchDetailsMapper,
}

impl BranchDetailsCollectionMapper {
    pub fn new(mapper: BranchDetailsMapper) -> Self {
        Self { mapper }
    }

    pub fn map(
        &self,
        coordinates: &NamespaceAndName,
        details: &[BranchDetails],
    ) -> HalResult<Representation> {
        let items = details
            .iter()
            .map(|d| self.mapper.map(coordinates, d))
            .collect::<HalResult<Vec<_>>>()?;

        let mut repr = Representation::new();
        let mut appender = RepresentationAppender::new(&mut repr);
        appender.append_link(
            "self",
            &self
                .mapper
                .base
                .links()
                .branch_details_collection()?
                .self_link(&coordinates.namespace, &coordinates.name),
        )?;
        appender.append_embedded_list("branchDetails", items)?;
        Ok(repr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::BRANCH_DETAILS;
    use crate::enrich::{EnricherRegistry, FnEnricher};
    use crate::mapper::test_support::{base, base_with, href};
    use std::sync::Arc;

    fn coordinates() -> NamespaceAndName {
        NamespaceAndName::new("hitchhiker", "42Puzzle")
    }

    #[test]
    fn absent_counts_are_omitted() {
        let repr = BranchDetailsMapper::new(base())
            .map(&coordinates(), &BranchDetails::new("develop", None, Some(3)))
            .unwrap();
        assert!(repr.attribute("changesetsAhead").is_none());
        assert_eq!(*repr.attribute("changesetsBehind").unwrap(), 3);
    }

    #[test]
    fn enrichers_see_the_repository_coordinates() {
        let registry = Arc::new(EnricherRegistry::new());
        registry.register(
            BRANCH_DETAILS,
            Arc::new(FnEnricher::new("compare", |ctx, appender| {
                let details = ctx.one_require_by_type::<BranchDetails>()?;
                let repo = ctx.one_require_by_type::<NamespaceAndName>()?;
                appender.append_link("compare", &format!("/compare/{}/{}", repo, details.branch_name))
            })),
        );
        let repr = BranchDetailsMapper::new(base_with(registry))
            .map(&coordinates(), &BranchDetails::new("master", Some(1), Some(2)))
            .unwrap();
        assert_eq!(href(&repr, "compare"), Some("/compare/hitchhiker/42Puzzle/master"));
    }

    #[test]
    fn collection_keeps_item_order() {
        let details = vec![
            BranchDetails::new("b", Some(1), Some(0)),
            BranchDetails::new("a", Some(0), Some(1)),
        ];
        let repr = BranchDetailsCollectionMapper::new(BranchDetailsMapper::new(base()))
            .map(&coordinates(), &details)
            .unwrap();
        let names: Vec<_> = repr
            .embedded()
            .items("branchDetails")
            .iter()
            .map(|item| item.attribute("branchName").unwrap().clone())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
