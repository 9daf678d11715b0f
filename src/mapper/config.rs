//! Global configuration representation

use super::MapperBase;
use crate::domain::{AnonymousMode, ScmConfiguration};
use crate::enrich::EnrichmentContext;
use crate::error::HalResult;
use crate::hal::{HalAppender, Representation, RepresentationAppender};
use crate::permission::{checks, SharedSubject};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    pub realm_description: String,
    pub anonymous_mode: AnonymousMode,
    pub namespace_strategy: String,
    pub enabled_file_search: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_info_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_feed_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alerts_url: Option<String>,
    #[serde(default)]
    pub disable_feedback: bool,
}

impl From<&ScmConfiguration> for ConfigDto {
    fn from(configuration: &ScmConfiguration) -> Self {
        Self {
            realm_description: configuration.realm_description.clone(),
            anonymous_mode: configuration.anonymous_mode,
            namespace_strategy: configuration.namespace_strategy.clone(),
            enabled_file_search: configuration.enabled_file_search,
            login_info_url: configuration.login_info_url.clone(),
            release_feed_url: configuration.release_feed_url.clone(),
            alerts_url: configuration.alerts_url.clone(),
            disable_feedback: configuration.disable_feedback,
        }
    }
}

impl ConfigDto {
    /// Apply the DTO on top of `current`, keeping its id.
    pub fn into_entity(self, current: &ScmConfiguration) -> ScmConfiguration {
        ScmConfiguration {
            id: current.id.clone(),
            realm_description: self.realm_description,
            anonymous_mode: self.anonymous_mode,
            namespace_strategy: self.namespace_strategy,
            enabled_file_search: self.enabled_file_search,
            login_info_url: self.login_info_url.filter(|url| !url.is_empty()),
            release_feed_url: self.release_feed_url.filter(|url| !url.is_empty()),
            alerts_url: self.alerts_url.filter(|url| !url.is_empty()),
            disable_feedback: self.disable_feedback,
        }
    }
}

#[derive(Clone)]
pub struct ConfigMapper {
    base: MapperBase,
}

impl ConfigMapper {
    pub fn new(base: MapperBase) -> Self {
        Self { base }
    }

    pub fn map(
        &self,
        configuration: &ScmConfiguration,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        let config_links = self.base.links().config()?;
        let mut repr = Representation::from_dto(&ConfigDto::from(configuration))?;
        let mut appender = RepresentationAppender::new(&mut repr);
        appender.append_link("self", &config_links.self_link())?;
        if subject.is_permitted(&checks::configuration("write", &configuration.id)) {
            appender.append_link("update", &config_links.update())?;
        }

        let facts = EnrichmentContext::new().with(subject);
        self.base.apply_enrichers(configuration, facts, &mut repr)?;
        Ok(repr)
    }
}
