//! The API entry document

use super::MapperBase;
use crate::domain::{AnonymousMode, Index, ScmConfiguration};
use crate::enrich::EnrichmentContext;
use crate::error::HalResult;
use crate::hal::{HalAppender, Representation, RepresentationAppender};
use crate::permission::{checks, SharedSubject};
use serde::{Deserialize, Serialize};

/// Rels the index document always owns; configuration links must not reuse
/// them.
pub const INDEX_RELS: &[&str] = &[
    "self",
    "loginInfo",
    "me",
    "login",
    "logout",
    "users",
    "autocomplete",
    "groups",
    "config",
    "invalidateCaches",
    "invalidateSearchIndex",
    "updateInfo",
    "repositories",
    "namespaces",
    "permissions",
    "repositoryVerbs",
    "repositoryTypes",
    "namespaceStrategies",
    "repositoryRoles",
    "importLog",
    "search",
    "searchableTypes",
    "alerts",
];

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// A type the search engine can query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableType {
    pub name: String,
    #[serde(default)]
    pub limitable_to_repository: bool,
}

impl SearchableType {
    pub fn new(name: impl Into<String>, limitable_to_repository: bool) -> Self {
        Self {
            name: name.into(),
            limitable_to_repository,
        }
    }
}

/// Generates the index document listing the entry points the subject may
/// use.
#[derive(Clone)]
pub struct IndexMapper {
    base: MapperBase,
    configuration: ScmConfiguration,
    version: String,
    instance_id: String,
    searchable_types: Vec<SearchableType>,
}

impl IndexMapper {
    pub fn new(
        base: MapperBase,
        configuration: ScmConfiguration,
        version: impl Into<String>,
        instance_id: impl Into<String>,
    ) -> Self {
        Self {
            base,
            configuration,
            version: version.into(),
            instance_id: instance_id.into(),
            searchable_types: Vec::new(),
        }
    }

    pub fn with_searchable_types(mut self, types: Vec<SearchableType>) -> Self {
        self.searchable_types = types;
        self
    }

    fn shows_subject_links(&self, subject: &SharedSubject) -> bool {
        if subject.is_anonymous() {
            self.configuration.anonymous_mode == AnonymousMode::Full
        } else {
            subject.is_authenticated()
        }
    }

    pub fn map(&self, subject: &SharedSubject) -> HalResult<Representation> {
        let links = self.base.links();
        let mut repr = Representation::new();
        repr.set_attribute("version", self.version.as_str())?;
        repr.set_attribute("instanceId", self.instance_id.as_str())?;

        let mut appender = RepresentationAppender::new(&mut repr);
        appender.append_link("self", &links.index()?.self_link())?;
        if let Some(login_info) = self.configuration.login_info_url.as_deref() {
            if !login_info.is_empty() {
                appender.append_link("loginInfo", login_info)?;
            }
        }

        let auth = links.auth()?;
        if self.shows_subject_links(subject) {
            appender.append_link("me", &links.me()?.self_link())?;
            if subject.is_anonymous() {
                appender.append_link("login", &auth.login())?;
            } else {
                appender.append_link("logout", &auth.logout())?;
            }
            if subject.is_permitted(checks::USER_LIST) {
                appender.append_link("users", &links.user_collection()?.self_link())?;
            }

            let autocomplete = links.autocomplete()?;
            let mut autocomplete_links = appender.link_array_builder("autocomplete");
            if subject.is_permitted(checks::USER_AUTOCOMPLETE) {
                autocomplete_links = autocomplete_links.append("users", &autocomplete.users());
            }
            if subject.is_permitted(checks::GROUP_AUTOCOMPLETE) {
                autocomplete_links = autocomplete_links.append("groups", &autocomplete.groups());
            }
            autocomplete_links
                .append("namespaces", &autocomplete.namespaces())
                .build()?;

            if subject.is_permitted(checks::GROUP_LIST) {
                appender.append_link("groups", &links.group_collection()?.self_link())?;
            }
            let admin = links.administration()?;
            if subject.is_permitted(checks::CONFIGURATION_LIST) {
                appender.append_link("config", &links.config()?.self_link())?;
                if subject.is_permitted(&checks::configuration("write", &self.configuration.id)) {
                    appender.append_link("invalidateCaches", &admin.invalidate_caches())?;
                    appender
                        .append_link("invalidateSearchIndex", &admin.invalidate_search_index())?;
                }
                if has_text(self.configuration.release_feed_url.as_deref()) {
                    appender.append_link("updateInfo", &admin.update_info())?;
                }
            }
            appender.append_link("repositories", &links.repository_collection()?.self_link())?;
            appender.append_link("namespaces", &links.namespace()?.collection())?;
            if subject.is_permitted(checks::PERMISSION_LIST) {
                appender.append_link("permissions", &admin.permissions())?;
            }
            appender.append_link("repositoryVerbs", &admin.repository_verbs())?;
            appender.append_link("repositoryTypes", &admin.repository_types())?;
            appender.append_link("namespaceStrategies", &admin.namespace_strategies())?;
            appender.append_link("repositoryRoles", &admin.repository_roles())?;
            appender.append_link("importLog", &admin.import_log())?;

            let search = links.search()?;
            if !self.searchable_types.is_empty() {
                let mut search_links = appender.link_array_builder("search");
                for searchable in &self.searchable_types {
                    search_links =
                        search_links.append(&searchable.name, &search.query(&searchable.name));
                }
                search_links.build()?;
            }
            appender.append_link("searchableTypes", &search.searchable_types())?;

            if has_text(self.configuration.alerts_url.as_deref()) {
                appender.append_link("alerts", &admin.alerts())?;
            }
        } else {
            appender.append_link("login", &auth.login())?;
        }

        let facts = EnrichmentContext::new().with(subject);
        self.base.apply_enrichers(&Index, facts, &mut repr)?;
        Ok(repr)
    }
}
