//! Global server configuration, the index marker and paged results

use super::types::{Resource, ResourceType, INDEX, SCM_CONFIGURATION};
use serde::{Deserialize, Serialize};

/// Who may access the server without logging in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnonymousMode {
    Full,
    Protocol,
    #[default]
    Off,
}

/// The global SCM configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScmConfiguration {
    pub id: String,
    pub realm_description: String,
    pub anonymous_mode: AnonymousMode,
    /// Name of the active namespace strategy, e.g. `CustomNamespaceStrategy`
    pub namespace_strategy: String,
    pub enabled_file_search: bool,
    pub login_info_url: Option<String>,
    pub release_feed_url: Option<String>,
    pub alerts_url: Option<String>,
    pub disable_feedback: bool,
}

impl Default for ScmConfiguration {
    fn default() -> Self {
        Self {
            id: "scm".to_string(),
            realm_description: "SONIA :: SCM Manager".to_string(),
            anonymous_mode: AnonymousMode::Off,
            namespace_strategy: "UsernameNamespaceStrategy".to_string(),
            enabled_file_search: true,
            login_info_url: None,
            release_feed_url: None,
            alerts_url: None,
            disable_feedback: false,
        }
    }
}

impl Resource for ScmConfiguration {
    const TYPE: ResourceType = SCM_CONFIGURATION;
}

/// Marker for the API entry document; enrichers target it to publish
/// top-level links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Index;

impl Resource for Index {
    const TYPE: ResourceType = INDEX;
}

/// One page of a larger result set.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub entities: Vec<T>,
    /// Number of entities across all pages
    pub overall_count: usize,
}

impl<T> PageResult<T> {
    pub fn new(entities: Vec<T>, overall_count: usize) -> Self {
        Self {
            entities,
            overall_count,
        }
    }

    /// Number of pages for the given page size; zero entities yield one page.
    pub fn page_total(&self, page_size: usize) -> usize {
        if page_size == 0 || self.overall_count == 0 {
            return 1;
        }
        self.overall_count.div_ceil(page_size)
    }
}
