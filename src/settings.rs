//! Settings file for the rendering environment
//!
//! Loaded from YAML. Every field has a default, so an empty file (or no
//! file at all) is valid.

use crate::domain::ScmConfiguration;
use crate::error::HalResult;
use crate::mapper::SearchableType;
use crate::permission::PermissionSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// API base URI, e.g. `https://scm.example.com/scm/api/`
    pub base_uri: Option<String>,
    /// Server version reported by the index document
    pub version: String,
    pub instance_id: String,
    /// Replaces `{0}` in health check documentation URLs
    pub documentation_version: String,
    pub page_size: usize,
    pub scm: ScmConfiguration,
    pub searchable_types: Vec<SearchableType>,
    /// Named configurations published as links on the index document
    pub configuration_links: Vec<String>,
    /// Subject the CLI renders on behalf of
    pub subject: PermissionSet,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_uri: None,
            version: crate::VERSION.to_string(),
            instance_id: Uuid::new_v4().to_string(),
            documentation_version: "latest".to_string(),
            page_size: 10,
            scm: ScmConfiguration::default(),
            searchable_types: Vec::new(),
            configuration_links: Vec::new(),
            subject: PermissionSet::anonymous(),
        }
    }
}

impl Settings {
    /// Parse settings from YAML text.
    pub fn from_yaml(yaml: &str) -> HalResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read settings from `path`.
    pub fn load(path: &Path) -> HalResult<Self> {
        debug!(path = %path.display(), "loading settings");
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Read `path`, or the default location; a missing default file yields
    /// default settings.
    pub fn load_or_default(path: Option<&Path>) -> HalResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::load(&path)
                } else {
                    debug!(path = %path.display(), "no settings file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// `~/.config/scm-hal/settings.yaml` (platform config dir).
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".config"));
        config_dir.join("scm-hal").join("settings.yaml")
    }

    pub fn to_yaml(&self) -> HalResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
