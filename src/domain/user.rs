//! Users, groups and the authenticated subject's own view

use super::types::{Resource, ResourceType, GROUP, ME, USER};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub mail: Option<String>,
    #[serde(default)]
    pub external: bool,
    #[serde(default = "default_active")]
    pub active: bool,
    /// Hashed password; never leaves the server.
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl User {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            mail: None,
            external: false,
            active: true,
            password: None,
            creation_date: None,
            last_modified: None,
        }
    }

    pub fn with_mail(mut self, mail: impl Into<String>) -> Self {
        self.mail = Some(mail.into());
        self
    }
}

impl Resource for User {
    const TYPE: ResourceType = USER;
}

/// The currently authenticated user together with its group memberships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Me {
    pub user: User,
    #[serde(default)]
    pub groups: Vec<String>,
}

impl Me {
    pub fn new(user: User, groups: Vec<String>) -> Self {
        Self { user, groups }
    }
}

impl Resource for Me {
    const TYPE: ResourceType = ME;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub group_type: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub external: bool,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            group_type: None,
            members: Vec::new(),
            external: false,
            creation_date: None,
            last_modified: None,
        }
    }

    pub fn with_members(mut self, members: &[&str]) -> Self {
        self.members = members.iter().map(|m| m.to_string()).collect();
        self
    }
}

impl Resource for Group {
    const TYPE: ResourceType = GROUP;
}
