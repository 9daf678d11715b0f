//! Authorization collaborator consulted by the mappers
//!
//! Mappers only ask "is this permitted?"; how permissions are granted is
//! up to the caller. [`PermissionSet`] implements the usual wildcard
//! permission strings (`repository:read,pull:*`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Principal name of the anonymous user.
pub const ANONYMOUS: &str = "_anonymous";

/// The caller on whose behalf a representation is rendered.
pub trait Subject: Send + Sync {
    fn is_permitted(&self, permission: &str) -> bool;

    /// Name of the authenticated principal, `None` when not logged in.
    fn principal(&self) -> Option<&str>;

    fn is_authenticated(&self) -> bool {
        self.principal().is_some()
    }

    fn is_anonymous(&self) -> bool {
        self.principal() == Some(ANONYMOUS)
    }
}

/// Shared handle mappers hand to enrichers through the context.
pub type SharedSubject = Arc<dyn Subject>;

/// One wildcard permission: `:`-separated parts, each a `,`-separated set
/// of values or `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPermission {
    parts: Vec<Vec<String>>,
}

impl WildcardPermission {
    pub fn parse(permission: &str) -> Self {
        let parts = permission
            .split(':')
            .map(|part| {
                part.split(',')
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
                    .collect()
            })
            .collect();
        Self { parts }
    }

    fn part_is_wildcard(part: &[String]) -> bool {
        part.iter().any(|value| value == "*")
    }

    /// Whether holding `self` grants `other`.
    ///
    /// Missing trailing parts of `self` imply everything; extra trailing
    /// parts of `self` must be wildcards.
    pub fn implies(&self, other: &WildcardPermission) -> bool {
        for (i, requested) in other.parts.iter().enumerate() {
            let Some(held) = self.parts.get(i) else {
                return true;
            };
            if Self::part_is_wildcard(held) {
                continue;
            }
            if !requested.iter().all(|value| held.contains(value)) {
                return false;
            }
        }
        self.parts
            .iter()
            .skip(other.parts.len())
            .all(|held| Self::part_is_wildcard(held))
    }
}

impl fmt::Display for WildcardPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.parts.iter().map(|p| p.join(",")).collect();
        write!(f, "{}", parts.join(":"))
    }
}

/// A principal with a fixed list of granted permissions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionSet {
    #[serde(default)]
    pub principal: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl PermissionSet {
    pub fn new(principal: impl Into<String>) -> Self {
        Self {
            principal: Some(principal.into()),
            permissions: Vec::new(),
        }
    }

    pub fn anonymous() -> Self {
        Self::new(ANONYMOUS)
    }

    /// A principal that may do everything.
    pub fn admin(principal: impl Into<String>) -> Self {
        Self::new(principal).grant("*")
    }

    pub fn grant(mut self, permission: impl Into<String>) -> Self {
        self.permissions.push(permission.into());
        self
    }

    pub fn into_shared(self) -> SharedSubject {
        Arc::new(self)
    }
}

impl Subject for PermissionSet {
    fn is_permitted(&self, permission: &str) -> bool {
        let requested = WildcardPermission::parse(permission);
        self.permissions
            .iter()
            .any(|held| WildcardPermission::parse(held).implies(&requested))
    }

    fn principal(&self) -> Option<&str> {
        self.principal.as_deref()
    }
}

/// Permission strings checked by the mappers.
pub mod checks {
    pub fn repository(action: &str, id: &str) -> String {
        format!("repository:{}:{}", action, id)
    }

    pub fn user(action: &str, name: &str) -> String {
        format!("user:{}:{}", action, name)
    }

    pub fn group(action: &str, name: &str) -> String {
        format!("group:{}:{}", action, name)
    }

    pub fn configuration(action: &str, id: &str) -> String {
        format!("configuration:{}:{}", action, id)
    }

    pub const USER_LIST: &str = "user:list";
    pub const USER_CREATE: &str = "user:create";
    pub const USER_AUTOCOMPLETE: &str = "user:autocomplete";
    pub const GROUP_LIST: &str = "group:list";
    pub const GROUP_CREATE: &str = "group:create";
    pub const GROUP_AUTOCOMPLETE: &str = "group:autocomplete";
    pub const REPOSITORY_CREATE: &str = "repository:create";
    pub const CONFIGURATION_LIST: &str = "configuration:list";
    pub const PERMISSION_LIST: &str = "permission:list";
    pub const NAMESPACE_PERMISSION_READ: &str = "namespace:permissionRead";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_permission_is_implied() {
        let subject = PermissionSet::new("trillian").grant("user:delete:trillian");
        assert!(subject.is_permitted("user:delete:trillian"));
        assert!(!subject.is_permitted("user:delete:dent"));
        assert!(!subject.is_permitted("user:modify:trillian"));
    }

    #[test]
    fn wildcard_parts_match_anything() {
        let subject = PermissionSet::new("trillian").grant("repository:*:42");
        assert!(subject.is_permitted("repository:modify:42"));
        assert!(subject.is_permitted("repository:delete:42"));
        assert!(!subject.is_permitted("repository:delete:43"));
    }

    #[test]
    fn shorter_grant_implies_longer_request() {
        let subject = PermissionSet::new("trillian").grant("configuration");
        assert!(subject.is_permitted("configuration:read:jira"));
        assert!(subject.is_permitted("configuration:list"));
    }

    #[test]
    fn longer_grant_needs_wildcard_tail() {
        let held = WildcardPermission::parse("user:read:trillian");
        assert!(!held.implies(&WildcardPermission::parse("user:read")));
        let held = WildcardPermission::parse("user:read:*");
        assert!(held.implies(&WildcardPermission::parse("user:read")));
    }

    #[test]
    fn comma_separated_values() {
        let subject = PermissionSet::new("trillian").grant("repository:read,pull:*");
        assert!(subject.is_permitted("repository:pull:1"));
        assert!(!subject.is_permitted("repository:push:1"));
    }

    #[test]
    fn admin_is_permitted_everything() {
        let subject = PermissionSet::admin("scmadmin");
        assert!(subject.is_permitted("repository:healthCheck:1"));
        assert!(subject.is_authenticated());
        assert!(!subject.is_anonymous());
    }

    #[test]
    fn anonymous_and_unauthenticated() {
        assert!(PermissionSet::anonymous().is_anonymous());
        let nobody = PermissionSet::default();
        assert!(!nobody.is_authenticated());
        assert!(!nobody.is_permitted("user:list"));
    }

    #[test]
    fn display_round_trips_the_string() {
        assert_eq!(
            WildcardPermission::parse("repository:read,pull:42").to_string(),
            "repository:read,pull:42"
        );
    }
}
