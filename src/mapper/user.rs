//! User representations

use super::collection::{paged_collection, PageRequest};
use super::MapperBase;
use crate::domain::{PageResult, User};
use crate::enrich::EnrichmentContext;
use crate::error::HalResult;
use crate::hal::{HalAppender, Representation, RepresentationAppender};
use crate::permission::{checks, SharedSubject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire form of a user. The password is accepted on input but never
/// serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    #[serde(default)]
    pub external: bool,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            display_name: user.display_name.clone(),
            mail: user.mail.clone(),
            external: user.external,
            active: user.active,
            password: None,
            creation_date: user.creation_date,
            last_modified: user.last_modified,
        }
    }
}

impl UserDto {
    /// Map an incoming DTO to a user. External users never keep a password.
    pub fn into_entity(self) -> User {
        let mut user = User::new(self.name, self.display_name);
        user.mail = self.mail;
        user.external = self.external;
        user.active = self.active;
        user.password = if self.external { None } else { self.password };
        user
    }
}

#[derive(Clone)]
pub struct UserMapper {
    base: MapperBase,
}

impl UserMapper {
    pub fn new(base: MapperBase) -> Self {
        Self { base }
    }

    pub fn map(&self, user: &User, subject: &SharedSubject) -> HalResult<Representation> {
        let links = self.base.links();
        let user_links = links.user()?;
        let name = user.name.as_str();
        let permitted = |action: &str| subject.is_permitted(&checks::user(action, name));

        let mut repr = Representation::from_dto(&UserDto::from(user))?;
        let mut appender = RepresentationAppender::new(&mut repr);
        appender.append_link("self", &user_links.self_link(name))?;
        if permitted("delete") {
            appender.append_link("delete", &user_links.delete(name))?;
        }
        if permitted("modify") {
            appender.append_link("update", &user_links.update(name))?;
            if user.external {
                appender.append_link("convertToInternal", &user_links.to_internal(name))?;
            } else {
                appender.append_link("password", &user_links.password_change(name))?;
                appender.append_link("convertToExternal", &user_links.to_external(name))?;
            }
            appender.append_link("permissionOverview", &user_links.permission_overview(name))?;
        }
        if subject.is_permitted("permission:read") {
            appender.append_link("permissions", &user_links.permissions(name))?;
        }
        if !user.external && permitted("changeApiKeys") {
            appender.append_link("apiKeys", &user_links.api_keys(name))?;
        }

        let facts = EnrichmentContext::new().with(subject);
        self.base.apply_enrichers(user, facts, &mut repr)?;
        Ok(repr)
    }
}

#[derive(Clone)]
pub struct UserCollectionMapper {
    mapper: UserMapper,
}

impl UserCollectionMapper {
    pub fn new(mapper: UserMapper) -> Self {
        Self { mapper }
    }

    pub fn map(
        &self,
        request: PageRequest,
        result: &PageResult<User>,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        let items = result
            .entities
            .iter()
            .map(|user| self.mapper.map(user, subject))
            .collect::<HalResult<Vec<_>>>()?;
        let collection = self.mapper.base.links().user_collection()?;
        let create = subject
            .is_permitted(checks::USER_CREATE)
            .then(|| collection.create());
        paged_collection(&collection.self_link(), request, result, "users", items, create)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::test_support::{base, href, BASE};
    use crate::permission::PermissionSet;

    fn trillian() -> User {
        User::new("trillian", "Tricia McMillan").with_mail("tricia@hitchhiker.com")
    }

    #[test]
    fn maps_fields_without_password() {
        let mut user = trillian();
        user.password = Some("secret".to_string());
        let repr = UserMapper::new(base())
            .map(&user, &PermissionSet::new("dent").into_shared())
            .unwrap();
        assert_eq!(*repr.attribute("displayName").unwrap(), "Tricia McMillan");
        assert_eq!(*repr.attribute("mail").unwrap(), "tricia@hitchhiker.com");
        assert!(repr.attribute("password").is_none());
        assert_eq!(href(&repr, "self"), Some(format!("{BASE}v2/users/trillian").as_str()));
        assert!(!repr.links().contains("delete"));
        assert!(!repr.links().contains("update"));
    }

    #[test]
    fn delete_link_with_delete_permission() {
        let subject = PermissionSet::new("admin")
            .grant("user:delete:trillian")
            .into_shared();
        let repr = UserMapper::new(base()).map(&trillian(), &subject).unwrap();
        assert_eq!(href(&repr, "delete"), Some(format!("{BASE}v2/users/trillian").as_str()));
    }

    #[test]
    fn internal_user_with_modify_permission() {
        let subject = PermissionSet::new("admin")
            .grant("user:modify:trillian")
            .into_shared();
        let repr = UserMapper::new(base()).map(&trillian(), &subject).unwrap();
        assert!(repr.links().contains("update"));
        assert_eq!(
            href(&repr, "password"),
            Some(format!("{BASE}v2/users/trillian/password").as_str())
        );
        assert!(repr.links().contains("convertToExternal"));
        assert!(!repr.links().contains("convertToInternal"));
    }

    #[test]
    fn external_user_can_be_converted_to_internal() {
        let mut user = trillian();
        user.external = true;
        let subject = PermissionSet::admin("admin").into_shared();
        let repr = UserMapper::new(base()).map(&user, &subject).unwrap();
        assert!(!repr.links().contains("password"));
        assert!(!repr.links().contains("apiKeys"));
        assert_eq!(
            href(&repr, "convertToInternal"),
            Some(format!("{BASE}v2/users/trillian/convert-to-internal").as_str())
        );
    }

    #[test]
    fn api_keys_link_needs_permission() {
        let subject = PermissionSet::new("trillian")
            .grant("user:changeApiKeys:trillian")
            .into_shared();
        let repr = UserMapper::new(base()).map(&trillian(), &subject).unwrap();
        assert_eq!(
            href(&repr, "apiKeys"),
            Some(format!("{BASE}v2/users/trillian/api_keys").as_str())
        );
    }

    #[test]
    fn dto_keeps_password_only_for_internal_users() {
        let dto: UserDto = serde_json::from_str(
            r#"{"name":"dent","displayName":"Arthur Dent","password":"towel","external":true}"#,
        )
        .unwrap();
        let user = dto.into_entity();
        assert!(user.external);
        assert!(user.password.is_none());
        assert!(user.active);
    }

    #[test]
    fn paged_users() {
        let result = PageResult::new(vec![trillian(), User::new("dent", "Arthur Dent")], 12);
        let repr = UserCollectionMapper::new(UserMapper::new(base()))
            .map(
                PageRequest::new(1, 2),
                &result,
                &PermissionSet::new("dent").into_shared(),
            )
            .unwrap();
        assert_eq!(*repr.attribute("page").unwrap(), 1);
        assert_eq!(*repr.attribute("pageTotal").unwrap(), 6);
        assert_eq!(
            href(&repr, "prev"),
            Some(format!("{BASE}v2/users/?page=0&pageSize=2").as_str())
        );
        assert!(!repr.links().contains("create"));
        assert_eq!(repr.embedded().items("users").len(), 2);
    }
}
