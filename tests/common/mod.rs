//! Shared fixtures for the integration tests
//!
//! The hitchhiker universe: one repository, a handful of users and
//! subjects with increasing rights.

#![allow(dead_code)]

use scm_hal::domain::{Branch, BranchDetails, Group, NamespaceAndName, Repository, Tag, User};
use scm_hal::{EnricherCatalog, HalApi, PermissionSet, Representation, Settings, SharedSubject};

pub const BASE_URI: &str = "/scm/api/";

pub fn settings() -> Settings {
    Settings {
        base_uri: Some(BASE_URI.to_string()),
        version: "3.0.0".to_string(),
        instance_id: "c0ffee".to_string(),
        ..Settings::default()
    }
}

pub fn api() -> HalApi {
    api_with(EnricherCatalog::new())
}

pub fn api_with(catalog: EnricherCatalog) -> HalApi {
    HalApi::from_settings(&settings(), catalog).expect("api from settings")
}

pub fn puzzle() -> NamespaceAndName {
    NamespaceAndName::new("hitchhiker", "42Puzzle")
}

pub fn heart_of_gold() -> Repository {
    Repository::new("hog", "hitchhiker", "heartOfGold", "git")
}

pub fn master() -> Branch {
    Branch::default_branch("master", "c0de")
}

pub fn feature_branch() -> Branch {
    Branch::normal("feature/improbability", "d00d")
}

pub fn branch_details(name: &str, ahead: u32, behind: u32) -> BranchDetails {
    BranchDetails::new(name, Some(ahead), Some(behind))
}

pub fn release_tag() -> Tag {
    Tag::new("1.0.0", "c0de")
}

pub fn trillian() -> User {
    User::new("trillian", "Tricia McMillan").with_mail("tricia@hitchhiker.com")
}

pub fn crew() -> Group {
    Group::new("crew").with_members(&["trillian", "dent", "zaphod"])
}

/// Authenticated without any permission.
pub fn dent() -> SharedSubject {
    PermissionSet::new("dent").into_shared()
}

/// May read and push `heartOfGold`.
pub fn pusher() -> SharedSubject {
    PermissionSet::new("trillian")
        .grant("repository:read,pull,push:hog")
        .into_shared()
}

pub fn admin() -> SharedSubject {
    PermissionSet::admin("scmadmin").into_shared()
}

pub fn href<'a>(repr: &'a Representation, rel: &str) -> Option<&'a str> {
    repr.links().get_link_by(rel).map(|link| link.href.as_str())
}

pub fn rels(repr: &Representation) -> Vec<&str> {
    repr.links().rels().collect()
}
