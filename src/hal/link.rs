//! Links and the `_links` section of a representation

use crate::error::{HalError, HalResult};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

fn is_false(value: &bool) -> bool {
    !*value
}

/// A single hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// True when `href` is a URI template such as `.../paths/{revision}`
    #[serde(default, skip_serializing_if = "is_false")]
    pub templated: bool,
}

impl Link {
    /// Create a link; `templated` is derived from the presence of `{...}`.
    pub fn new(href: impl Into<String>) -> Self {
        let href = href.into();
        let templated = is_template(&href);
        Self {
            href,
            name: None,
            templated,
        }
    }

    /// Create a named link, as used inside link arrays.
    pub fn named(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(href).with_name(name)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

fn is_template(href: &str) -> bool {
    match (href.find('{'), href.rfind('}')) {
        (Some(open), Some(close)) => open < close,
        _ => false,
    }
}

/// The value stored under one link relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkEntry {
    Single(Link),
    Array(Vec<Link>),
}

impl LinkEntry {
    fn links(&self) -> Vec<&Link> {
        match self {
            Self::Single(link) => vec![link],
            Self::Array(links) => links.iter().collect(),
        }
    }
}

/// Ordered link relations of one representation.
///
/// Relation names are unique. Re-appending an identical single link is a
/// no-op; any other reuse of a relation name is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    entries: Vec<(String, LinkEntry)>,
}

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, rel: &str) -> Option<usize> {
        self.entries.iter().position(|(r, _)| r == rel)
    }

    /// Add a single link under `rel`.
    pub fn insert_single(&mut self, rel: &str, link: Link) -> HalResult<()> {
        match self.position(rel) {
            None => {
                self.entries.push((rel.to_string(), LinkEntry::Single(link)));
                Ok(())
            }
            Some(idx) => match &self.entries[idx].1 {
                LinkEntry::Single(existing) if *existing == link => Ok(()),
                LinkEntry::Single(existing) => Err(HalError::DuplicateLink {
                    rel: rel.to_string(),
                    existing: existing.href.clone(),
                }),
                LinkEntry::Array(_) => Err(HalError::DuplicateLink {
                    rel: rel.to_string(),
                    existing: "<link array>".to_string(),
                }),
            },
        }
    }

    /// Add an array of links under `rel`. The relation must be unused.
    pub fn insert_array(&mut self, rel: &str, links: Vec<Link>) -> HalResult<()> {
        if let Some(idx) = self.position(rel) {
            let existing = match &self.entries[idx].1 {
                LinkEntry::Single(link) => link.href.clone(),
                LinkEntry::Array(_) => "<link array>".to_string(),
            };
            return Err(HalError::DuplicateLink {
                rel: rel.to_string(),
                existing,
            });
        }
        self.entries.push((rel.to_string(), LinkEntry::Array(links)));
        Ok(())
    }

    /// First link stored under `rel`.
    pub fn get_link_by(&self, rel: &str) -> Option<&Link> {
        self.get_links_by(rel).into_iter().next()
    }

    /// All links stored under `rel`, empty when the relation is absent.
    pub fn get_links_by(&self, rel: &str) -> Vec<&Link> {
        self.position(rel)
            .map(|idx| self.entries[idx].1.links())
            .unwrap_or_default()
    }

    pub fn contains(&self, rel: &str) -> bool {
        self.position(rel).is_some()
    }

    /// Relation names in insertion order.
    pub fn rels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(rel, _)| rel.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (rel, entry) in &self.entries {
            map.serialize_entry(rel, entry)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_links_are_flagged() {
        assert!(Link::new("/v2/repositories/a/b/paths/{revision}").templated);
        assert!(!Link::new("/v2/repositories/a/b").templated);
    }

    #[test]
    fn identical_single_link_is_idempotent() {
        let mut links = Links::new();
        links.insert_single("self", Link::new("/v2/users/ich")).unwrap();
        links.insert_single("self", Link::new("/v2/users/ich")).unwrap();
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn conflicting_single_link_is_rejected() {
        let mut links = Links::new();
        links.insert_single("self", Link::new("/v2/users/ich")).unwrap();
        let err = links
            .insert_single("self", Link::new("/v2/users/du"))
            .unwrap_err();
        assert!(matches!(err, HalError::DuplicateLink { ref existing, .. } if existing == "/v2/users/ich"));
        assert_eq!(links.get_link_by("self").unwrap().href, "/v2/users/ich");
    }

    #[test]
    fn array_under_used_rel_is_rejected() {
        let mut links = Links::new();
        links.insert_single("protocol", Link::new("http://scm")).unwrap();
        assert!(links
            .insert_array("protocol", vec![Link::named("http", "http://scm")])
            .is_err());
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut links = Links::new();
        links.insert_single("self", Link::new("/a")).unwrap();
        links
            .insert_array(
                "protocol",
                vec![Link::named("http", "http://scm"), Link::named("ssh", "ssh://scm")],
            )
            .unwrap();
        links.insert_single("delete", Link::new("/a")).unwrap();

        let json = serde_json::to_string(&links).unwrap();
        assert_eq!(
            json,
            r#"{"self":{"href":"/a"},"protocol":[{"href":"http://scm","name":"http"},{"href":"ssh://scm","name":"ssh"}],"delete":{"href":"/a"}}"#
        );
    }

    #[test]
    fn get_links_by_missing_rel_is_empty() {
        let links = Links::new();
        assert!(links.get_links_by("protocol").is_empty());
        assert!(links.get_link_by("protocol").is_none());
    }
}
