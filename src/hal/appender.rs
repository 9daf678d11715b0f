//! Appender: the write sink enrichers use to extend a representation
//!
//! An appender is bound to exactly one representation for the duration of
//! one enrichment pass. Link arrays are staged in a builder and become
//! visible only when `build()` commits them.

use super::link::{Link, Links};
use super::representation::Representation;
use crate::error::HalResult;

/// The interface through which enrichers add links and embedded resources.
pub trait HalAppender {
    /// Add a single link under `rel`.
    ///
    /// Appending the identical href again is a no-op; a different href
    /// under an existing `rel` fails with `HalError::DuplicateLink`.
    fn append_link(&mut self, rel: &str, href: &str) -> HalResult<()>;

    /// Start an array of named links under `rel`.
    fn link_array_builder(&mut self, rel: &str) -> LinkArrayBuilder<'_>;

    /// Embed one nested representation under `rel`.
    fn append_embedded(&mut self, rel: &str, item: Representation) -> HalResult<()>;

    /// Embed a list of nested representations under `rel`.
    fn append_embedded_list(&mut self, rel: &str, items: Vec<Representation>) -> HalResult<()>;
}

/// Accumulates `(name, href)` pairs for one link relation.
#[must_use = "links are only written when build() is called"]
pub struct LinkArrayBuilder<'a> {
    target: &'a mut Links,
    rel: String,
    links: Vec<Link>,
}

impl<'a> LinkArrayBuilder<'a> {
    fn new(target: &'a mut Links, rel: &str) -> Self {
        Self {
            target,
            rel: rel.to_string(),
            links: Vec::new(),
        }
    }

    pub fn append(mut self, name: &str, href: &str) -> Self {
        self.links.push(Link::named(name, href));
        self
    }

    /// Number of staged links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Commit the staged links to the representation.
    pub fn build(self) -> HalResult<()> {
        self.target.insert_array(&self.rel, self.links)
    }
}

/// Appender writing straight into a [`Representation`].
pub struct RepresentationAppender<'r> {
    representation: &'r mut Representation,
}

impl<'r> RepresentationAppender<'r> {
    pub fn new(representation: &'r mut Representation) -> Self {
        Self { representation }
    }
}

impl HalAppender for RepresentationAppender<'_> {
    fn append_link(&mut self, rel: &str, href: &str) -> HalResult<()> {
        self.representation
            .links_mut()
            .insert_single(rel, Link::new(href))
    }

    fn link_array_builder(&mut self, rel: &str) -> LinkArrayBuilder<'_> {
        LinkArrayBuilder::new(self.representation.links_mut(), rel)
    }

    fn append_embedded(&mut self, rel: &str, item: Representation) -> HalResult<()> {
        self.representation.embedded_mut().insert_single(rel, item)
    }

    fn append_embedded_list(&mut self, rel: &str, items: Vec<Representation>) -> HalResult<()> {
        self.representation.embedded_mut().insert_list(rel, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HalError;

    #[test]
    fn append_link_writes_to_bound_representation() {
        let mut repr = Representation::new();
        let mut appender = RepresentationAppender::new(&mut repr);
        appender.append_link("id", "http://1").unwrap();
        assert_eq!(repr.links().get_link_by("id").unwrap().href, "http://1");
    }

    #[test]
    fn same_href_twice_is_accepted_once() {
        let mut repr = Representation::new();
        let mut appender = RepresentationAppender::new(&mut repr);
        appender.append_link("sources", "/v2/sources/").unwrap();
        appender.append_link("sources", "/v2/sources/").unwrap();
        assert_eq!(repr.links().get_links_by("sources").len(), 1);
    }

    #[test]
    fn conflicting_href_is_rejected() {
        let mut repr = Representation::new();
        let mut appender = RepresentationAppender::new(&mut repr);
        appender.append_link("sources", "/v2/sources/").unwrap();
        let err = appender.append_link("sources", "/v2/other/").unwrap_err();
        assert!(matches!(err, HalError::DuplicateLink { .. }));
        assert_eq!(repr.links().get_link_by("sources").unwrap().href, "/v2/sources/");
    }

    #[test]
    fn array_is_invisible_until_built() {
        let mut repr = Representation::new();
        let mut appender = RepresentationAppender::new(&mut repr);
        let builder = appender
            .link_array_builder("protocol")
            .append("http", "http://scm/repo")
            .append("ssh", "ssh://scm/repo");
        assert_eq!(builder.len(), 2);
        drop(builder);
        assert!(!repr.links().contains("protocol"));
    }

    #[test]
    fn built_array_keeps_order() {
        let mut repr = Representation::new();
        let mut appender = RepresentationAppender::new(&mut repr);
        appender
            .link_array_builder("protocol")
            .append("http", "http://scm/repo")
            .append("ssh", "ssh://scm/repo")
            .build()
            .unwrap();

        let names: Vec<_> = repr
            .links()
            .get_links_by("protocol")
            .iter()
            .map(|l| l.name.clone().unwrap())
            .collect();
        assert_eq!(names, vec!["http", "ssh"]);
    }

    #[test]
    fn embedded_items_are_appended() {
        let mut repr = Representation::new();
        let mut appender = RepresentationAppender::new(&mut repr);
        let mut member = Representation::new();
        member.set_attribute("name", "trillian").unwrap();
        appender.append_embedded_list("members", vec![member]).unwrap();
        appender.append_embedded("feedback", Representation::new()).unwrap();

        assert_eq!(repr.embedded().items("members").len(), 1);
        assert!(repr.embedded().contains("feedback"));
    }
}
