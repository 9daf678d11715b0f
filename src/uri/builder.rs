//! URI construction from the base URI and per-family path templates

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside one path segment. `/` is escaped so that a
/// branch like `feature/x` stays a single segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Characters escaped in query keys and values.
const QUERY: &AsciiSet = &SEGMENT.add(b'&').add(b'=').add(b'+');

/// Escape one path parameter, including `/`.
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// Escape a file path, keeping its `/` separators.
pub fn encode_path(value: &str) -> String {
    value
        .split('/')
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("/")
}

/// Builds one href below the base URI.
///
/// Literal segments are taken as-is, parameters are percent-encoded, and
/// template variables (`{revision}`) are emitted unencoded so the link can
/// be marked as templated.
///
/// ```
/// use scm_hal::uri::LinkBuilder;
///
/// let href = LinkBuilder::new("/scm/api/")
///     .segment("v2/repositories")
///     .param("hitchhiker")
///     .param("42Puzzle")
///     .segment("branches")
///     .param("feature/42")
///     .build();
/// assert_eq!(href, "/scm/api/v2/repositories/hitchhiker/42Puzzle/branches/feature%2F42");
/// ```
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base: String,
    parts: Vec<String>,
    trailing_slash: bool,
    query: Vec<(String, String)>,
}

impl LinkBuilder {
    /// Start below `base`, which must end in `/`.
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
            parts: Vec::new(),
            trailing_slash: false,
            query: Vec::new(),
        }
    }

    /// Literal path text, e.g. `v2/repositories`.
    pub fn segment(mut self, literal: &str) -> Self {
        let literal = literal.trim_matches('/');
        if !literal.is_empty() {
            self.parts.push(literal.to_string());
        }
        self
    }

    /// A single encoded path parameter.
    pub fn param(mut self, value: &str) -> Self {
        self.parts.push(encode_segment(value));
        self
    }

    /// An encoded file path that may span several segments.
    pub fn path(mut self, value: &str) -> Self {
        let value = value.trim_start_matches('/');
        if !value.is_empty() {
            self.parts.push(encode_path(value));
        }
        self
    }

    /// An unexpanded URI template variable.
    pub fn template(mut self, variable: &str) -> Self {
        self.parts.push(format!("{{{}}}", variable));
        self
    }

    /// End the path with `/`, as collection resources do.
    pub fn collection(mut self) -> Self {
        self.trailing_slash = true;
        self
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn build(self) -> String {
        let mut href = self.base;
        href.push_str(&self.parts.join("/"));
        if self.trailing_slash && !href.ends_with('/') {
            href.push('/');
        }
        for (i, (key, value)) in self.query.iter().enumerate() {
            href.push(if i == 0 { '?' } else { '&' });
            href.push_str(&utf8_percent_encode(key, QUERY).to_string());
            href.push('=');
            href.push_str(&utf8_percent_encode(value, QUERY).to_string());
        }
        href
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_names_with_slash_stay_one_segment() {
        assert_eq!(encode_segment("feature/hitchhiker42"), "feature%2Fhitchhiker42");
    }

    #[test]
    fn paths_keep_separators_but_escape_specials() {
        assert_eq!(
            encode_path("some dir/with\\back\nslash.txt"),
            "some%20dir/with%5Cback%0Aslash.txt"
        );
    }

    #[test]
    fn collection_links_end_with_slash() {
        let href = LinkBuilder::new("http://example.com/base/")
            .segment("v2/repositories/")
            .collection()
            .build();
        assert_eq!(href, "http://example.com/base/v2/repositories/");
    }

    #[test]
    fn root_collection_does_not_double_slash() {
        let href = LinkBuilder::new("/scm/api/").segment("v2").collection().build();
        assert_eq!(href, "/scm/api/v2/");
    }

    #[test]
    fn templates_are_not_encoded() {
        let href = LinkBuilder::new("/api/")
            .segment("v2/repositories")
            .param("space")
            .param("repo")
            .segment("paths")
            .template("revision")
            .build();
        assert_eq!(href, "/api/v2/repositories/space/repo/paths/{revision}");
    }

    #[test]
    fn query_parameters_are_appended_in_order() {
        let href = LinkBuilder::new("/api/")
            .segment("v2/users")
            .collection()
            .query("page", 2)
            .query("pageSize", 10)
            .build();
        assert_eq!(href, "/api/v2/users/?page=2&pageSize=10");
    }

    #[test]
    fn query_values_are_escaped() {
        let href = LinkBuilder::new("/api/")
            .segment("v2/users")
            .collection()
            .query("q", "a&b c")
            .build();
        assert_eq!(href, "/api/v2/users/?q=a%26b%20c");
    }
}
