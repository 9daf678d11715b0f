//! Paging for collection representations

use crate::domain::PageResult;
use crate::error::HalResult;
use crate::hal::{HalAppender, Representation, RepresentationAppender};
use crate::uri::LinkBuilder;
use serde::{Deserialize, Serialize};

/// Requested page; `page` is zero based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, 10)
    }
}

fn page_link(collection_href: &str, page: usize, page_size: usize) -> String {
    LinkBuilder::new(collection_href)
        .query("page", page)
        .query("pageSize", page_size)
        .build()
}

/// Wrap already mapped items into a paged collection.
///
/// `collection_href` is the collection's self link without query. Adds
/// `page` and `pageTotal`, the `self`/`first`/`prev`/`next`/`last` links,
/// `create` when given, and embeds `items` under `embedded_name`.
pub fn paged_collection<T>(
    collection_href: &str,
    request: PageRequest,
    result: &PageResult<T>,
    embedded_name: &str,
    items: Vec<Representation>,
    create_href: Option<String>,
) -> HalResult<Representation> {
    let page_total = result.page_total(request.page_size);
    let mut repr = Representation::new();
    repr.set_attribute("page", request.page)?;
    repr.set_attribute("pageTotal", page_total)?;

    let mut appender = RepresentationAppender::new(&mut repr);
    appender.append_link("self", &page_link(collection_href, request.page, request.page_size))?;
    appender.append_link("first", &page_link(collection_href, 0, request.page_size))?;
    if request.page > 0 {
        appender.append_link(
            "prev",
            &page_link(collection_href, request.page - 1, request.page_size),
        )?;
    }
    if let Some(next) = request.page.checked_add(1).filter(|next| *next < page_total) {
        appender.append_link("next", &page_link(collection_href, next, request.page_size))?;
    }
    appender.append_link(
        "last",
        &page_link(collection_href, page_total - 1, request.page_size),
    )?;
    if let Some(create) = create_href {
        appender.append_link("create", &create)?;
    }
    appender.append_embedded_list(embedded_name, items)?;
    Ok(repr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::test_support::href;

    const USERS: &str = "/api/v2/users/";

    fn page(page: usize, overall: usize) -> Representation {
        let result = PageResult::new(vec![(); 0], overall);
        paged_collection(USERS, PageRequest::new(page, 10), &result, "users", vec![], None).unwrap()
    }

    #[test]
    fn first_page_has_no_prev() {
        let repr = page(0, 25);
        assert_eq!(href(&repr, "self"), Some("/api/v2/users/?page=0&pageSize=10"));
        assert_eq!(href(&repr, "first"), Some("/api/v2/users/?page=0&pageSize=10"));
        assert!(href(&repr, "prev").is_none());
        assert_eq!(href(&repr, "next"), Some("/api/v2/users/?page=1&pageSize=10"));
        assert_eq!(href(&repr, "last"), Some("/api/v2/users/?page=2&pageSize=10"));
        assert_eq!(*repr.attribute("pageTotal").unwrap(), 3);
    }

    #[test]
    fn last_page_has_no_next() {
        let repr = page(2, 25);
        assert_eq!(href(&repr, "prev"), Some("/api/v2/users/?page=1&pageSize=10"));
        assert!(href(&repr, "next").is_none());
        assert_eq!(*repr.attribute("page").unwrap(), 2);
    }

    #[test]
    fn empty_result_is_a_single_page_with_empty_list() {
        let repr = page(0, 0);
        assert_eq!(*repr.attribute("pageTotal").unwrap(), 1);
        assert!(href(&repr, "next").is_none());
        assert!(repr.embedded().contains("users"));
        assert!(repr.embedded().items("users").is_empty());
    }

    #[test]
    fn page_beyond_the_end_has_no_next() {
        let repr = page(usize::MAX, 25);
        assert!(href(&repr, "next").is_none());
        assert_eq!(href(&repr, "last"), Some("/api/v2/users/?page=2&pageSize=10"));
    }

    #[test]
    fn create_link_is_optional() {
        let result = PageResult::new(Vec::<()>::new(), 0);
        let repr = paged_collection(
            USERS,
            PageRequest::default(),
            &result,
            "users",
            vec![],
            Some(USERS.to_string()),
        )
        .unwrap();
        assert_eq!(href(&repr, "create"), Some(USERS));
    }
}
