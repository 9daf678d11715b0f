//! HAL document model
//!
//! Representations carry plain attributes plus `_links` and `_embedded`
//! sections. Relation and embedded names are unique and keep insertion
//! order.

mod appender;
mod link;
mod representation;

pub use appender::{HalAppender, LinkArrayBuilder, RepresentationAppender};
pub use link::{Link, LinkEntry, Links};
pub use representation::{Embedded, EmbeddedEntry, Representation};
