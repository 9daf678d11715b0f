//! Link enrichment: strategies, their registry and per-call context
//!
//! Mappers emit an entity's own fields and structural links, then hand the
//! representation to every enricher registered for the entity's type (or
//! one of its supertypes) through a [`HalAppender`](crate::hal::HalAppender).

mod catalog;
mod context;
mod enricher;
mod registry;

pub use catalog::{CatalogReport, ConfigurationLinkEnricher, EnricherCatalog, UntargetedPolicy};
pub use context::EnrichmentContext;
pub use enricher::{FnEnricher, HalEnricher};
pub use registry::EnricherRegistry;
