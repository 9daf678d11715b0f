//! scm-hal: HAL representations for a source-control management REST API
//!
//! Turns domain entities (repositories, branches, users, groups, ...) into
//! HAL+JSON documents whose links advertise exactly the actions the current
//! subject is permitted to perform. Plugins extend representations through
//! enrichers registered per resource type.
//!
//! # Core Concepts
//!
//! - **Representations**: attributes plus `_links` and `_embedded`
//! - **Link families**: URL builders rooted at a configurable base URI
//! - **Enrichers**: per-type hooks that append links and embedded items
//! - **Mappers**: entity to representation conversion, gated by permissions
//!
//! # Example
//!
//! ```
//! use scm_hal::{EnricherCatalog, HalApi, PermissionSet, Settings};
//!
//! let settings = Settings {
//!     base_uri: Some("/scm/api/".to_string()),
//!     ..Settings::default()
//! };
//! let api = HalApi::from_settings(&settings, EnricherCatalog::new()).unwrap();
//! let index = api.index(&PermissionSet::new("trillian").into_shared()).unwrap();
//! assert_eq!(index.links().get_link_by("self").unwrap().href, "/scm/api/v2/");
//! ```

pub mod api;
pub mod domain;
pub mod enrich;
mod error;
pub mod hal;
pub mod mapper;
pub mod permission;
mod settings;
pub mod uri;

pub use api::{HalApi, RenderKind};
pub use domain::{NamespaceAndName, Resource, ResourceType};
pub use enrich::{
    EnricherCatalog, EnricherRegistry, EnrichmentContext, FnEnricher, HalEnricher,
    UntargetedPolicy,
};
pub use error::{HalError, HalResult};
pub use hal::{HalAppender, Link, Links, Representation};
pub use permission::{PermissionSet, SharedSubject, Subject};
pub use settings::Settings;
pub use uri::{ResourceLinks, ScmPathInfoStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
