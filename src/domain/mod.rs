//! Domain objects handed to the mappers by the request layer

mod config;
mod repository;
pub mod types;
mod user;

pub use config::{AnonymousMode, Index, PageResult, ScmConfiguration};
pub use repository::{
    Branch, BranchDetails, HealthCheckFailure, Namespace, NamespaceAndName, Repository, Tag,
};
pub use types::{Resource, ResourceType};
pub use user::{Group, Me, User};
