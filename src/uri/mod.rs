//! Link construction: base URI, encoded path building, link families

mod builder;
mod path_info;
mod resource_links;

pub use builder::{encode_path, encode_segment, LinkBuilder};
pub use path_info::ScmPathInfoStore;
pub use resource_links::{
    AuthenticationLinks, AutoCompleteLinks, BranchCollectionLinks, BranchDetailsCollectionLinks,
    BranchDetailsLinks, BranchLinks, ChangesetLinks, ConfigLinks, GroupCollectionLinks,
    GroupLinks, IncomingLinks, IndexLinks, MeLinks, NamespaceLinks, RepositoryCollectionLinks,
    RepositoryLinks, RepositoryPermissionLinks, ResourceLinks, SearchLinks, SourceLinks,
    TagLinks, UserCollectionLinks, UserLinks,
};
