//! Link families for every resource exposed by the v2 API
//!
//! Each accessor on [`ResourceLinks`] reads the base URI once and fails
//! with `BaseUriNotConfigured` when it has not been set. The returned
//! family renders hrefs infallibly.

use super::builder::LinkBuilder;
use super::path_info::ScmPathInfoStore;
use crate::error::HalResult;
use std::sync::Arc;

/// Declares a link family holding the resolved base URI.
macro_rules! link_family {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            base: String,
        }

        impl $name {
            fn new(base: &str) -> Self {
                Self {
                    base: base.to_string(),
                }
            }

            fn builder(&self) -> LinkBuilder {
                LinkBuilder::new(&self.base)
            }
        }
    };
}

/// Entry point to all link families.
#[derive(Debug, Clone)]
pub struct ResourceLinks {
    path_info: Arc<ScmPathInfoStore>,
}

impl ResourceLinks {
    pub fn new(path_info: Arc<ScmPathInfoStore>) -> Self {
        Self { path_info }
    }

    pub fn path_info(&self) -> &ScmPathInfoStore {
        &self.path_info
    }

    pub fn user(&self) -> HalResult<UserLinks> {
        Ok(UserLinks::new(self.path_info.get()?))
    }

    pub fn user_collection(&self) -> HalResult<UserCollectionLinks> {
        Ok(UserCollectionLinks::new(self.path_info.get()?))
    }

    pub fn me(&self) -> HalResult<MeLinks> {
        Ok(MeLinks::new(self.path_info.get()?))
    }

    pub fn group(&self) -> HalResult<GroupLinks> {
        Ok(GroupLinks::new(self.path_info.get()?))
    }

    pub fn group_collection(&self) -> HalResult<GroupCollectionLinks> {
        Ok(GroupCollectionLinks::new(self.path_info.get()?))
    }

    pub fn index(&self) -> HalResult<IndexLinks> {
        Ok(IndexLinks::new(self.path_info.get()?))
    }

    pub fn config(&self) -> HalResult<ConfigLinks> {
        Ok(ConfigLinks::new(self.path_info.get()?))
    }

    pub fn auth(&self) -> HalResult<AuthenticationLinks> {
        Ok(AuthenticationLinks::new(self.path_info.get()?))
    }

    pub fn autocomplete(&self) -> HalResult<AutoCompleteLinks> {
        Ok(AutoCompleteLinks::new(self.path_info.get()?))
    }

    pub fn repository(&self) -> HalResult<RepositoryLinks> {
        Ok(RepositoryLinks::new(self.path_info.get()?))
    }

    pub fn repository_collection(&self) -> HalResult<RepositoryCollectionLinks> {
        Ok(RepositoryCollectionLinks::new(self.path_info.get()?))
    }

    pub fn repository_permission(&self) -> HalResult<RepositoryPermissionLinks> {
        Ok(RepositoryPermissionLinks::new(self.path_info.get()?))
    }

    pub fn namespace(&self) -> HalResult<NamespaceLinks> {
        Ok(NamespaceLinks::new(self.path_info.get()?))
    }

    pub fn branch(&self) -> HalResult<BranchLinks> {
        Ok(BranchLinks::new(self.path_info.get()?))
    }

    pub fn branch_collection(&self) -> HalResult<BranchCollectionLinks> {
        Ok(BranchCollectionLinks::new(self.path_info.get()?))
    }

    pub fn branch_details(&self) -> HalResult<BranchDetailsLinks> {
        Ok(BranchDetailsLinks::new(self.path_info.get()?))
    }

    pub fn branch_details_collection(&self) -> HalResult<BranchDetailsCollectionLinks> {
        Ok(BranchDetailsCollectionLinks::new(self.path_info.get()?))
    }

    pub fn tag(&self) -> HalResult<TagLinks> {
        Ok(TagLinks::new(self.path_info.get()?))
    }

    pub fn changeset(&self) -> HalResult<ChangesetLinks> {
        Ok(ChangesetLinks::new(self.path_info.get()?))
    }

    pub fn source(&self) -> HalResult<SourceLinks> {
        Ok(SourceLinks::new(self.path_info.get()?))
    }

    pub fn incoming(&self) -> HalResult<IncomingLinks> {
        Ok(IncomingLinks::new(self.path_info.get()?))
    }

    pub fn search(&self) -> HalResult<SearchLinks> {
        Ok(SearchLinks::new(self.path_info.get()?))
    }

    pub fn administration(&self) -> HalResult<AdministrationLinks> {
        Ok(AdministrationLinks::new(self.path_info.get()?))
    }
}

// ---------------------------------------------------------------------------
// Users, groups, me
// ---------------------------------------------------------------------------

link_family!(UserLinks);

impl UserLinks {
    fn of(&self, name: &str) -> LinkBuilder {
        self.builder().segment("v2/users").param(name)
    }

    pub fn self_link(&self, name: &str) -> String {
        self.of(name).build()
    }

    pub fn delete(&self, name: &str) -> String {
        self.self_link(name)
    }

    pub fn update(&self, name: &str) -> String {
        self.self_link(name)
    }

    pub fn password_change(&self, name: &str) -> String {
        self.of(name).segment("password").build()
    }

    pub fn to_external(&self, name: &str) -> String {
        self.of(name).segment("convert-to-external").build()
    }

    pub fn to_internal(&self, name: &str) -> String {
        self.of(name).segment("convert-to-internal").build()
    }

    pub fn permission_overview(&self, name: &str) -> String {
        self.of(name).segment("permissionOverview").build()
    }

    pub fn permissions(&self, name: &str) -> String {
        self.of(name).segment("permissions").collection().build()
    }

    pub fn api_keys(&self, name: &str) -> String {
        self.of(name).segment("api_keys").build()
    }
}

link_family!(UserCollectionLinks);

impl UserCollectionLinks {
    pub fn self_link(&self) -> String {
        self.builder().segment("v2/users").collection().build()
    }

    pub fn create(&self) -> String {
        self.self_link()
    }
}

link_family!(
    /// Links of the authenticated user's own resource.
    MeLinks
);

impl MeLinks {
    pub fn self_link(&self) -> String {
        self.builder().segment("v2/me").collection().build()
    }

    pub fn password_change(&self) -> String {
        self.builder().segment("v2/me/password").build()
    }

    pub fn api_keys(&self) -> String {
        self.builder().segment("v2/me/api_keys").build()
    }
}

link_family!(GroupLinks);

impl GroupLinks {
    fn of(&self, name: &str) -> LinkBuilder {
        self.builder().segment("v2/groups").param(name)
    }

    pub fn self_link(&self, name: &str) -> String {
        self.of(name).build()
    }

    pub fn delete(&self, name: &str) -> String {
        self.self_link(name)
    }

    pub fn update(&self, name: &str) -> String {
        self.self_link(name)
    }

    pub fn permissions(&self, name: &str) -> String {
        self.of(name).segment("permissions").collection().build()
    }
}

link_family!(GroupCollectionLinks);

impl GroupCollectionLinks {
    pub fn self_link(&self) -> String {
        self.builder().segment("v2/groups").collection().build()
    }

    pub fn create(&self) -> String {
        self.self_link()
    }
}

// ---------------------------------------------------------------------------
// Index, configuration, authentication, autocomplete
// ---------------------------------------------------------------------------

link_family!(IndexLinks);

impl IndexLinks {
    pub fn self_link(&self) -> String {
        self.builder().segment("v2").collection().build()
    }
}

link_family!(ConfigLinks);

impl ConfigLinks {
    pub fn self_link(&self) -> String {
        self.builder().segment("v2/config").build()
    }

    pub fn update(&self) -> String {
        self.self_link()
    }

    /// Link to a named sub-configuration, e.g. a plugin's settings.
    pub fn named(&self, name: &str) -> String {
        self.builder().segment("v2/config").param(name).build()
    }
}

link_family!(
    /// Server-wide entry points of the index: permissions, repository
    /// types, roles and verbs, namespace strategies, alerts and cache
    /// invalidation.
    AdministrationLinks
);

impl AdministrationLinks {
    pub fn permissions(&self) -> String {
        self.builder().segment("v2/permissions").collection().build()
    }

    pub fn repository_types(&self) -> String {
        self.builder().segment("v2/repositoryTypes").collection().build()
    }

    pub fn repository_roles(&self) -> String {
        self.builder().segment("v2/repositoryRoles").collection().build()
    }

    pub fn repository_verbs(&self) -> String {
        self.builder().segment("v2/repositoryVerbs").collection().build()
    }

    pub fn namespace_strategies(&self) -> String {
        self.builder().segment("v2/namespaceStrategies").collection().build()
    }

    /// Templated link to the log of one repository import.
    pub fn import_log(&self) -> String {
        self.builder()
            .segment("v2/repositories/import")
            .template("logId")
            .segment("log")
            .build()
    }

    pub fn alerts(&self) -> String {
        self.builder().segment("v2/alerts").build()
    }

    pub fn update_info(&self) -> String {
        self.builder().segment("v2/updateInfo").build()
    }

    pub fn invalidate_caches(&self) -> String {
        self.builder().segment("v2/invalidations/caches").build()
    }

    pub fn invalidate_search_index(&self) -> String {
        self.builder().segment("v2/invalidations/search-index").build()
    }
}

link_family!(AuthenticationLinks);

impl AuthenticationLinks {
    pub fn login(&self) -> String {
        self.builder().segment("v2/auth/access_token").build()
    }

    pub fn logout(&self) -> String {
        self.login()
    }
}

link_family!(AutoCompleteLinks);

impl AutoCompleteLinks {
    pub fn users(&self) -> String {
        self.builder().segment("v2/autocomplete/users").build()
    }

    pub fn groups(&self) -> String {
        self.builder().segment("v2/autocomplete/groups").build()
    }

    pub fn namespaces(&self) -> String {
        self.builder().segment("v2/autocomplete/namespaces").build()
    }
}

// ---------------------------------------------------------------------------
// Repositories and namespaces
// ---------------------------------------------------------------------------

/// Path prefix of one repository: `v2/repositories/{namespace}/{name}`.
fn repository_path(builder: LinkBuilder, namespace: &str, name: &str) -> LinkBuilder {
    builder
        .segment("v2/repositories")
        .param(namespace)
        .param(name)
}

link_family!(RepositoryLinks);

impl RepositoryLinks {
    fn of(&self, namespace: &str, name: &str) -> LinkBuilder {
        repository_path(self.builder(), namespace, name)
    }

    pub fn self_link(&self, namespace: &str, name: &str) -> String {
        self.of(namespace, name).build()
    }

    pub fn delete(&self, namespace: &str, name: &str) -> String {
        self.self_link(namespace, name)
    }

    pub fn update(&self, namespace: &str, name: &str) -> String {
        self.self_link(namespace, name)
    }

    pub fn rename(&self, namespace: &str, name: &str) -> String {
        self.of(namespace, name).segment("rename").build()
    }

    pub fn archive(&self, namespace: &str, name: &str) -> String {
        self.of(namespace, name).segment("archive").build()
    }

    pub fn unarchive(&self, namespace: &str, name: &str) -> String {
        self.of(namespace, name).segment("unarchive").build()
    }

    pub fn run_health_check(&self, namespace: &str, name: &str) -> String {
        self.of(namespace, name).segment("runHealthCheck").build()
    }

    pub fn reindex(&self, namespace: &str, name: &str) -> String {
        self.of(namespace, name).segment("reindex").build()
    }

    pub fn export(&self, namespace: &str, name: &str, repository_type: &str) -> String {
        self.of(namespace, name)
            .segment("export")
            .param(repository_type)
            .build()
    }

    pub fn full_export(&self, namespace: &str, name: &str) -> String {
        self.of(namespace, name).segment("export/full").build()
    }

    pub fn export_info(&self, namespace: &str, name: &str) -> String {
        self.of(namespace, name).segment("export/info").build()
    }

    /// Templated link listing all file paths of one revision.
    pub fn paths(&self, namespace: &str, name: &str) -> String {
        self.of(namespace, name)
            .segment("paths")
            .template("revision")
            .build()
    }
}

link_family!(RepositoryCollectionLinks);

impl RepositoryCollectionLinks {
    pub fn self_link(&self) -> String {
        self.builder().segment("v2/repositories").collection().build()
    }

    pub fn create(&self) -> String {
        self.self_link()
    }
}

link_family!(RepositoryPermissionLinks);

impl RepositoryPermissionLinks {
    pub fn all(&self, namespace: &str, name: &str) -> String {
        repository_path(self.builder(), namespace, name)
            .segment("permissions")
            .collection()
            .build()
    }
}

link_family!(NamespaceLinks);

impl NamespaceLinks {
    pub fn self_link(&self, namespace: &str) -> String {
        self.builder().segment("v2/namespaces").param(namespace).build()
    }

    pub fn collection(&self) -> String {
        self.builder().segment("v2/namespaces").collection().build()
    }

    /// Repositories of one namespace.
    pub fn repositories(&self, namespace: &str) -> String {
        self.builder()
            .segment("v2/repositories")
            .param(namespace)
            .collection()
            .build()
    }

    pub fn permissions(&self, namespace: &str) -> String {
        self.builder()
            .segment("v2/namespaces")
            .param(namespace)
            .segment("permissions")
            .build()
    }
}

// ---------------------------------------------------------------------------
// Branches, tags, changesets
// ---------------------------------------------------------------------------

link_family!(BranchLinks);

impl BranchLinks {
    fn of(&self, namespace: &str, name: &str, branch: &str) -> LinkBuilder {
        repository_path(self.builder(), namespace, name)
            .segment("branches")
            .param(branch)
    }

    pub fn self_link(&self, namespace: &str, name: &str, branch: &str) -> String {
        self.of(namespace, name, branch).build()
    }

    pub fn history(&self, namespace: &str, name: &str, branch: &str) -> String {
        self.of(namespace, name, branch)
            .segment("changesets")
            .collection()
            .build()
    }

    pub fn create(&self, namespace: &str, name: &str) -> String {
        repository_path(self.builder(), namespace, name)
            .segment("branches")
            .collection()
            .build()
    }

    pub fn delete(&self, namespace: &str, name: &str, branch: &str) -> String {
        self.self_link(namespace, name, branch)
    }
}

link_family!(BranchCollectionLinks);

impl BranchCollectionLinks {
    pub fn self_link(&self, namespace: &str, name: &str) -> String {
        repository_path(self.builder(), namespace, name)
            .segment("branches")
            .collection()
            .build()
    }
}

link_family!(BranchDetailsLinks);

impl BranchDetailsLinks {
    pub fn self_link(&self, namespace: &str, name: &str, branch: &str) -> String {
        repository_path(self.builder(), namespace, name)
            .segment("branch-details")
            .param(branch)
            .build()
    }
}

link_family!(BranchDetailsCollectionLinks);

impl BranchDetailsCollectionLinks {
    pub fn self_link(&self, namespace: &str, name: &str) -> String {
        repository_path(self.builder(), namespace, name)
            .segment("branch-details")
            .collection()
            .build()
    }
}

link_family!(TagLinks);

impl TagLinks {
    fn tags(&self, namespace: &str, name: &str) -> LinkBuilder {
        repository_path(self.builder(), namespace, name).segment("tags")
    }

    pub fn self_link(&self, namespace: &str, name: &str, tag: &str) -> String {
        self.tags(namespace, name).param(tag).build()
    }

    pub fn delete(&self, namespace: &str, name: &str, tag: &str) -> String {
        self.self_link(namespace, name, tag)
    }

    pub fn all(&self, namespace: &str, name: &str) -> String {
        self.tags(namespace, name).collection().build()
    }

    pub fn create(&self, namespace: &str, name: &str) -> String {
        self.all(namespace, name)
    }
}

link_family!(ChangesetLinks);

impl ChangesetLinks {
    pub fn all(&self, namespace: &str, name: &str) -> String {
        repository_path(self.builder(), namespace, name)
            .segment("changesets")
            .collection()
            .build()
    }

    pub fn self_link(&self, namespace: &str, name: &str, revision: &str) -> String {
        repository_path(self.builder(), namespace, name)
            .segment("changesets")
            .param(revision)
            .build()
    }
}

link_family!(
    /// Source browsing and raw file content.
    SourceLinks
);

impl SourceLinks {
    fn sources(&self, namespace: &str, name: &str) -> LinkBuilder {
        repository_path(self.builder(), namespace, name).segment("sources")
    }

    fn contents(&self, namespace: &str, name: &str) -> LinkBuilder {
        repository_path(self.builder(), namespace, name).segment("content")
    }

    pub fn self_without_revision(&self, namespace: &str, name: &str) -> String {
        self.sources(namespace, name).collection().build()
    }

    pub fn self_link(&self, namespace: &str, name: &str, revision: &str) -> String {
        self.sources(namespace, name)
            .param(revision)
            .collection()
            .build()
    }

    pub fn source_with_path(&self, namespace: &str, name: &str, revision: &str, path: &str) -> String {
        self.sources(namespace, name).param(revision).path(path).build()
    }

    pub fn content_root(&self, namespace: &str, name: &str) -> String {
        self.contents(namespace, name).collection().build()
    }

    pub fn content(&self, namespace: &str, name: &str, revision: &str, path: &str) -> String {
        self.contents(namespace, name).param(revision).path(path).build()
    }
}

link_family!(
    /// Changesets and diffs between two branches of one repository.
    IncomingLinks
);

impl IncomingLinks {
    fn between(&self, namespace: &str, name: &str) -> LinkBuilder {
        repository_path(self.builder(), namespace, name)
            .segment("incoming")
            .template("source")
            .template("target")
    }

    pub fn changesets(&self, namespace: &str, name: &str) -> String {
        self.between(namespace, name)
            .segment("changesets")
            .collection()
            .build()
    }

    pub fn diff(&self, namespace: &str, name: &str) -> String {
        self.between(namespace, name).segment("diff").build()
    }

    pub fn diff_parsed(&self, namespace: &str, name: &str) -> String {
        self.between(namespace, name).segment("diff/parsed").build()
    }
}

link_family!(SearchLinks);

impl SearchLinks {
    pub fn query(&self, search_type: &str) -> String {
        self.builder()
            .segment("v2/search/query")
            .param(search_type)
            .build()
    }

    pub fn query_for_repository(&self, namespace: &str, name: &str, search_type: &str) -> String {
        self.builder()
            .segment("v2/search/query")
            .param(namespace)
            .param(name)
            .param(search_type)
            .build()
    }

    pub fn searchable_types(&self) -> String {
        self.builder().segment("v2/search/searchableTypes").build()
    }

    pub fn searchable_types_for_repository(&self, namespace: &str, name: &str) -> String {
        self.builder()
            .segment("v2/search/searchableTypes")
            .param(namespace)
            .param(name)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HalError;

    const BASE: &str = "http://example.com/base/";

    fn links() -> ResourceLinks {
        ResourceLinks::new(Arc::new(ScmPathInfoStore::with_base(BASE).unwrap()))
    }

    #[test]
    fn unset_base_fails_closed() {
        let links = ResourceLinks::new(Arc::new(ScmPathInfoStore::new()));
        assert!(matches!(links.user(), Err(HalError::BaseUriNotConfigured)));
        assert!(matches!(links.repository(), Err(HalError::BaseUriNotConfigured)));
    }

    #[test]
    fn user_links() {
        let user = links().user().unwrap();
        assert_eq!(user.self_link("ich"), format!("{BASE}v2/users/ich"));
        assert_eq!(user.password_change("ich"), format!("{BASE}v2/users/ich/password"));
        assert_eq!(user.to_internal("ich"), format!("{BASE}v2/users/ich/convert-to-internal"));
        assert_eq!(user.to_external("ich"), format!("{BASE}v2/users/ich/convert-to-external"));
        assert_eq!(
            user.permission_overview("ich"),
            format!("{BASE}v2/users/ich/permissionOverview")
        );
        assert_eq!(user.permissions("ich"), format!("{BASE}v2/users/ich/permissions/"));
        assert_eq!(user.api_keys("ich"), format!("{BASE}v2/users/ich/api_keys"));
    }

    #[test]
    fn collection_links() {
        let links = links();
        assert_eq!(links.user_collection().unwrap().self_link(), format!("{BASE}v2/users/"));
        assert_eq!(links.group_collection().unwrap().create(), format!("{BASE}v2/groups/"));
        assert_eq!(
            links.repository_collection().unwrap().self_link(),
            format!("{BASE}v2/repositories/")
        );
        assert_eq!(links.index().unwrap().self_link(), format!("{BASE}v2/"));
        assert_eq!(links.me().unwrap().self_link(), format!("{BASE}v2/me/"));
    }

    #[test]
    fn repository_links() {
        let repo = links().repository().unwrap();
        let prefix = format!("{BASE}v2/repositories/space/repo");
        assert_eq!(repo.self_link("space", "repo"), prefix);
        assert_eq!(repo.rename("space", "repo"), format!("{prefix}/rename"));
        assert_eq!(repo.archive("space", "repo"), format!("{prefix}/archive"));
        assert_eq!(repo.unarchive("space", "repo"), format!("{prefix}/unarchive"));
        assert_eq!(repo.run_health_check("space", "repo"), format!("{prefix}/runHealthCheck"));
        assert_eq!(repo.export("space", "repo", "git"), format!("{prefix}/export/git"));
        assert_eq!(repo.full_export("space", "repo"), format!("{prefix}/export/full"));
        assert_eq!(repo.paths("space", "repo"), format!("{prefix}/paths/{{revision}}"));
    }

    #[test]
    fn branch_names_are_encoded() {
        let links = links();
        let prefix = format!("{BASE}v2/repositories/space/repo");
        assert_eq!(
            links.branch().unwrap().self_link("space", "repo", "feature/hitchhiker42"),
            format!("{prefix}/branches/feature%2Fhitchhiker42")
        );
        assert_eq!(
            links.branch().unwrap().history("space", "repo", "master"),
            format!("{prefix}/branches/master/changesets/")
        );
        assert_eq!(
            links.branch_details().unwrap().self_link("space", "repo", "feature/x"),
            format!("{prefix}/branch-details/feature%2Fx")
        );
        assert_eq!(
            links.branch_details_collection().unwrap().self_link("space", "repo"),
            format!("{prefix}/branch-details/")
        );
    }

    #[test]
    fn source_paths_keep_slashes() {
        let source = links().source().unwrap();
        let prefix = format!("{BASE}v2/repositories/space/repo");
        assert_eq!(
            source.source_with_path("space", "repo", "abc", "src/my file.txt"),
            format!("{prefix}/sources/abc/src/my%20file.txt")
        );
        assert_eq!(
            source.content("space", "repo", "abc", "dir\\x"),
            format!("{prefix}/content/abc/dir%5Cx")
        );
        assert_eq!(source.self_link("space", "repo", "abc"), format!("{prefix}/sources/abc/"));
        assert_eq!(source.content_root("space", "repo"), format!("{prefix}/content/"));
    }

    #[test]
    fn incoming_links_are_templated() {
        let incoming = links().incoming().unwrap();
        assert_eq!(
            incoming.changesets("space", "repo"),
            format!("{BASE}v2/repositories/space/repo/incoming/{{source}}/{{target}}/changesets/")
        );
    }

    #[test]
    fn namespace_links() {
        let namespace = links().namespace().unwrap();
        assert_eq!(namespace.self_link("space"), format!("{BASE}v2/namespaces/space"));
        assert_eq!(namespace.collection(), format!("{BASE}v2/namespaces/"));
        assert_eq!(namespace.repositories("space"), format!("{BASE}v2/repositories/space/"));
        assert_eq!(
            namespace.permissions("space"),
            format!("{BASE}v2/namespaces/space/permissions")
        );
    }

    #[test]
    fn administration_links() {
        let admin = links().administration().unwrap();
        assert_eq!(admin.permissions(), format!("{BASE}v2/permissions/"));
        assert_eq!(admin.repository_roles(), format!("{BASE}v2/repositoryRoles/"));
        assert_eq!(
            admin.import_log(),
            format!("{BASE}v2/repositories/import/{{logId}}/log")
        );
        assert_eq!(admin.alerts(), format!("{BASE}v2/alerts"));
        assert_eq!(
            admin.invalidate_search_index(),
            format!("{BASE}v2/invalidations/search-index")
        );
    }

    #[test]
    fn search_and_autocomplete_links() {
        let links = links();
        let search = links.search().unwrap();
        assert_eq!(search.query("repository"), format!("{BASE}v2/search/query/repository"));
        assert_eq!(
            search.query_for_repository("space", "repo", "content"),
            format!("{BASE}v2/search/query/space/repo/content")
        );
        assert_eq!(
            search.searchable_types_for_repository("space", "repo"),
            format!("{BASE}v2/search/searchableTypes/space/repo")
        );
        assert_eq!(
            links.autocomplete().unwrap().namespaces(),
            format!("{BASE}v2/autocomplete/namespaces")
        );
    }
}
