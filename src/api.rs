//! Facade wiring the base URI, enricher registry and mappers together.
//!
//! `HalApi` is what a request layer (or the CLI) talks to: it owns one
//! instance of every mapper, all sharing the same link families and
//! registry, and renders representations from already loaded entities or
//! from YAML input documents.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{
    Branch, BranchDetails, Group, Me, Namespace, NamespaceAndName, PageResult, Repository,
    ScmConfiguration, Tag, User,
};
use crate::enrich::{ConfigurationLinkEnricher, EnricherCatalog, EnricherRegistry};
use crate::error::{HalError, HalResult};
use crate::hal::Representation;
use crate::mapper::{
    BranchCollectionMapper, BranchDetailsCollectionMapper, BranchDetailsMapper, BranchMapper,
    ConfigMapper, GroupCollectionMapper, GroupMapper, IndexMapper, MapperBase, MeMapper,
    NamespaceCollectionMapper, NamespaceMapper, PageRequest, RepositoryCollectionMapper,
    RepositoryFeatures, RepositoryMapper, TagCollectionMapper, TagMapper, UserCollectionMapper,
    UserMapper, INDEX_RELS,
};
use crate::permission::SharedSubject;
use crate::settings::Settings;
use crate::uri::{ResourceLinks, ScmPathInfoStore};

/// Resource kinds the facade can render from an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    Index,
    Config,
    Me,
    User,
    Users,
    Group,
    Groups,
    Namespace,
    Namespaces,
    Repository,
    Repositories,
    Branch,
    Branches,
    BranchDetails,
    BranchDetailsCollection,
    Tag,
    Tags,
}

impl RenderKind {
    pub const ALL: [RenderKind; 17] = [
        Self::Index,
        Self::Config,
        Self::Me,
        Self::User,
        Self::Users,
        Self::Group,
        Self::Groups,
        Self::Namespace,
        Self::Namespaces,
        Self::Repository,
        Self::Repositories,
        Self::Branch,
        Self::Branches,
        Self::BranchDetails,
        Self::BranchDetailsCollection,
        Self::Tag,
        Self::Tags,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Config => "config",
            Self::Me => "me",
            Self::User => "user",
            Self::Users => "users",
            Self::Group => "group",
            Self::Groups => "groups",
            Self::Namespace => "namespace",
            Self::Namespaces => "namespaces",
            Self::Repository => "repository",
            Self::Repositories => "repositories",
            Self::Branch => "branch",
            Self::Branches => "branches",
            Self::BranchDetails => "branch-details",
            Self::BranchDetailsCollection => "branch-details-collection",
            Self::Tag => "tag",
            Self::Tags => "tags",
        }
    }
}

impl fmt::Display for RenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderKind {
    type Err = HalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| HalError::InvalidInput(format!("unknown resource kind '{}'", s)))
    }
}

// --- Input documents ---

#[derive(Deserialize)]
struct RepositoryInput {
    repository: Repository,
    #[serde(default)]
    features: RepositoryFeatures,
}

#[derive(Deserialize)]
struct PageInput<T> {
    #[serde(default)]
    page: usize,
    #[serde(default)]
    page_size: Option<usize>,
    #[serde(default)]
    overall_count: Option<usize>,
    items: Vec<T>,
    #[serde(default)]
    features: RepositoryFeatures,
}

#[derive(Deserialize)]
struct RepositoryChildInput<T> {
    repository: Repository,
    item: T,
}

#[derive(Deserialize)]
struct RepositoryChildrenInput<T> {
    repository: Repository,
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Deserialize)]
struct BranchDetailsInput<T> {
    repository: NamespaceAndName,
    details: T,
}

fn parse<T: DeserializeOwned>(kind: RenderKind, input: &str) -> HalResult<T> {
    serde_yaml::from_str(input)
        .map_err(|e| HalError::InvalidInput(format!("{} input: {}", kind, e)))
}

/// Single entry point for rendering representations.
#[derive(Clone)]
pub struct HalApi {
    base: MapperBase,
    configuration: ScmConfiguration,
    page_size: usize,
    index: IndexMapper,
    config: ConfigMapper,
    me: MeMapper,
    user: UserMapper,
    group: GroupMapper,
    namespace: NamespaceMapper,
    repository: RepositoryMapper,
    branch: BranchMapper,
    branch_details: BranchDetailsMapper,
    tag: TagMapper,
}

impl HalApi {
    /// Wire all mappers from `settings` and register the catalog's enrichers.
    ///
    /// The base URI is taken from `settings` when present; otherwise it must
    /// be set on [`path_info`](Self::path_info) before the first render.
    pub fn from_settings(settings: &Settings, mut catalog: EnricherCatalog) -> HalResult<Self> {
        let path_info = Arc::new(ScmPathInfoStore::new());
        if let Some(base_uri) = settings.base_uri.as_deref() {
            path_info.set(base_uri)?;
        }
        let links = ResourceLinks::new(path_info);
        let registry = Arc::new(EnricherRegistry::new());

        if let Some(name) = settings
            .configuration_links
            .iter()
            .find(|name| INDEX_RELS.iter().any(|rel| *rel == name.as_str()))
        {
            return Err(HalError::ReservedLink(name.clone()));
        }
        for name in &settings.configuration_links {
            catalog.add(Arc::new(ConfigurationLinkEnricher::new(name, links.clone())));
        }
        let report = catalog.register_discovered(&registry)?;
        info!(
            enrichers = report.registered.len(),
            base_uri = settings.base_uri.as_deref().unwrap_or("<unset>"),
            "hal api ready"
        );

        let base = MapperBase::new(links, registry);
        let configuration = settings.scm.clone();
        Ok(Self {
            index: IndexMapper::new(
                base.clone(),
                configuration.clone(),
                &settings.version,
                &settings.instance_id,
            )
            .with_searchable_types(settings.searchable_types.clone()),
            config: ConfigMapper::new(base.clone()),
            me: MeMapper::new(base.clone()),
            user: UserMapper::new(base.clone()),
            group: GroupMapper::new(base.clone()),
            namespace: NamespaceMapper::new(base.clone()),
            repository: RepositoryMapper::new(base.clone(), configuration.clone())
                .with_documentation_version(&settings.documentation_version)
                .with_searchable_types(settings.searchable_types.clone()),
            branch: BranchMapper::new(base.clone()),
            branch_details: BranchDetailsMapper::new(base.clone()),
            tag: TagMapper::new(base.clone()),
            page_size: settings.page_size,
            configuration,
            base,
        })
    }

    pub fn path_info(&self) -> &ScmPathInfoStore {
        self.base.links().path_info()
    }

    pub fn links(&self) -> &ResourceLinks {
        self.base.links()
    }

    pub fn registry(&self) -> &EnricherRegistry {
        self.base.registry()
    }

    pub fn index(&self, subject: &SharedSubject) -> HalResult<Representation> {
        self.index.map(subject)
    }

    pub fn config(&self, subject: &SharedSubject) -> HalResult<Representation> {
        self.config.map(&self.configuration, subject)
    }

    pub fn me(&self, me: &Me, subject: &SharedSubject) -> HalResult<Representation> {
        self.me.map(me, subject)
    }

    pub fn user(&self, user: &User, subject: &SharedSubject) -> HalResult<Representation> {
        self.user.map(user, subject)
    }

    pub fn users(
        &self,
        request: PageRequest,
        result: &PageResult<User>,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        UserCollectionMapper::new(self.user.clone()).map(request, result, subject)
    }

    pub fn group(&self, group: &Group, subject: &SharedSubject) -> HalResult<Representation> {
        self.group.map(group, subject)
    }

    pub fn groups(
        &self,
        request: PageRequest,
        result: &PageResult<Group>,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        GroupCollectionMapper::new(self.group.clone()).map(request, result, subject)
    }

    pub fn namespace(
        &self,
        namespace: &Namespace,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        self.namespace.map(namespace, subject)
    }

    pub fn namespaces(
        &self,
        namespaces: &[Namespace],
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        NamespaceCollectionMapper::new(self.namespace.clone()).map(namespaces, subject)
    }

    pub fn repository(
        &self,
        repository: &Repository,
        features: &RepositoryFeatures,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        self.repository.map(repository, features, subject)
    }

    pub fn repositories(
        &self,
        request: PageRequest,
        result: &PageResult<Repository>,
        features: &RepositoryFeatures,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        RepositoryCollectionMapper::new(self.repository.clone())
            .map(request, result, features, subject)
    }

    pub fn branch(
        &self,
        branch: &Branch,
        repository: &Repository,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        self.branch.map(branch, repository, subject)
    }

    pub fn branches(
        &self,
        branches: &[Branch],
        repository: &Repository,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        BranchCollectionMapper::new(self.branch.clone()).map(branches, repository, subject)
    }

    pub fn branch_details(
        &self,
        repository: &NamespaceAndName,
        details: &BranchDetails,
    ) -> HalResult<Representation> {
        self.branch_details.map(repository, details)
    }

    pub fn branch_details_collection(
        &self,
        repository: &NamespaceAndName,
        details: &[BranchDetails],
    ) -> HalResult<Representation> {
        BranchDetailsCollectionMapper::new(self.branch_details.clone()).map(repository, details)
    }

    pub fn tag(
        &self,
        tag: &Tag,
        repository: &Repository,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        self.tag.map(tag, repository, subject)
    }

    pub fn tags(
        &self,
        tags: &[Tag],
        repository: &Repository,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        TagCollectionMapper::new(self.tag.clone()).map(tags, repository, subject)
    }

    fn page<T>(&self, input: PageInput<T>) -> (PageRequest, PageResult<T>) {
        let request = PageRequest::new(input.page, input.page_size.unwrap_or(self.page_size));
        let overall = input.overall_count.unwrap_or(input.items.len());
        (request, PageResult::new(input.items, overall))
    }

    /// Render a representation of `kind` from a YAML (or JSON) document.
    pub fn render(
        &self,
        kind: RenderKind,
        input: &str,
        subject: &SharedSubject,
    ) -> HalResult<Representation> {
        debug!(kind = %kind, "rendering");
        match kind {
            RenderKind::Index => self.index(subject),
            RenderKind::Config => {
                if input.trim().is_empty() {
                    self.config(subject)
                } else {
                    let configuration: ScmConfiguration = parse(kind, input)?;
                    self.config.map(&configuration, subject)
                }
            }
            RenderKind::Me => self.me(&parse(kind, input)?, subject),
            RenderKind::User => self.user(&parse(kind, input)?, subject),
            RenderKind::Users => {
                let (request, result) = self.page(parse::<PageInput<User>>(kind, input)?);
                self.users(request, &result, subject)
            }
            RenderKind::Group => self.group(&parse(kind, input)?, subject),
            RenderKind::Groups => {
                let (request, result) = self.page(parse::<PageInput<Group>>(kind, input)?);
                self.groups(request, &result, subject)
            }
            RenderKind::Namespace => self.namespace(&parse(kind, input)?, subject),
            RenderKind::Namespaces => {
                let namespaces: Vec<Namespace> = parse(kind, input)?;
                self.namespaces(&namespaces, subject)
            }
            RenderKind::Repository => {
                let input: RepositoryInput = parse(kind, input)?;
                self.repository(&input.repository, &input.features, subject)
            }
            RenderKind::Repositories => {
                let input: PageInput<Repository> = parse(kind, input)?;
                let features = input.features.clone();
                let (request, result) = self.page(input);
                self.repositories(request, &result, &features, subject)
            }
            RenderKind::Branch => {
                let input: RepositoryChildInput<Branch> = parse(kind, input)?;
                self.branch(&input.item, &input.repository, subject)
            }
            RenderKind::Branches => {
                let input: RepositoryChildrenInput<Branch> = parse(kind, input)?;
                self.branches(&input.items, &input.repository, subject)
            }
            RenderKind::BranchDetails => {
                let input: BranchDetailsInput<BranchDetails> = parse(kind, input)?;
                self.branch_details(&input.repository, &input.details)
            }
            RenderKind::BranchDetailsCollection => {
                let input: BranchDetailsInput<Vec<BranchDetails>> = parse(kind, input)?;
                self.branch_details_collection(&input.repository, &input.details)
            }
            RenderKind::Tag => {
                let input: RepositoryChildInput<Tag> = parse(kind, input)?;
                self.tag(&input.item, &input.repository, subject)
            }
            RenderKind::Tags => {
                let input: RepositoryChildrenInput<Tag> = parse(kind, input)?;
                self.tags(&input.items, &input.repository, subject)
            }
        }
    }
}
