//! scm-hal CLI: render HAL documents and inspect link families.
//!
//! Usage:
//!   scm-hal render <kind> [--input file.yaml]
//!   scm-hal links <family> ...
//!   scm-hal enrichers
//!   scm-hal settings

use clap::{Parser, Subcommand};
use scm_hal::{EnricherCatalog, HalApi, HalEnricher, HalResult, RenderKind, Settings};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "scm-hal",
    version,
    about = "HAL representations for the SCM REST API"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Settings file (defaults to ~/.config/scm-hal/settings.yaml)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Override the base URI from the settings file
    #[arg(long, global = true)]
    base_uri: Option<String>,
    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a resource from a YAML or JSON document
    Render {
        /// Resource kind, e.g. repository, branches, users, index
        kind: String,
        /// Input document; read from stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Print compact JSON instead of pretty JSON
        #[arg(long)]
        compact: bool,
    },
    /// Print the links of one link family
    Links {
        #[command(subcommand)]
        family: LinkFamily,
    },
    /// List enricher registrations per resource type
    Enrichers,
    /// Print the effective settings as YAML
    Settings,
}

#[derive(Subcommand)]
enum LinkFamily {
    /// Entry points of the index document
    Index,
    /// Links of a single repository
    Repository { namespace: String, name: String },
    /// Links of a branch
    Branch {
        namespace: String,
        name: String,
        branch: String,
    },
    /// Links of a user
    User { name: String },
    /// Links of a group
    Group { name: String },
    /// Links of a namespace
    Namespace { namespace: String },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(path: Option<&Path>, base_uri: Option<String>) -> HalResult<Settings> {
    let mut settings = Settings::load_or_default(path)?;
    if base_uri.is_some() {
        settings.base_uri = base_uri;
    }
    Ok(settings)
}

fn read_input(input: Option<&Path>) -> std::io::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn print_links(rows: &[(&str, String)]) {
    for (rel, href) in rows {
        println!("{:<24}  {}", rel, href);
    }
}

fn cmd_render(
    api: &HalApi,
    settings: &Settings,
    kind: &str,
    input: Option<&Path>,
    compact: bool,
) -> i32 {
    let kind: RenderKind = match kind.parse() {
        Ok(kind) => kind,
        Err(e) => {
            eprintln!("Error: {}", e);
            let names: Vec<&str> = RenderKind::ALL.iter().map(|k| k.as_str()).collect();
            eprintln!("Known kinds: {}", names.join(", "));
            return 2;
        }
    };
    // The index and the global config need no input document.
    let document = if matches!(kind, RenderKind::Index | RenderKind::Config) && input.is_none() {
        String::new()
    } else {
        match read_input(input) {
            Ok(document) => document,
            Err(e) => {
                eprintln!("Error: cannot read input: {}", e);
                return 1;
            }
        }
    };

    let subject = settings.subject.clone().into_shared();
    let rendered = api.render(kind, &document, &subject).and_then(|repr| {
        if compact {
            repr.to_json()
        } else {
            repr.to_json_pretty()
        }
    });
    match rendered {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn family_rows(api: &HalApi, family: &LinkFamily) -> HalResult<Vec<(&'static str, String)>> {
    let links = api.links();
    let rows = match family {
        LinkFamily::Index => {
            let autocomplete = links.autocomplete()?;
            let admin = links.administration()?;
            vec![
                ("self", links.index()?.self_link()),
                ("me", links.me()?.self_link()),
                ("login", links.auth()?.login()),
                ("users", links.user_collection()?.self_link()),
                ("groups", links.group_collection()?.self_link()),
                ("repositories", links.repository_collection()?.self_link()),
                ("namespaces", links.namespace()?.collection()),
                ("config", links.config()?.self_link()),
                ("autocomplete users", autocomplete.users()),
                ("autocomplete groups", autocomplete.groups()),
                ("autocomplete namespaces", autocomplete.namespaces()),
                ("permissions", admin.permissions()),
                ("repositoryTypes", admin.repository_types()),
                ("repositoryRoles", admin.repository_roles()),
                ("repositoryVerbs", admin.repository_verbs()),
                ("namespaceStrategies", admin.namespace_strategies()),
                ("importLog", admin.import_log()),
                ("alerts", admin.alerts()),
                ("updateInfo", admin.update_info()),
            ]
        }
        LinkFamily::Repository { namespace, name } => {
            let (ns, name) = (namespace.as_str(), name.as_str());
            let repository = links.repository()?;
            vec![
                ("self", repository.self_link(ns, name)),
                ("rename", repository.rename(ns, name)),
                ("archive", repository.archive(ns, name)),
                ("unarchive", repository.unarchive(ns, name)),
                ("runHealthCheck", repository.run_health_check(ns, name)),
                ("permissions", links.repository_permission()?.all(ns, name)),
                ("branches", links.branch_collection()?.self_link(ns, name)),
                ("tags", links.tag()?.all(ns, name)),
                ("changesets", links.changeset()?.all(ns, name)),
                ("sources", links.source()?.self_without_revision(ns, name)),
                ("content", links.source()?.content_root(ns, name)),
            ]
        }
        LinkFamily::Branch {
            namespace,
            name,
            branch,
        } => {
            let (ns, name, branch) = (namespace.as_str(), name.as_str(), branch.as_str());
            let branch_links = links.branch()?;
            vec![
                ("self", branch_links.self_link(ns, name, branch)),
                ("history", branch_links.history(ns, name, branch)),
                ("delete", branch_links.delete(ns, name, branch)),
                ("details", links.branch_details()?.self_link(ns, name, branch)),
            ]
        }
        LinkFamily::User { name } => {
            let user = links.user()?;
            vec![
                ("self", user.self_link(name)),
                ("password", user.password_change(name)),
                ("convertToExternal", user.to_external(name)),
                ("convertToInternal", user.to_internal(name)),
                ("permissionOverview", user.permission_overview(name)),
                ("permissions", user.permissions(name)),
                ("apiKeys", user.api_keys(name)),
            ]
        }
        LinkFamily::Group { name } => {
            let group = links.group()?;
            vec![
                ("self", group.self_link(name)),
                ("permissions", group.permissions(name)),
            ]
        }
        LinkFamily::Namespace { namespace } => {
            let namespace_links = links.namespace()?;
            vec![
                ("self", namespace_links.self_link(namespace)),
                ("repositories", namespace_links.repositories(namespace)),
                ("permissions", namespace_links.permissions(namespace)),
            ]
        }
    };
    Ok(rows)
}

fn cmd_links(api: &HalApi, family: &LinkFamily) -> i32 {
    match family_rows(api, family) {
        Ok(rows) => {
            print_links(&rows);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_enrichers(api: &HalApi) -> i32 {
    let registry = api.registry();
    if registry.is_empty() {
        println!("No enrichers registered.");
        return 0;
    }
    println!("{:<28}  {}", "TYPE", "ENRICHERS");
    println!("{}", "-".repeat(60));
    for resource_type in registry.registered_types() {
        let ids: Vec<String> = registry
            .all_by_exact_type(&resource_type)
            .iter()
            .map(|enricher| enricher.id().to_string())
            .collect();
        println!("{:<28}  {}", resource_type.name(), ids.join(", "));
    }
    0
}

fn cmd_settings(settings: &Settings) -> i32 {
    match settings.to_yaml() {
        Ok(yaml) => {
            print!("{}", yaml);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = match load_settings(cli.settings.as_deref(), cli.base_uri) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Commands::Settings = cli.command {
        std::process::exit(cmd_settings(&settings));
    }

    let api = match HalApi::from_settings(&settings, EnricherCatalog::new()) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let code = match cli.command {
        Commands::Render {
            kind,
            input,
            compact,
        } => cmd_render(&api, &settings, &kind, input.as_deref(), compact),
        Commands::Links { family } => cmd_links(&api, &family),
        Commands::Enrichers => cmd_enrichers(&api),
        Commands::Settings => cmd_settings(&settings),
    };
    std::process::exit(code);
}
