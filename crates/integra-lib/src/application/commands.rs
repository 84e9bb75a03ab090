//! Command execution handlers
//!
//! Thin dispatch over the adapter layer: each subcommand fetches through
//! one shared [`PlatformClient`] and prints to stdout. Logging goes to the
//! stream the logger was configured with, so machine-readable output stays
//! clean.

use crate::api::{self, ResolutionLimits, resolve_transitive};
use crate::application::{AppConfig, CliConfig, Commands};
use crate::logger::Logger;
use crate::model::{IntegrationFile, Platform};
use crate::networking::PlatformClient;
use anyhow::{Context, Result, bail};
use std::sync::Arc;

/// Execute CLI commands
pub async fn execute_command(config: CliConfig) -> Result<()> {
    Logger::init(config.app_config.to_logger_config())?;

    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            println!("integra - Minecraft integration metadata");
            println!("Run 'integra --help' for usage information");
            return Ok(());
        }
    };

    if matches!(command, Commands::Version) {
        println!("integra {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let client = Arc::new(PlatformClient::new(config.app_config.to_client_config())?);
    let app = config.app_config;

    match command {
        Commands::Info {
            platform,
            identifier,
            description,
        } => handle_info(client, &app, platform, &identifier, description).await,
        Commands::Files {
            platform,
            identifier,
            inferred,
        } => handle_files(client, &app, platform, &identifier, inferred).await,
        Commands::Deps {
            platform,
            identifier,
            file,
            deep,
            max_depth,
        } => handle_deps(client, &app, platform, &identifier, file, deep, max_depth).await,
        Commands::Author {
            platform,
            identifier,
        } => handle_author(client, &app, platform, &identifier).await,
        Commands::Version => unreachable!("handled before client construction"),
    }
}

async fn handle_info(
    client: Arc<PlatformClient>,
    app: &AppConfig,
    platform: Platform,
    identifier: &str,
    description: bool,
) -> Result<()> {
    let integration = api::get_integration(client, platform, identifier, app.key_for(platform))
        .await
        .with_context(|| format!("fetching '{identifier}' from {platform}"))?;

    println!("{} ({})", integration.clean_title(), integration.slug());
    println!("  platform:   {}", integration.platform());
    println!("  id:         {}", integration.id());
    println!("  type:       {:?}", integration.integration_type());
    println!("  status:     {:?}", integration.status());
    println!("  published:  {}", integration.published().date_naive());
    println!("  updated:    {}", integration.updated().date_naive());
    println!("  downloads:  {}", integration.downloads());
    println!("  likes:      {}", integration.likes());
    if let Some(license) = integration.license() {
        println!("  license:    {license}");
    }
    if !integration.authors().is_empty() {
        let names: Vec<&str> = integration
            .authors()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        println!("  authors:    {}", names.join(", "));
    }
    if !integration.categories().is_empty() {
        let tags: Vec<String> = integration
            .categories()
            .iter()
            .map(|c| format!("{c:?}"))
            .collect();
        println!("  categories: {}", tags.join(", "));
    }
    for (label, url) in [
        ("issues", integration.issues()),
        ("wiki", integration.wiki()),
        ("source", integration.source()),
        ("donate", integration.donation()),
    ] {
        if let Some(url) = url {
            println!("  {label}:     {url}");
        }
    }
    println!("  files:      {}", integration.files().len());

    if description {
        let body = integration
            .full_description()
            .await
            .context("fetching long-form description")?;
        println!();
        println!("{body}");
    }

    Ok(())
}

async fn handle_files(
    client: Arc<PlatformClient>,
    app: &AppConfig,
    platform: Platform,
    identifier: &str,
    inferred: bool,
) -> Result<()> {
    let integration = api::get_integration(client, platform, identifier, app.key_for(platform))
        .await
        .with_context(|| format!("fetching '{identifier}' from {platform}"))?;

    let files = integration.files();
    if files.is_empty() {
        println!("{} has no files", integration.clean_title());
        return Ok(());
    }

    for file in files {
        println!(
            "{} ({}, {} bytes, {:?})",
            file.file_name(),
            file.id(),
            file.size(),
            file.side()
        );
        if inferred {
            let pairs: Vec<String> = file
                .possible_versions()
                .iter()
                .map(|v| v.to_string())
                .collect();
            println!("  targets: {}", pairs.join(", "));
        } else {
            let loaders: Vec<String> = file
                .declared_loaders()
                .iter()
                .map(|l| l.to_string())
                .collect();
            println!("  loaders:  {}", loaders.join(", "));
            println!("  versions: {}", file.game_versions().join(", "));
        }
    }

    Ok(())
}

async fn handle_deps(
    client: Arc<PlatformClient>,
    app: &AppConfig,
    platform: Platform,
    identifier: &str,
    file_id: Option<String>,
    deep: bool,
    max_depth: usize,
) -> Result<()> {
    let integration = api::get_integration(client, platform, identifier, app.key_for(platform))
        .await
        .with_context(|| format!("fetching '{identifier}' from {platform}"))?;

    let file: &Arc<IntegrationFile> = match &file_id {
        Some(id) => integration
            .files()
            .iter()
            .find(|f| f.id() == id.as_str())
            .with_context(|| format!("'{identifier}' has no file with id '{id}'"))?,
        None => match integration.files().first() {
            Some(f) => f,
            None => bail!("'{identifier}' has no files to resolve"),
        },
    };

    if deep {
        let limits = ResolutionLimits { max_depth };
        let resolution = resolve_transitive(file, &limits).await;

        if resolution.order().is_empty() {
            println!("{} has no required dependencies", file.file_name());
            return Ok(());
        }
        for dep in resolution.order() {
            print_dependency(dep);
        }
        let graph = resolution.graph();
        println!(
            "{} projects, {} requirement edges",
            graph.node_count(),
            graph.edge_count()
        );
        if resolution.has_cycles() {
            println!("note: dependency graph contains a cycle");
        }
        return Ok(());
    }

    let deps = file.dependencies().await;
    if deps.is_empty() {
        println!("{} has no required dependencies", file.file_name());
        return Ok(());
    }
    for dep in deps {
        print_dependency(dep);
    }

    Ok(())
}

fn print_dependency(dep: &Arc<IntegrationFile>) {
    println!(
        "{} ({}) -> {} ({})",
        dep.parent().clean_title(),
        dep.parent().id(),
        dep.file_name(),
        dep.id()
    );
}

async fn handle_author(
    client: Arc<PlatformClient>,
    app: &AppConfig,
    platform: Platform,
    identifier: &str,
) -> Result<()> {
    let author = api::get_author(client, platform, identifier, app.key_for(platform))
        .await
        .with_context(|| format!("fetching author '{identifier}' from {platform}"))?;

    println!("{} ({})", author.name, author.id);
    println!("  platform:   {}", author.platform);
    if let Some(registered) = author.registered {
        println!("  registered: {}", registered.date_naive());
    }
    if let Some(avatar) = &author.avatar {
        println!("  avatar:     {avatar}");
    }

    Ok(())
}
