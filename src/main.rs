use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing::debug;

use cloudexport::config::Config;
use cloudexport::logging::init_tracing;
use cloudexport::provider::{CloudProvider, LocalFolderProvider};
use cloudexport::runner::TaskRunner;
use cloudexport::state::{ExportRequest, ProviderIntent};
use cloudexport::store::Store;

#[derive(Debug, Parser)]
#[command(name = "cloudexport", version, about = "Export map files to cloud providers")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Upload a map JSON file to a provider
    Export(ExportArgs),
    /// List configured providers
    Providers,
}

#[derive(Debug, Args)]
struct ExportArgs {
    /// Map JSON file to upload
    map: PathBuf,

    /// Provider name (overrides the configured default)
    #[arg(long)]
    provider: Option<String>,

    /// Target file name
    #[arg(long)]
    name: Option<String>,

    /// Make the upload shareable
    #[arg(long)]
    public: bool,

    /// Binary attachment stored next to the map
    #[arg(long)]
    blob: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    init_tracing(&config.logging.level);

    match cli.command {
        Command::Export(args) => export(&config, args).await,
        Command::Providers => {
            list_providers(&config);
            Ok(())
        }
    }
}

fn list_providers(config: &Config) {
    for provider in &config.providers {
        let marker = if provider.name == config.defaults.provider {
            "*"
        } else {
            " "
        };
        let display = provider.display_name.as_deref().unwrap_or(&provider.name);
        println!(
            "{} {} ({}) -> {}",
            marker,
            provider.name,
            display,
            provider.root.display()
        );
    }
}

async fn export(config: &Config, args: ExportArgs) -> Result<()> {
    let name = args
        .provider
        .unwrap_or_else(|| config.defaults.provider.clone());
    let provider_config = config
        .provider(&name)
        .ok_or_else(|| anyhow!("Provider '{}' not found in config", name))?;
    let provider: Arc<dyn CloudProvider> = Arc::new(LocalFolderProvider::from_config(provider_config));

    provider
        .login()
        .await
        .with_context(|| format!("Failed to log in to {}", provider.display_name()))?;

    let raw = tokio::fs::read_to_string(&args.map)
        .await
        .with_context(|| format!("Failed to read '{}'", args.map.display()))?;
    let map_data: Value = serde_json::from_str(&raw)
        .with_context(|| format!("'{}' is not valid JSON", args.map.display()))?;

    let mut request = ExportRequest::new(Arc::clone(&provider), map_data)
        .file_name(args.name.unwrap_or_else(|| config.export.file_name.clone()))
        .public(args.public || config.export.public);
    if let Some(path) = &args.blob {
        let blob = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        request = request.blob(blob);
    }

    let mut store = Store::new();
    store.dispatch(ProviderIntent::ExportFileToCloud(request));
    let executed = store.run_until_idle(&TaskRunner::new()).await;
    debug!(executed, "store idle");

    provider.logout().await?;

    let state = &store.state().provider;
    println!("{}", serde_json::to_string_pretty(state)?);

    if state.has_error() {
        bail!("Export failed: {}", state.error.as_deref().unwrap_or_default());
    }
    Ok(())
}
