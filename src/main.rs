//! tree9s - A K9s-inspired terminal UI for exploring the Kubernetes resource
//! tree of a deployed application
//!
//! Snapshots the resources of one namespace (live from a cluster or from a
//! saved JSON payload), groups them into a category/kind/object tree, and
//! browses them with K9s-style key bindings.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use tree9s::config::{self, ConfigLoader};
use tree9s::snapshot::{create_source, refresh_once, SnapshotStore};
use tree9s::tree::{render_ascii, ExpandedNodes};

/// tree9s - A K9s-inspired terminal UI for exploring the Kubernetes resource tree
#[derive(Parser, Debug)]
#[command(name = "tree9s")]
#[command(about = "A K9s-inspired terminal UI for exploring the Kubernetes resource tree of a deployed application", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    /// Namespace to snapshot (defaults to the configured namespace)
    #[arg(long, short = 'n')]
    namespace: Option<String>,

    /// Label selector applied to every list call (e.g. "app=web")
    #[arg(long, short = 'l')]
    selector: Option<String>,

    /// Read the snapshot from a saved JSON payload instead of a cluster
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resource tree once and exit
    Tree {
        /// Expand every branch
        #[arg(long)]
        expand_all: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "defaultNamespace", "ui.colors.degraded")
        key: Option<String>,
    },
    /// Set configuration value
    Set {
        /// Configuration key (e.g., "defaultNamespace", "ui.colors.degraded")
        key: String,
        /// Configuration value
        value: String,
    },
    /// List all configuration
    List,
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate,
}

/// Initialize logging based on debug flag
/// Returns the log file path if debug logging is enabled
fn init_logging(debug: bool, level: &str) -> Option<PathBuf> {
    if debug {
        // Write to a temp file so the TUI keeps stdout/stderr to itself
        let temp_file = tempfile::Builder::new()
            .prefix("tree9s-")
            .suffix(".log")
            .tempfile()
            .map(|f| {
                let path = f.path().to_path_buf();
                // Keep the file alive; the OS cleans up the temp dir
                std::mem::forget(f);
                path
            })
            .unwrap_or_else(|_| {
                std::env::temp_dir().join(format!("tree9s-{}.log", std::process::id()))
            });

        let file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&temp_file)
            .ok()?;

        tracing_subscriber::fmt()
            .with_writer(file)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
            )
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .init();

        Some(temp_file)
    } else {
        // Silent operation by default
        None
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let Args {
        debug,
        namespace,
        selector,
        file,
        command,
    } = Args::parse();

    // Config subcommands never touch a cluster
    let command = match command {
        Some(Command::Config { subcommand }) => return handle_config_command(subcommand),
        other => other,
    };

    // Load configuration
    let config = ConfigLoader::load().unwrap_or_else(|_| ConfigLoader::load_defaults());

    let log_file = init_logging(debug, &config.logger.level);
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    // Command line wins over configuration
    let selector = selector.or_else(|| config.selector.clone());
    let configured_namespace = namespace.unwrap_or_else(|| config.default_namespace.clone());

    // A saved payload needs no cluster connection
    let (client, context) = if file.is_some() {
        (None, "file".to_string())
    } else {
        tracing::debug!("Initializing Kubernetes client");
        let client = tree9s::kube::create_client().await?;
        let context = tree9s::kube::get_context().await?;
        tracing::info!("Connected to Kubernetes cluster: {}", context);
        (Some(client), context)
    };
    let namespace = tree9s::kube::get_default_namespace(&configured_namespace);

    let source = create_source(file, client, namespace.clone(), selector)
        .context("Failed to create snapshot source")?;
    let source: Arc<dyn tree9s::snapshot::SnapshotSource> = Arc::from(source);
    let store = SnapshotStore::new();

    // One-shot tree print
    if let Some(Command::Tree { expand_all }) = command {
        let count = refresh_once(source.as_ref(), &store)
            .await
            .context("Failed to fetch snapshot")?;
        tracing::debug!("Fetched snapshot with {} resources", count);

        let tree = store.display_tree().await;
        print!("{}", render_ascii(&tree, &ExpandedNodes::new(), expand_all));

        let summary = store.summary().await;
        println!("{} resources  {}", summary.total, summary.one_line());
        return Ok(());
    }

    run(store, source, context, namespace, config).await
}

#[cfg(feature = "tui")]
async fn run(
    store: SnapshotStore,
    source: Arc<dyn tree9s::snapshot::SnapshotSource>,
    context: String,
    namespace: String,
    config: config::schema::Config,
) -> Result<()> {
    let theme = tree9s::tui::Theme::from_colors(&config.ui.colors);

    tracing::debug!("Starting refresh task and TUI");
    let (refresh_handle, refresh_rx) =
        tree9s::snapshot::spawn_refresh(source.clone(), store.clone(), config.refresh_secs);

    tree9s::tui::run_tui(store, source, refresh_rx, context, namespace, config, theme).await?;

    refresh_handle.abort();
    Ok(())
}

#[cfg(not(feature = "tui"))]
async fn run(
    _store: SnapshotStore,
    _source: Arc<dyn tree9s::snapshot::SnapshotSource>,
    _context: String,
    _namespace: String,
    _config: config::schema::Config,
) -> Result<()> {
    anyhow::bail!("built without the \"tui\" feature; use the `tree` subcommand")
}

/// Handle configuration subcommands
fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    use config::paths;

    match cmd {
        ConfigSubcommand::Get { key } => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;

            if let Some(key) = key {
                let value = get_config_value(&config, &key)?;
                println!("{}", value);
            } else {
                let yaml =
                    serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Set { key, value } => {
            let mut config = ConfigLoader::load().unwrap_or_else(|_| ConfigLoader::load_defaults());

            set_config_value(&mut config, &key, &value)
                .with_context(|| format!("Failed to set {} = {}", key, value))?;

            ConfigLoader::save_root(&config).context("Failed to save configuration")?;
            println!("Configuration saved");
        }
        ConfigSubcommand::List => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;
            let yaml =
                serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
            print!("{}", yaml);
        }
        ConfigSubcommand::Path => {
            println!("{}", paths::root_config_path().display());
        }
        ConfigSubcommand::Validate => match ConfigLoader::validate() {
            Ok(()) => println!("Configuration is valid"),
            Err(e) => {
                eprintln!("Configuration validation failed: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Get a configuration value by key (dot notation)
fn get_config_value(config: &config::schema::Config, key: &str) -> Result<String> {
    let color = |value: &Option<String>| value.clone().unwrap_or_default();
    match key {
        "refreshSecs" => Ok(config.refresh_secs.to_string()),
        "defaultNamespace" => Ok(config.default_namespace.clone()),
        "selector" => Ok(config.selector.clone().unwrap_or_default()),
        "ui.enableMouse" => Ok(config.ui.enable_mouse.to_string()),
        "ui.headless" => Ok(config.ui.headless.to_string()),
        "ui.colors.healthy" => Ok(color(&config.ui.colors.healthy)),
        "ui.colors.degraded" => Ok(color(&config.ui.colors.degraded)),
        "ui.colors.progressing" => Ok(color(&config.ui.colors.progressing)),
        "ui.colors.missing" => Ok(color(&config.ui.colors.missing)),
        "ui.colors.suspended" => Ok(color(&config.ui.colors.suspended)),
        "ui.colors.unknown" => Ok(color(&config.ui.colors.unknown)),
        "logger.level" => Ok(config.logger.level.clone()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
fn set_config_value(config: &mut config::schema::Config, key: &str, value: &str) -> Result<()> {
    fn optional(value: &str) -> Option<String> {
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    match key {
        "refreshSecs" => {
            config.refresh_secs = value.parse().context("refreshSecs must be a number")?;
            if config.refresh_secs == 0 {
                return Err(anyhow::anyhow!("refreshSecs must be at least 1"));
            }
        }
        "defaultNamespace" => {
            config.default_namespace = value.to_string();
        }
        "selector" => {
            config.selector = optional(value);
        }
        "ui.enableMouse" => {
            config.ui.enable_mouse = value
                .parse()
                .context("ui.enableMouse must be 'true' or 'false'")?;
        }
        "ui.headless" => {
            config.ui.headless = value
                .parse()
                .context("ui.headless must be 'true' or 'false'")?;
        }
        "ui.colors.healthy" => config.ui.colors.healthy = optional(value),
        "ui.colors.degraded" => config.ui.colors.degraded = optional(value),
        "ui.colors.progressing" => config.ui.colors.progressing = optional(value),
        "ui.colors.missing" => config.ui.colors.missing = optional(value),
        "ui.colors.suspended" => config.ui.colors.suspended = optional(value),
        "ui.colors.unknown" => config.ui.colors.unknown = optional(value),
        "logger.level" => {
            config.logger.level = value.to_string();
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    // Color values must parse as CSS colors
    if key.starts_with("ui.colors.") && !value.is_empty() {
        csscolorparser::parse(value)
            .map_err(|e| anyhow::anyhow!("Invalid color for {}: {}", key, e))?;
    }

    Ok(())
}
