//! cprojecthub CLI entry point
//!
//! Usage:
//!   cprojecthub mcp              Start MCP server over stdio
//!   cprojecthub tasks            List build and clean tasks
//!   cprojecthub locate           List discovered project files
//!   cprojecthub config           Show configuration

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cprojecthub::cli::{
    commands::{ConfigArgs, LocateArgs, OutputFormat, TasksArgs},
    run_mcp_server, Cli, Commands,
};
use cprojecthub::config::{find_config_files, load_config, FileSettings};
use cprojecthub::{CProjectProvider, CollectingNotifier, OsFileSystem, Warning};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    let result = run(cli).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Install the tracing subscriber; logs always go to stderr
fn init_logging(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cprojecthub={}", default_level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second init (e.g. in tests) is harmless
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Mcp => {
            run_mcp_server(cli.config.as_deref()).await?;
        }
        Commands::Tasks(args) => {
            list_tasks(args, cli.config)?;
        }
        Commands::Locate(args) => {
            locate_projects(args, cli.config)?;
        }
        Commands::Config(args) => {
            show_config(args, cli.config.as_deref())?;
        }
    }

    Ok(())
}

/// Build a provider over the layered settings, pinned to `project` if given
fn provider(
    project: Option<&Path>,
    config_path: Option<PathBuf>,
    notifier: Arc<CollectingNotifier>,
) -> Result<CProjectProvider> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let provider = CProjectProvider::new(
        cwd,
        Arc::new(FileSettings::new(config_path)),
        Arc::new(OsFileSystem),
        notifier,
    );

    Ok(match project {
        Some(root) => provider.with_root(root),
        None => provider,
    })
}

/// List build and clean tasks for the workspace
fn list_tasks(args: TasksArgs, config_path: Option<PathBuf>) -> Result<()> {
    let notifier = Arc::new(CollectingNotifier::new());
    let mut provider = provider(args.project.as_deref(), config_path, notifier.clone())?;

    let tasks = if provider.is_eligible() {
        provider.settings()
    } else {
        Vec::new()
    };
    let root = provider
        .root()
        .map(|r| r.display().to_string())
        .unwrap_or_default();
    let warnings = notifier.take();

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "project_root": root,
                "tasks": tasks,
                "warnings": warnings
            }))?;
            println!("{}", json);
        }
        OutputFormat::Plain => {
            for task in &tasks {
                println!("{}", task.name());
            }
        }
        OutputFormat::Table => {
            println!("{}: {}", "Root".cyan(), root);
            println!();
            if tasks.is_empty() {
                println!("No tasks found.");
            } else {
                let max_name_width = tasks.iter().map(|t| t.name().len()).max().unwrap_or(10);

                for task in &tasks {
                    println!(
                        "  {:width$}  {}",
                        task.name().green(),
                        task.command_line(),
                        width = max_name_width
                    );
                    println!(
                        "  {:width$}  {}",
                        "",
                        task.cwd().display().to_string().dimmed(),
                        width = max_name_width
                    );
                }
            }
        }
    }

    if args.format != OutputFormat::Json {
        print_warnings(&warnings);
    }

    Ok(())
}

/// List project files found under the project root
fn locate_projects(args: LocateArgs, config_path: Option<PathBuf>) -> Result<()> {
    let notifier = Arc::new(CollectingNotifier::new());
    let mut provider = provider(args.project.as_deref(), config_path, notifier.clone())?;

    let eligible = provider.is_eligible();
    let root = provider
        .root()
        .map(|r| r.display().to_string())
        .unwrap_or_default();
    let projects: Vec<String> = provider
        .projects()
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    let warnings = notifier.take();

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "project_root": root,
                "eligible": eligible,
                "project_files": projects,
                "warnings": warnings
            }))?;
            println!("{}", json);
        }
        OutputFormat::Plain => {
            for project in &projects {
                println!("{}", project);
            }
        }
        OutputFormat::Table => {
            println!("{}: {}", "Root".cyan(), root);
            println!();
            if projects.is_empty() {
                println!("{}: {}", "Eligible".yellow(), "no");
            } else {
                println!("{}:", "Project Files".cyan());
                for project in &projects {
                    println!("  - {}", project);
                }
            }
        }
    }

    if args.format != OutputFormat::Json {
        print_warnings(&warnings);
    }

    Ok(())
}

/// Show resolved configuration
fn show_config(args: ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Plain => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            println!("{}", config.project_root(&cwd).display());
        }
        OutputFormat::Table => {
            for path in find_config_files() {
                println!("# {}: {}", "loaded".dimmed(), path.display());
            }
            if let Some(path) = config_path.filter(|p| p.exists()) {
                println!("# {}: {}", "loaded".dimmed(), path.display());
            }
            let toml = toml::to_string_pretty(&config).context("Failed to render config")?;
            print!("{}", toml);
        }
    }

    Ok(())
}

fn print_warnings(warnings: &[Warning]) {
    if warnings.is_empty() {
        return;
    }

    eprintln!();
    eprintln!("{}:", "Warnings".yellow());
    for warning in warnings {
        eprintln!("  - {}: {}", warning.title, warning.detail);
    }
}
