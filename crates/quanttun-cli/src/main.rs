mod complete_cmd;
mod config;
mod create_cmd;
mod notes_cmd;
mod profile_cmd;
mod routes_cmd;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use quanttun_store::storage::JsonFileStorage;

use config::QuanttunConfig;

#[derive(Parser)]
#[command(name = "quanttun", about = "AI-generated personalized study routes")]
struct Cli {
    /// Generation endpoint URL (overrides QUANTTUN_ENDPOINT env var)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Data directory (overrides QUANTTUN_DATA_DIR env var)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a quanttun config file
    Init {
        /// Generation endpoint URL to record in the config file
        #[arg(long)]
        endpoint: Option<String>,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Log in as a user (local record, no server)
    Login {
        /// Display name
        name: String,
        /// Email address
        email: String,
    },
    /// Log out the current user
    Logout,
    /// Show the logged-in user and accumulated points
    Profile,
    /// Generate a new study route
    Create {
        /// What to study (e.g. "Rust", "Cálculo I")
        #[arg(long)]
        subject: String,
        /// Daily time available (e.g. "1 hora")
        #[arg(long)]
        daily_time: String,
        /// Dedication level (e.g. "alto")
        #[arg(long)]
        dedication: String,
    },
    /// List routes with progress
    Routes,
    /// Show route details (or a single activity)
    Show {
        /// Route ID to show
        route_id: String,
        /// Activity ID to show in full (omit for the route overview)
        activity_id: Option<u32>,
    },
    /// Start a timed study session for an activity
    Study {
        /// Route ID
        route_id: String,
        /// Activity ID
        activity_id: u32,
    },
    /// Mark an activity completed and collect points
    Complete {
        /// Route ID
        route_id: String,
        /// Activity ID
        activity_id: u32,
    },
    /// Note management
    Notes {
        #[command(subcommand)]
        command: NotesCommands,
    },
}

#[derive(Subcommand)]
pub enum NotesCommands {
    /// Save (overwrite) the note for an activity
    Save {
        /// Route ID
        route_id: String,
        /// Activity ID
        activity_id: u32,
        /// Note content (omit and pass --stdin to read from standard input)
        content: Option<String>,
        /// Read the note content from standard input
        #[arg(long)]
        stdin: bool,
    },
    /// List saved notes, newest first
    List {
        /// Case-insensitive filter over route title, activity title, and content
        #[arg(long)]
        search: Option<String>,
    },
    /// Delete the note for an activity
    Delete {
        /// Route ID
        route_id: String,
        /// Activity ID
        activity_id: u32,
    },
}

/// Execute the `quanttun init` command: write config file.
fn cmd_init(endpoint: Option<&str>, data_dir: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let endpoint = endpoint.unwrap_or(quanttun_core::generator::DEFAULT_ENDPOINT);
    let cfg = config::init_file(endpoint, data_dir);

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  generator.endpoint = {endpoint}");
    if let Some(dir) = data_dir {
        println!("  storage.data_dir = {}", dir.display());
    }
    println!();
    println!("Next: run `quanttun login <name> <email>`, then `quanttun create`.");

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Commands::Init { endpoint, force } = &cli.command {
        return cmd_init(endpoint.as_deref(), cli.data_dir.as_deref(), *force);
    }

    let resolved = QuanttunConfig::resolve(cli.endpoint.as_deref(), cli.data_dir.as_deref())?;
    let storage = JsonFileStorage::open(&resolved.store);

    match cli.command {
        Commands::Init { .. } => unreachable!("handled above"),
        Commands::Login { name, email } => {
            profile_cmd::run_login(&storage, &name, &email)?;
        }
        Commands::Logout => {
            profile_cmd::run_logout(&storage)?;
        }
        Commands::Profile => {
            profile_cmd::run_profile(&storage)?;
        }
        Commands::Create {
            subject,
            daily_time,
            dedication,
        } => {
            create_cmd::run_create(
                &storage,
                resolved.generator,
                &subject,
                &daily_time,
                &dedication,
            )
            .await?;
        }
        Commands::Routes => {
            routes_cmd::run_routes(&storage)?;
        }
        Commands::Show {
            route_id,
            activity_id,
        } => {
            routes_cmd::run_show(&storage, &route_id, activity_id)?;
        }
        Commands::Study {
            route_id,
            activity_id,
        } => {
            complete_cmd::run_study(&storage, &route_id, activity_id)?;
        }
        Commands::Complete {
            route_id,
            activity_id,
        } => {
            complete_cmd::run_complete(&storage, &route_id, activity_id)?;
        }
        Commands::Notes { command } => match command {
            NotesCommands::Save {
                route_id,
                activity_id,
                content,
                stdin,
            } => {
                notes_cmd::run_save(&storage, &route_id, activity_id, content.as_deref(), stdin)?;
            }
            NotesCommands::List { search } => {
                notes_cmd::run_list(&storage, search.as_deref())?;
            }
            NotesCommands::Delete {
                route_id,
                activity_id,
            } => {
                notes_cmd::run_delete(&storage, &route_id, activity_id)?;
            }
        },
    }

    Ok(())
}
