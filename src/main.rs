//! gh-submit - fork-aware pull request submission
//!
//! CLI binary for inspecting the GitHub state a submission works against.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use gh_submit::types::DEFAULT_HOSTNAME;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

#[derive(Parser)]
#[command(name = "gh-submit")]
#[command(about = "Fork-aware pull request submission for GitHub")]
#[command(version)]
struct Cli {
    /// GitHub hostname (defaults to $GH_HOST, then github.com)
    #[arg(long, global = true)]
    hostname: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a repository and the upstream its pull requests target
    Repo {
        /// `owner/name` or a remote URL
        repo: String,
    },

    /// Show an existing pull request
    Pr {
        /// Pull request URL
        url: String,
    },

    /// Print the authenticated user's login
    Whoami,

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test,
    /// Show authentication setup instructions
    Setup,
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // RUST_LOG wins when set
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let hostname = cli
        .hostname
        .or_else(|| env::var("GH_HOST").ok())
        .unwrap_or_else(|| DEFAULT_HOSTNAME.to_string());

    match cli.command {
        Commands::Repo { repo } => cli::run_repo(&hostname, &repo).await?,
        Commands::Pr { url } => cli::run_pr(&url).await?,
        Commands::Whoami => cli::run_whoami(&hostname).await?,
        Commands::Auth { action } => match action {
            AuthAction::Test => cli::run_auth_test(&hostname).await?,
            AuthAction::Setup => cli::run_auth_setup(),
        },
    }

    Ok(())
}
