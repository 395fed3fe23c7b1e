//! Auth command - test and manage authentication

use crate::cli::style::{Stylize, check};
use gh_submit::api::get_username;
use gh_submit::auth::get_github_auth;
use gh_submit::error::Result;
use gh_submit::transport::GitHubTransport;

/// Run the auth test command
pub async fn run_auth_test(hostname: &str) -> Result<()> {
    println!("Testing GitHub authentication for {}...", hostname.accent());
    let config = get_github_auth(hostname).await?;
    let transport = GitHubTransport::new(config.token.clone());
    let username = get_username(&transport, hostname).await?;
    println!("{} Authenticated as: {}", check(), username.emphasis());
    println!("{}", format!("Token source: {:?}", config.source).muted());
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("GitHub Authentication Setup");
    println!("===========================");
    println!();
    println!("Option 1: GitHub CLI (recommended)");
    println!("  Install: https://cli.github.com/");
    println!("  Run: gh auth login");
    println!();
    println!("Option 2: Environment variable");
    println!("  Set GITHUB_TOKEN or GH_TOKEN");
    println!();
    println!("For GitHub Enterprise:");
    println!("  Set GH_HOST to your instance hostname, or pass --hostname");
}

