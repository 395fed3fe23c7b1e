//! GitHub authentication

use crate::auth::AuthSource;
use crate::error::{Error, Result};
use std::env;
use tokio::process::Command;
use tracing::debug;

/// GitHub authentication configuration
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// Authentication token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
    /// Hostname the token is valid for
    pub hostname: String,
}

/// Get GitHub authentication for a hostname
///
/// Priority:
/// 1. gh CLI (`gh auth token --hostname <host>`)
/// 2. `GITHUB_TOKEN` environment variable
/// 3. `GH_TOKEN` environment variable
pub async fn get_github_auth(hostname: &str) -> Result<GitHubAuthConfig> {
    if let Some(token) = get_gh_cli_token(hostname).await {
        return Ok(GitHubAuthConfig {
            token,
            source: AuthSource::Cli,
            hostname: hostname.to_string(),
        });
    }

    for var in ["GITHUB_TOKEN", "GH_TOKEN"] {
        if let Ok(token) = env::var(var) {
            debug!(var, "using token from environment");
            return Ok(GitHubAuthConfig {
                token,
                source: AuthSource::EnvVar,
                hostname: hostname.to_string(),
            });
        }
    }

    Err(Error::Auth(format!(
        "No GitHub authentication found for {hostname}. Run `gh auth login --hostname {hostname}` or set GITHUB_TOKEN"
    )))
}

async fn get_gh_cli_token(hostname: &str) -> Option<String> {
    // Check authenticated
    let status = Command::new("gh")
        .args(["auth", "status", "--hostname", hostname])
        .output()
        .await
        .ok()?;

    if !status.status.success() {
        return None;
    }

    let output = Command::new("gh")
        .args(["auth", "token", "--hostname", hostname])
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        None
    } else {
        debug!(hostname, "using token from gh CLI");
        Some(token)
    }
}
