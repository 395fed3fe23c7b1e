//! CLI commands
//!
//! Command implementations for the `gh-submit` binary.

mod auth;
mod pr;
mod repo;
pub mod style;
mod whoami;

pub use auth::{run_auth_setup, run_auth_test};
pub use pr::run_pr;
pub use repo::run_repo;
pub use whoami::run_whoami;

use gh_submit::auth::get_github_auth;
use gh_submit::error::Result;
use gh_submit::transport::GitHubTransport;

/// Authenticate against `hostname` and build a transport for it
async fn connect(hostname: &str) -> Result<GitHubTransport> {
    let auth = get_github_auth(hostname).await?;
    Ok(GitHubTransport::new(auth.token))
}
