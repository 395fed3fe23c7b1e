//! End-to-end tests with real GitHub API
//!
//! These tests require:
//! - `GH_SUBMIT_E2E_TESTS=1` environment variable
//! - `gh` CLI authenticated, or `GITHUB_TOKEN` set
//!
//! Run with: `GH_SUBMIT_E2E_TESTS=1 cargo test --test e2e_tests -- --include-ignored`

use gh_submit::api::{get_pull_request_details, get_username, resolve_repository};
use gh_submit::auth::get_github_auth;
use gh_submit::transport::GitHubTransport;
use gh_submit::types::{DEFAULT_HOSTNAME, PullRequestReference};
use std::env;

/// Check if E2E tests should run
fn e2e_enabled() -> bool {
    env::var("GH_SUBMIT_E2E_TESTS").is_ok()
}

async fn transport() -> Option<GitHubTransport> {
    if !e2e_enabled() {
        return None;
    }
    let auth = get_github_auth(DEFAULT_HOSTNAME).await.ok()?;
    Some(GitHubTransport::new(auth.token))
}

#[tokio::test]
#[ignore = "requires GitHub credentials"]
async fn test_e2e_get_username() {
    let Some(transport) = transport().await else {
        return;
    };

    let login = get_username(&transport, DEFAULT_HOSTNAME).await.unwrap();
    assert!(!login.is_empty());
}

#[tokio::test]
#[ignore = "requires GitHub credentials"]
async fn test_e2e_resolve_non_fork_repository() {
    let Some(transport) = transport().await else {
        return;
    };

    // Spoon-Knife is not itself a fork
    let repo = resolve_repository(&transport, DEFAULT_HOSTNAME, "octocat", "Spoon-Knife")
        .await
        .unwrap();
    assert!(!repo.is_fork);
    assert_eq!(repo.base_branch(), repo.default_branch);
}

#[tokio::test]
#[ignore = "requires GitHub credentials"]
async fn test_e2e_get_pull_request_details() {
    let Some(transport) = transport().await else {
        return;
    };

    let pr = PullRequestReference::new("octocat", "Hello-World", 1);
    let details = get_pull_request_details(&transport, &pr).await.unwrap();
    assert_eq!(details.number, 1);
    assert!(details.url.ends_with("/pull/1"));
}
