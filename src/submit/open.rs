//! Opening and updating pull requests

use crate::api::{
    NewPullRequest, create_pull_request, get_pull_request_details, reserve_pull_request_number,
    update_pull_request,
};
use crate::error::{Error, Result};
use crate::transport::Transport;
use crate::types::{PullRequestDetails, PullRequestReference, Repository};
use serde_json::Value;
use tracing::{info, warn};

/// A pull request created by [`open_pull_request`]
#[derive(Debug, Clone)]
pub struct OpenedPullRequest {
    /// Number reserved by the placeholder issue
    pub number: u64,
    /// Creation response, as returned by the service
    pub response: Value,
}

/// Open a pull request for `head_branch` against the repository's upstream
///
/// The pull request targets `repo.base_branch()` in
/// `repo.upstream_owner_and_name()`. When `repo` is a fork the head is
/// qualified with the fork's owner.
///
/// If conversion fails, the placeholder issue is logged and left open, and
/// the conversion error is returned unchanged.
pub async fn open_pull_request(
    transport: &dyn Transport,
    repo: &Repository,
    head_branch: &str,
    body: &str,
    is_draft: bool,
) -> Result<OpenedPullRequest> {
    let (owner, name) = repo.upstream_owner_and_name();
    let number = reserve_pull_request_number(transport, &repo.hostname, owner, name).await?;

    let head = if repo.upstream.is_some() {
        format!("{}:{head_branch}", repo.owner)
    } else {
        head_branch.to_string()
    };

    let new_pr = NewPullRequest {
        hostname: &repo.hostname,
        owner,
        name,
        base: repo.base_branch(),
        head: &head,
        body,
        issue: number,
        is_draft,
    };

    match create_pull_request(transport, &new_pr).await {
        Ok(response) => {
            info!(hostname = %repo.hostname, owner, name, number, "opened pull request");
            Ok(OpenedPullRequest { number, response })
        }
        Err(e) => {
            warn!(
                hostname = %repo.hostname,
                owner,
                name,
                issue = number,
                error = %e,
                "pull request creation failed; placeholder issue left open"
            );
            Err(e)
        }
    }
}

/// Rewrite title and body of an existing pull request
///
/// Returns the details read before the update.
pub async fn update_existing_pull_request(
    transport: &dyn Transport,
    pr: &PullRequestReference,
    title: &str,
    body: &str,
) -> Result<PullRequestDetails> {
    let details = get_pull_request_details(transport, pr).await?;
    let node_id = update_pull_request(transport, &pr.hostname, &details.node_id, title, body).await?;

    if node_id != details.node_id {
        return Err(Error::UnexpectedResponse(format!(
            "updated pull request {node_id}, expected {}",
            details.node_id
        )));
    }

    Ok(details)
}
