//! Pull request reads, two-phase creation, and updates
//!
//! Creation cannot pick its own number, so a placeholder issue is created
//! first ([`reserve_pull_request_number`]) and then converted into the pull
//! request ([`create_pull_request`]). If the conversion fails the placeholder
//! issue stays open: a forbidden conversion implies closing is forbidden too,
//! and a rate-limited or rejected endpoint is unlikely to accept a close
//! request either. Callers log the orphaned number instead of cleaning up.

use crate::api::request::{graphql, rest, rest_raw};
use crate::error::{Error, Result};
use crate::queries;
use crate::transport::{Params, Transport};
use crate::types::{PullRequestDetails, PullRequestReference};
use serde::Deserialize;
use serde_json::Value;

/// Title of the issue created to reserve a pull request number
pub const PLACEHOLDER_ISSUE_TITLE: &str = "placeholder for pull request";

#[derive(Deserialize)]
struct PullRequestData {
    repository: Option<PullRequestRepository>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestRepository {
    pull_request: Option<PullRequestNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestNode {
    id: String,
    url: String,
    head_ref_oid: String,
    head_ref_name: String,
}

#[derive(Deserialize)]
struct CreatedIssue {
    number: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePullRequestData {
    update_pull_request: UpdatePullRequestPayload,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePullRequestPayload {
    pull_request: UpdatedPullRequest,
}

#[derive(Deserialize)]
struct UpdatedPullRequest {
    id: String,
}

/// Parameters for converting a reserved issue into a pull request
///
/// There is no title: `issue` and `title` are mutually exclusive, and the
/// pull request inherits the issue's number.
#[derive(Debug, Clone)]
pub struct NewPullRequest<'a> {
    /// Hostname the pull request is opened on
    pub hostname: &'a str,
    /// Owner of the repository receiving the pull request
    pub owner: &'a str,
    /// Name of the repository receiving the pull request
    pub name: &'a str,
    /// Branch to merge into
    pub base: &'a str,
    /// Branch holding the changes
    pub head: &'a str,
    /// Pull request description
    pub body: &'a str,
    /// Number returned by [`reserve_pull_request_number`]
    pub issue: u64,
    /// Open as a draft
    pub is_draft: bool,
}

/// Fetch the node ID, URL and head of an existing pull request
pub async fn get_pull_request_details(
    transport: &dyn Transport,
    pr: &PullRequestReference,
) -> Result<PullRequestDetails> {
    let params = Params::query(queries::GET_PULL_REQUEST)
        .with("owner", pr.owner.as_str())
        .with("name", pr.name.as_str())
        .with("number", pr.number);

    let data: PullRequestData = graphql(transport, &params, &pr.hostname).await?;
    let node = data
        .repository
        .and_then(|repo| repo.pull_request)
        .ok_or_else(|| Error::UnexpectedResponse(format!("pull request {pr} not found")))?;

    Ok(PullRequestDetails {
        node_id: node.id,
        number: pr.number,
        url: node.url,
        head_oid: node.head_ref_oid,
        head_branch_name: node.head_ref_name,
    })
}

/// Create a placeholder issue and return its number
pub async fn reserve_pull_request_number(
    transport: &dyn Transport,
    hostname: &str,
    owner: &str,
    name: &str,
) -> Result<u64> {
    let endpoint = format!("repos/{owner}/{name}/issues");
    let params = Params::new().with("title", PLACEHOLDER_ISSUE_TITLE);

    let issue: CreatedIssue = rest(transport, &params, hostname, &endpoint).await?;
    Ok(issue.number)
}

/// Convert a reserved issue into a pull request
///
/// Returns the raw creation response. On failure nothing is done about the
/// placeholder issue; see the module docs.
pub async fn create_pull_request(
    transport: &dyn Transport,
    pr: &NewPullRequest<'_>,
) -> Result<Value> {
    let endpoint = format!("repos/{}/{}/pulls", pr.owner, pr.name);
    let params = Params::new()
        .with("base", pr.base)
        .with("head", pr.head)
        .with("body", pr.body)
        .with("issue", pr.issue)
        .with("draft", pr.is_draft);

    rest_raw(transport, &params, pr.hostname, &endpoint).await
}

/// Update title and body, returning the pull request's node ID
///
/// The returned ID should equal `node_id`.
pub async fn update_pull_request(
    transport: &dyn Transport,
    hostname: &str,
    node_id: &str,
    title: &str,
    body: &str,
) -> Result<String> {
    let params = Params::query(queries::UPDATE_PULL_REQUEST)
        .with("pullRequestId", node_id)
        .with("title", title)
        .with("body", body);

    let data: UpdatePullRequestData = graphql(transport, &params, hostname).await?;
    Ok(data.update_pull_request.pull_request.id)
}
