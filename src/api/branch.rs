//! Branch creation and server-side merges

use crate::api::request::graphql;
use crate::error::{Error, Result};
use crate::queries;
use crate::transport::{Params, Transport};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateRefData {
    create_ref: CreateRefPayload,
}

#[derive(Deserialize)]
struct CreateRefPayload {
    #[serde(rename = "ref")]
    git_ref: NodeId,
}

#[derive(Deserialize)]
struct NodeId {
    id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MergeBranchData {
    merge_branch: MergeBranchPayload,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MergeBranchPayload {
    merge_commit: Option<MergeCommit>,
}

#[derive(Deserialize)]
struct MergeCommit {
    oid: String,
}

/// Create `refs/heads/<branch_name>` at `oid`, returning the new ref's ID
pub async fn create_branch(
    transport: &dyn Transport,
    hostname: &str,
    repo_id: &str,
    branch_name: &str,
    oid: &str,
) -> Result<String> {
    let params = Params::query(queries::CREATE_BRANCH)
        .with("repositoryId", repo_id)
        .with("name", format!("refs/heads/{branch_name}"))
        .with("oid", oid);

    let data: CreateRefData = graphql(transport, &params, hostname).await?;
    Ok(data.create_ref.git_ref.id)
}

/// Merge `oid_to_merge` into `branch_name` on the server
///
/// Returns the oid of the resulting merge commit, which is generally not
/// `oid_to_merge`.
pub async fn merge_into_branch(
    transport: &dyn Transport,
    hostname: &str,
    repo_id: &str,
    oid_to_merge: &str,
    branch_name: &str,
) -> Result<String> {
    let params = Params::query(queries::MERGE_BRANCH)
        .with("repositoryId", repo_id)
        .with("base", branch_name)
        .with("head", oid_to_merge);

    let data: MergeBranchData = graphql(transport, &params, hostname).await?;
    data.merge_branch
        .merge_commit
        .map(|c| c.oid)
        .ok_or_else(|| {
            Error::UnexpectedResponse(format!(
                "merging {oid_to_merge} into {branch_name} produced no merge commit"
            ))
        })
}
