//! Repository resolution with one level of fork ancestry

use crate::api::request::graphql;
use crate::error::{Error, Result};
use crate::queries;
use crate::transport::{Params, Transport};
use crate::types::Repository;
use serde::Deserialize;

#[derive(Deserialize)]
struct RepositoryData {
    repository: Option<RepositoryNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    id: String,
    owner: Owner,
    name: String,
    is_fork: bool,
    default_branch_ref: Option<BranchRef>,
    #[serde(default)]
    parent: Option<Box<RepositoryNode>>,
}

#[derive(Deserialize)]
struct Owner {
    login: String,
}

#[derive(Deserialize)]
struct BranchRef {
    name: String,
}

/// Fetch a repository and, if it is a fork, its immediate parent
///
/// Fails with [`Error::EmptyRepository`] when either the repository or its
/// parent has no default branch. Only one hop of ancestry is resolved: the
/// returned upstream never has an upstream of its own.
pub async fn resolve_repository(
    transport: &dyn Transport,
    hostname: &str,
    owner: &str,
    name: &str,
) -> Result<Repository> {
    let params = Params::query(queries::GET_REPOSITORY)
        .with("owner", owner)
        .with("name", name);

    let data: RepositoryData = graphql(transport, &params, hostname).await?;
    let node = data.repository.ok_or_else(|| {
        Error::UnexpectedResponse(format!("repository {owner}/{name} not found on {hostname}"))
    })?;

    parse_repository(node, hostname, true)
}

fn parse_repository(
    node: RepositoryNode,
    hostname: &str,
    follow_parent: bool,
) -> Result<Repository> {
    let upstream = match node.parent {
        Some(parent) if follow_parent => {
            Some(Box::new(parse_repository(*parent, hostname, false)?))
        }
        _ => None,
    };

    let Some(branch_ref) = node.default_branch_ref else {
        return Err(Error::EmptyRepository {
            hostname: hostname.to_string(),
            owner: node.owner.login,
            name: node.name,
        });
    };

    Ok(Repository {
        id: node.id,
        hostname: hostname.to_string(),
        owner: node.owner.login,
        name: node.name,
        default_branch: branch_ref.name,
        is_fork: node.is_fork,
        upstream,
    })
}
