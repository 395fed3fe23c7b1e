//! Test data factories for gh-submit types and response bodies
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use gh_submit::types::Repository;
use serde_json::{Value, json};

pub const HOST: &str = "github.com";

/// A repository node as returned by `GET_REPOSITORY`
pub fn repo_node(owner: &str, name: &str, default_branch: Option<&str>, is_fork: bool) -> Value {
    json!({
        "id": format!("R_{owner}_{name}"),
        "owner": { "id": format!("U_{owner}"), "login": owner },
        "name": name,
        "isFork": is_fork,
        "defaultBranchRef": default_branch.map(|b| json!({ "name": b })),
    })
}

/// Attach a parent to a repository node
pub fn with_parent(mut node: Value, parent: Value) -> Value {
    node["parent"] = parent;
    node
}

/// Full `GET_REPOSITORY` response body
pub fn repository_response(mut node: Value) -> Value {
    if node.get("parent").is_none() {
        node["parent"] = Value::Null;
    }
    json!({ "data": { "repository": node } })
}

/// Repository value without upstream
pub fn make_repository(owner: &str, name: &str, default_branch: &str) -> Repository {
    Repository {
        id: format!("R_{owner}_{name}"),
        hostname: HOST.to_string(),
        owner: owner.to_string(),
        name: name.to_string(),
        default_branch: default_branch.to_string(),
        is_fork: false,
        upstream: None,
    }
}

/// Fork of `upstream` owned by `owner`
pub fn make_fork(owner: &str, upstream: Repository) -> Repository {
    Repository {
        is_fork: true,
        upstream: Some(Box::new(upstream.clone())),
        ..make_repository(owner, &upstream.name, &upstream.default_branch)
    }
}

/// Issue creation response
pub fn issue_response(number: u64) -> Value {
    json!({
        "number": number,
        "title": "placeholder for pull request",
        "html_url": format!("https://github.com/acme/widgets/issues/{number}"),
    })
}

/// Pull request creation response
pub fn pull_response(number: u64) -> Value {
    json!({
        "number": number,
        "node_id": format!("PR_{number}"),
        "html_url": format!("https://github.com/acme/widgets/pull/{number}"),
        "draft": false,
    })
}
