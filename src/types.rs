//! Core types for gh-submit

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hostname used when none is configured
pub const DEFAULT_HOSTNAME: &str = "github.com";

/// A hosted repository, resolved against the service
///
/// For a fork, `upstream` holds the immediate parent only. A fork of a fork
/// never resolves past its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Node ID, used by other API calls
    pub id: String,
    /// `github.com` or a GitHub Enterprise hostname
    pub hostname: String,
    /// Organization or user owning the repository
    pub owner: String,
    /// Repository name within the owner
    pub name: String,
    /// Name of the default branch
    pub default_branch: String,
    /// Whether the service reports this repository as a fork
    pub is_fork: bool,
    /// Immediate parent, when this is a fork
    pub upstream: Option<Box<Repository>>,
}

impl Repository {
    /// Branch that pull requests should target
    pub fn base_branch(&self) -> &str {
        self.upstream
            .as_deref()
            .map_or(&self.default_branch, |up| &up.default_branch)
    }

    /// Owner and name that pull requests should be opened against
    pub fn upstream_owner_and_name(&self) -> (&str, &str) {
        match self.upstream.as_deref() {
            Some(up) => (&up.owner, &up.name),
            None => (&self.owner, &self.name),
        }
    }
}

/// Identifies a pull request before its node ID is known
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestReference {
    /// Hostname the pull request lives on
    pub hostname: String,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Pull request number
    pub number: u64,
}

impl PullRequestReference {
    /// Reference on `github.com`
    pub fn new(owner: impl Into<String>, name: impl Into<String>, number: u64) -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            owner: owner.into(),
            name: name.into(),
            number,
        }
    }

    /// Same reference on another host
    #[must_use]
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    /// Parse `https://<host>/<owner>/<name>/pull/<number>`
    pub fn parse_url(input: &str) -> Result<Self> {
        let url = url::Url::parse(input)
            .map_err(|e| Error::Parse(format!("invalid pull request URL {input}: {e}")))?;
        let hostname = url
            .host_str()
            .ok_or_else(|| Error::Parse(format!("no host in pull request URL: {input}")))?;

        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|p| !p.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [owner, name, "pull", number, ..] => {
                let number = number
                    .parse()
                    .map_err(|_| Error::Parse(format!("invalid pull request number: {number}")))?;
                Ok(Self::new(*owner, *name, number).with_hostname(hostname))
            }
            _ => Err(Error::Parse(format!("not a pull request URL: {input}"))),
        }
    }
}

impl fmt::Display for PullRequestReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "https://{}/{}/{}/pull/{}",
            self.hostname, self.owner, self.name, self.number
        )
    }
}

/// An existing pull request as read from the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestDetails {
    /// Node ID, used by mutations
    pub node_id: String,
    /// Pull request number
    pub number: u64,
    /// Web URL
    pub url: String,
    /// Commit at the tip of the head branch
    pub head_oid: String,
    /// Head branch name
    pub head_branch_name: String,
}

/// Hostname, owner and name of a repository, before resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSlug {
    /// `github.com` or a GitHub Enterprise hostname
    pub hostname: String,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub name: String,
}
