//! Repository identification from remote URLs

use crate::error::{Error, Result};
use crate::types::RepoSlug;
use regex::Regex;

/// Parse hostname, owner and name from a git remote URL
///
/// Accepts SSH (`git@host:owner/repo.git`) and HTTPS
/// (`https://host/owner/repo.git`) forms.
pub fn parse_remote_url(url: &str) -> Result<RepoSlug> {
    let hostname = extract_hostname(url)
        .ok_or_else(|| Error::Parse(format!("cannot find host in remote URL: {url}")))?;

    let re_ssh = Regex::new(r"^(?:ssh://)?git@[^:/]+[:/](.+?)(?:\.git)?/?$")
        .map_err(|e| Error::Parse(e.to_string()))?;
    let re_https =
        Regex::new(r"^https?://[^/]+/(.+?)(?:\.git)?/?$").map_err(|e| Error::Parse(e.to_string()))?;

    let path = re_ssh
        .captures(url)
        .or_else(|| re_https.captures(url))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::Parse(format!("cannot parse remote URL: {url}")))?;

    split_owner_and_name(path).map(|(owner, name)| RepoSlug {
        hostname,
        owner,
        name,
    })
}

/// Parse either `owner/name` on `default_hostname` or a full remote URL
pub fn parse_repo_arg(arg: &str, default_hostname: &str) -> Result<RepoSlug> {
    if arg.contains("://") || arg.starts_with("git@") {
        return parse_remote_url(arg);
    }

    split_owner_and_name(arg).map(|(owner, name)| RepoSlug {
        hostname: default_hostname.to_string(),
        owner,
        name,
    })
}

fn split_owner_and_name(path: &str) -> Result<(String, String)> {
    match path.split('/').collect::<Vec<_>>().as_slice() {
        [owner, name] if !owner.is_empty() && !name.is_empty() => {
            Ok(((*owner).to_string(), (*name).to_string()))
        }
        _ => Err(Error::Parse(format!("invalid repo path: {path}"))),
    }
}

fn extract_hostname(url: &str) -> Option<String> {
    // SSH format
    if let Some(rest) = url.strip_prefix("git@") {
        return rest.split(':').next().map(ToString::to_string);
    }

    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(ToString::to_string))
}
