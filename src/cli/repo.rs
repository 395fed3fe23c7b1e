//! Repo command - resolve a repository and where its pull requests go

use crate::cli::connect;
use crate::cli::style::{Stylize, arrow};
use gh_submit::api::resolve_repository;
use gh_submit::error::Result;
use gh_submit::remote::parse_repo_arg;

/// Run the repo command
pub async fn run_repo(hostname: &str, repo: &str) -> Result<()> {
    let slug = parse_repo_arg(repo, hostname)?;
    let transport = connect(&slug.hostname).await?;
    let repository = resolve_repository(&transport, &slug.hostname, &slug.owner, &slug.name).await?;

    let full_name = format!("{}/{}", repository.owner, repository.name);
    println!("{} {}", full_name.accent(), repository.id.muted());
    println!("  default branch: {}", repository.default_branch);

    if repository.is_fork {
        let (owner, name) = repository.upstream_owner_and_name();
        println!(
            "  fork {} {}/{} ({})",
            arrow(),
            owner.accent(),
            name.accent(),
            repository.base_branch()
        );
    }

    Ok(())
}
