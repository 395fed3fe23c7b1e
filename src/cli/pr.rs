//! Pr command - show an existing pull request

use crate::cli::connect;
use crate::cli::style::Stylize;
use gh_submit::api::get_pull_request_details;
use gh_submit::error::Result;
use gh_submit::types::PullRequestReference;

/// Run the pr command
pub async fn run_pr(url: &str) -> Result<()> {
    let pr = PullRequestReference::parse_url(url)?;
    let transport = connect(&pr.hostname).await?;
    let details = get_pull_request_details(&transport, &pr).await?;

    let number = format!("#{}", details.number);
    println!("{} {}", number.accent(), details.node_id.muted());
    println!("  {}", details.url);
    println!(
        "  head: {} @ {}",
        details.head_branch_name.emphasis(),
        details.head_oid
    );
    Ok(())
}
