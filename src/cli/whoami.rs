//! Whoami command - print the authenticated login

use crate::cli::connect;
use gh_submit::api::get_username;
use gh_submit::error::Result;

/// Run the whoami command
pub async fn run_whoami(hostname: &str) -> Result<()> {
    let transport = connect(hostname).await?;
    println!("{}", get_username(&transport, hostname).await?);
    Ok(())
}
