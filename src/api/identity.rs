//! Authenticated user lookup

use crate::api::request::graphql;
use crate::error::Result;
use crate::queries;
use crate::transport::{Params, Transport};
use serde::Deserialize;

#[derive(Deserialize)]
struct ViewerData {
    viewer: Viewer,
}

#[derive(Deserialize)]
struct Viewer {
    login: String,
}

/// Login of the user the transport is authenticated as
///
/// This is a network round trip; reading the gh CLI's hosts file is faster
/// when it is available.
pub async fn get_username(transport: &dyn Transport, hostname: &str) -> Result<String> {
    let params = Params::query(queries::GET_LOGIN);
    let data: ViewerData = graphql(transport, &params, hostname).await?;
    Ok(data.viewer.login)
}
