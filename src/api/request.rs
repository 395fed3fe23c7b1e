//! Shared request plumbing
//!
//! Decodes the two response shapes into typed values. Errors from the
//! transport pass through untouched.

use crate::error::{Error, Result};
use crate::transport::{Params, Transport};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

#[derive(Deserialize)]
struct GraphQlEnvelope<T> {
    data: Option<T>,
}

/// Run a GraphQL document and decode its `data`
pub(crate) async fn graphql<T: DeserializeOwned>(
    transport: &dyn Transport,
    params: &Params,
    hostname: &str,
) -> Result<T> {
    debug!(hostname, "graphql request");
    let body = transport.make_request(params, hostname, None).await?;
    let envelope: GraphQlEnvelope<T> = decode(body)?;
    envelope
        .data
        .ok_or_else(|| Error::UnexpectedResponse("GraphQL response has no data".to_string()))
}

/// POST to a REST endpoint and return the raw body
pub(crate) async fn rest_raw(
    transport: &dyn Transport,
    params: &Params,
    hostname: &str,
    endpoint: &str,
) -> Result<Value> {
    debug!(hostname, endpoint, "rest request");
    transport.make_request(params, hostname, Some(endpoint)).await
}

/// POST to a REST endpoint and decode the body
pub(crate) async fn rest<T: DeserializeOwned>(
    transport: &dyn Transport,
    params: &Params,
    hostname: &str,
    endpoint: &str,
) -> Result<T> {
    decode(rest_raw(transport, params, hostname, endpoint).await?)
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T> {
    serde_json::from_value(body).map_err(|e| Error::UnexpectedResponse(e.to_string()))
}
