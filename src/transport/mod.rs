//! Request transport
//!
//! Every call this crate makes to the service goes through
//! [`Transport::make_request`]. Without an endpoint the call targets the
//! GraphQL API and `params` must carry a `query` document; with an endpoint it
//! POSTs `params` to that REST resource path.

mod github;

pub use github::GitHubTransport;

use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

/// Request parameters: GraphQL document plus variables, or a REST body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    /// Empty parameter set (REST body)
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters for a GraphQL document
    pub fn query(document: &str) -> Self {
        Self::new().with("query", document)
    }

    /// Add a parameter
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Look up a parameter
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether a parameter is set
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The GraphQL document, if any
    pub fn document(&self) -> Option<&str> {
        self.0.get("query").and_then(Value::as_str)
    }

    /// Everything except the GraphQL document
    pub fn variables(&self) -> Map<String, Value> {
        self.0
            .iter()
            .filter(|(k, _)| k.as_str() != "query")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Transport for GraphQL and REST calls
///
/// Implementations convert every transport-level failure into
/// [`crate::error::Error::Service`] so callers see one failure model.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request and return the decoded JSON response body
    async fn make_request(
        &self,
        params: &Params,
        hostname: &str,
        endpoint: Option<&str>,
    ) -> Result<Value>;
}
