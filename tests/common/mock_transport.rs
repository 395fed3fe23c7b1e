//! Mock transport for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use gh_submit::error::{Error, Result};
use gh_submit::transport::{Params, Transport};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Call record for `make_request`
#[derive(Debug, Clone, PartialEq)]
pub struct RequestCall {
    pub hostname: String,
    pub endpoint: Option<String>,
    pub params: Params,
}

impl RequestCall {
    /// GraphQL document sent with this call, if any
    pub fn document(&self) -> Option<&str> {
        self.params.document()
    }
}

/// Scripted transport
///
/// Responses are queued per route: the GraphQL document text for GraphQL
/// calls, the endpoint path for REST calls. Each call pops the next queued
/// response; an unscripted call fails with a service error.
pub struct MockTransport {
    responses: Mutex<HashMap<String, VecDeque<std::result::Result<Value, String>>>>,
    calls: Mutex<Vec<RequestCall>>,
}

fn route(params: &Params, endpoint: Option<&str>) -> String {
    match endpoint {
        Some(endpoint) => format!("rest:{endpoint}"),
        None => format!("graphql:{}", params.document().unwrap_or_default()),
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn push(&self, key: String, response: std::result::Result<Value, String>) {
        self.responses
            .lock()
            .unwrap()
            .entry(key)
            .or_default()
            .push_back(response);
    }

    // === Scripting methods ===

    /// Queue a response for a GraphQL document
    pub fn respond_graphql(&self, document: &str, body: Value) {
        self.push(format!("graphql:{document}"), Ok(body));
    }

    /// Queue a failure for a GraphQL document
    pub fn fail_graphql(&self, document: &str, msg: &str) {
        self.push(format!("graphql:{document}"), Err(msg.to_string()));
    }

    /// Queue a response for a REST endpoint
    pub fn respond_rest(&self, endpoint: &str, body: Value) {
        self.push(format!("rest:{endpoint}"), Ok(body));
    }

    /// Queue a failure for a REST endpoint
    pub fn fail_rest(&self, endpoint: &str, msg: &str) {
        self.push(format!("rest:{endpoint}"), Err(msg.to_string()));
    }

    // === Call verification methods ===

    /// All calls, in order
    pub fn calls(&self) -> Vec<RequestCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls made to a REST endpoint
    pub fn rest_calls(&self, endpoint: &str) -> Vec<RequestCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.endpoint.as_deref() == Some(endpoint))
            .collect()
    }

    /// Calls made with a GraphQL document
    pub fn graphql_calls(&self, document: &str) -> Vec<RequestCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.endpoint.is_none() && c.document() == Some(document))
            .collect()
    }

    /// Assert that exactly `count` calls were made in total
    pub fn assert_call_count(&self, count: usize) {
        let calls = self.calls();
        assert_eq!(calls.len(), count, "unexpected calls: {calls:?}");
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn make_request(
        &self,
        params: &Params,
        hostname: &str,
        endpoint: Option<&str>,
    ) -> Result<Value> {
        self.calls.lock().unwrap().push(RequestCall {
            hostname: hostname.to_string(),
            endpoint: endpoint.map(ToString::to_string),
            params: params.clone(),
        });

        let key = route(params, endpoint);
        let next = self
            .responses
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(VecDeque::pop_front);

        match next {
            Some(Ok(body)) => Ok(body),
            Some(Err(msg)) => Err(Error::Service(msg)),
            None => Err(Error::Service(format!("no response scripted for {key}"))),
        }
    }
}
