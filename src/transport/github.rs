//! GitHub transport using octocrab

use crate::error::{Error, Result};
use crate::transport::{Params, Transport};
use crate::types::DEFAULT_HOSTNAME;
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Which of the two API shapes a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Api {
    GraphQl,
    Rest,
}

/// GitHub transport authenticated with a personal token
///
/// Clients are built once per base URI and reused. On `github.com` both API
/// shapes share octocrab's default base. On Enterprise hosts GraphQL lives at
/// `https://<host>/api/graphql` and REST under `https://<host>/api/v3`.
pub struct GitHubTransport {
    token: String,
    api_root: Option<String>,
    clients: Mutex<HashMap<Option<String>, Octocrab>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

impl GitHubTransport {
    /// Create a transport for the given token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_root: None,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Send every request under `api_root` (laid out like `https://<host>/api`)
    /// regardless of hostname
    #[must_use]
    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = Some(api_root.into().trim_end_matches('/').to_string());
        self
    }

    /// Base URI for `api` on `hostname`; `None` means octocrab's default
    fn base_uri(&self, hostname: &str, api: Api) -> Option<String> {
        let root = match &self.api_root {
            Some(root) => root.clone(),
            None if hostname == DEFAULT_HOSTNAME => return None,
            None => format!("https://{hostname}/api"),
        };

        Some(match api {
            Api::GraphQl => root,
            Api::Rest => format!("{root}/v3"),
        })
    }

    fn client(&self, hostname: &str, api: Api) -> Result<Octocrab> {
        let base_uri = self.base_uri(hostname, api);
        let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(client) = clients.get(&base_uri) {
            return Ok(client.clone());
        }

        let mut builder = Octocrab::builder().personal_token(self.token.clone());
        if let Some(ref uri) = base_uri {
            builder = builder.base_uri(uri)?;
        }
        let client = builder.build()?;

        clients.insert(base_uri, client.clone());
        Ok(client)
    }

    #[cfg(test)]
    fn cached_clients(&self) -> usize {
        self.clients
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl Transport for GitHubTransport {
    async fn make_request(
        &self,
        params: &Params,
        hostname: &str,
        endpoint: Option<&str>,
    ) -> Result<Value> {
        match endpoint {
            None => {
                let document = params.document().ok_or_else(|| {
                    Error::InvalidRequest("GraphQL request without a query".to_string())
                })?;
                let payload = json!({
                    "query": document,
                    "variables": params.variables(),
                });
                let client = self.client(hostname, Api::GraphQl)?;
                let body: Value = client.graphql(&payload).await?;
                check_graphql_errors(&body)?;
                Ok(body)
            }
            Some(endpoint) => {
                let route = format!("/{}", endpoint.trim_start_matches('/'));
                let client = self.client(hostname, Api::Rest)?;
                let body: Value = client.post(route, Some(params)).await?;
                Ok(body)
            }
        }
    }
}

/// GraphQL reports failures in the body of a successful response
fn check_graphql_errors(body: &Value) -> Result<()> {
    let Some(errors) = body.get("errors").filter(|e| !e.is_null()) else {
        return Ok(());
    };

    let parsed: Vec<GraphQlError> = serde_json::from_value(errors.clone()).unwrap_or_default();
    if parsed.is_empty() {
        if errors.as_array().is_some_and(Vec::is_empty) {
            return Ok(());
        }
        return Err(Error::Service(errors.to_string()));
    }

    let messages: Vec<String> = parsed.into_iter().map(|e| e.message).collect();
    Err(Error::Service(messages.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_body_without_errors() {
        let body = json!({ "data": { "viewer": { "login": "octocat" } } });
        assert!(check_graphql_errors(&body).is_ok());
    }

    #[test]
    fn test_graphql_errors_become_service_error() {
        let body = json!({
            "data": null,
            "errors": [
                { "message": "Could not resolve to a Repository" },
                { "message": "Something else" }
            ]
        });
        let err = check_graphql_errors(&body).unwrap_err();
        assert!(matches!(err, Error::Service(_)));
        assert!(err.to_string().contains("Could not resolve to a Repository"));
        assert!(err.to_string().contains("Something else"));
    }

    #[test]
    fn test_unstructured_graphql_errors_kept_verbatim() {
        let body = json!({ "errors": "rate limited" });
        let err = check_graphql_errors(&body).unwrap_err();
        assert_eq!(err.to_string(), "\"rate limited\"");
    }

    #[test]
    fn test_github_com_uses_default_base() {
        let transport = GitHubTransport::new("token");
        assert_eq!(transport.base_uri(DEFAULT_HOSTNAME, Api::GraphQl), None);
        assert_eq!(transport.base_uri(DEFAULT_HOSTNAME, Api::Rest), None);
    }

    #[test]
    fn test_enterprise_graphql_and_rest_bases_differ() {
        let transport = GitHubTransport::new("token");
        assert_eq!(
            transport.base_uri("git.corp.example", Api::GraphQl).as_deref(),
            Some("https://git.corp.example/api")
        );
        assert_eq!(
            transport.base_uri("git.corp.example", Api::Rest).as_deref(),
            Some("https://git.corp.example/api/v3")
        );
    }

    #[test]
    fn test_api_root_overrides_hostname() {
        let transport = GitHubTransport::new("token").with_api_root("http://127.0.0.1:8080/api/");
        assert_eq!(
            transport.base_uri(DEFAULT_HOSTNAME, Api::GraphQl).as_deref(),
            Some("http://127.0.0.1:8080/api")
        );
        assert_eq!(
            transport.base_uri("git.corp.example", Api::Rest).as_deref(),
            Some("http://127.0.0.1:8080/api/v3")
        );
    }

    #[test]
    fn test_clients_are_built_once_per_base() {
        let transport = GitHubTransport::new("token");
        tokio_test::block_on(async {
            transport.client(DEFAULT_HOSTNAME, Api::GraphQl).unwrap();
            transport.client(DEFAULT_HOSTNAME, Api::Rest).unwrap();
            transport.client(DEFAULT_HOSTNAME, Api::GraphQl).unwrap();
            assert_eq!(transport.cached_clients(), 1);

            transport.client("git.corp.example", Api::GraphQl).unwrap();
            transport.client("git.corp.example", Api::Rest).unwrap();
            transport.client("git.corp.example", Api::Rest).unwrap();
            assert_eq!(transport.cached_clients(), 3);
        });
    }
}
