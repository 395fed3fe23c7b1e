//! Error types for gh-submit

use thiserror::Error;

/// Result type used by every fallible operation in the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by gh-submit operations
#[derive(Debug, Error)]
pub enum Error {
    /// Raw failure text returned by the transport or the service
    #[error("{0}")]
    Service(String),

    /// The repository has no default branch, most likely because it is empty
    #[error(
        "This repository has no default branch. This is likely because it is empty.\n\n\
         Consider using https://{hostname}/{owner}/{name}/new/main to initialize your\n\
         repository."
    )]
    EmptyRepository {
        /// Host the repository lives on
        hostname: String,
        /// Repository owner
        owner: String,
        /// Repository name
        name: String,
    },

    /// The service answered, but without the fields we read
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// A request could not be built
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No usable credentials
    #[error("authentication error: {0}")]
    Auth(String),

    /// Remote or pull request URL parsing failed
    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Raw message for service failures; the rendered message otherwise
    pub fn raw_message(&self) -> String {
        match self {
            Self::Service(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => {
                let mut msg = source.message.clone();
                if let Some(errors) = source.errors.as_ref().filter(|e| !e.is_empty()) {
                    if let Ok(detail) = serde_json::to_string(errors) {
                        msg.push_str(": ");
                        msg.push_str(&detail);
                    }
                }
                Self::Service(msg)
            }
            other => Self::Service(other.to_string()),
        }
    }
}
