//! GitHub operations used by pull request submission
//!
//! Each operation is a single round trip through a [`Transport`] (the
//! two-phase pull request creation is two separate operations). None of them
//! hold state between calls, so distinct targets can be driven concurrently.
//!
//! [`Transport`]: crate::transport::Transport

mod branch;
mod identity;
mod pull_request;
mod repository;
mod request;

pub use branch::{create_branch, merge_into_branch};
pub use identity::get_username;
pub use pull_request::{
    NewPullRequest, PLACEHOLDER_ISSUE_TITLE, create_pull_request, get_pull_request_details,
    reserve_pull_request_number, update_pull_request,
};
pub use repository::resolve_repository;
