//! Submission helpers
//!
//! Compose the single-round-trip operations in [`crate::api`] into the steps
//! a submission performs for one change:
//! 1. Publish - put the change's commit on a branch of the working repository
//! 2. Open - reserve a number and open the pull request against the upstream
//! 3. Update - rewrite title/body of a pull request that already exists

mod open;
mod publish;

pub use open::{OpenedPullRequest, open_pull_request, update_existing_pull_request};
pub use publish::{BranchUpdate, PublishedBranch, publish_branch};
