//! Branch publishing

use crate::api::{create_branch, merge_into_branch};
use crate::error::Result;
use crate::transport::Transport;
use crate::types::Repository;
use tracing::info;

/// How the branch was brought up to date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchUpdate {
    /// A new ref was created
    Created {
        /// Node ID of the new ref
        ref_id: String,
    },
    /// The commit was merged into the existing branch
    Merged,
}

/// A branch as it stands on the service after publishing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedBranch {
    /// Branch name
    pub branch_name: String,
    /// Commit now at the tip of the branch
    pub head_oid: String,
    /// What was done
    pub update: BranchUpdate,
}

/// Put `commit_oid` on `branch_name` in `repo`
///
/// New branches are created at the commit. Existing branches get the commit
/// merged in, and the head becomes the merge commit the service returns.
pub async fn publish_branch(
    transport: &dyn Transport,
    repo: &Repository,
    branch_name: &str,
    commit_oid: &str,
    exists: bool,
) -> Result<PublishedBranch> {
    if exists {
        let merge_oid =
            merge_into_branch(transport, &repo.hostname, &repo.id, commit_oid, branch_name)
                .await?;
        info!(branch = branch_name, %merge_oid, "merged into branch");
        Ok(PublishedBranch {
            branch_name: branch_name.to_string(),
            head_oid: merge_oid,
            update: BranchUpdate::Merged,
        })
    } else {
        let ref_id =
            create_branch(transport, &repo.hostname, &repo.id, branch_name, commit_oid).await?;
        info!(branch = branch_name, oid = commit_oid, "created branch");
        Ok(PublishedBranch {
            branch_name: branch_name.to_string(),
            head_oid: commit_oid.to_string(),
            update: BranchUpdate::Created { ref_id },
        })
    }
}
