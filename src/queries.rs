//! GraphQL documents
//!
//! Variables are supplied by the operations in [`crate::api`]; the response
//! shapes read there must stay in sync with the selections below.

/// Repository plus its parent, each with its default branch
pub const GET_REPOSITORY: &str = r"
query ($owner: String!, $name: String!) {
  repository(name: $name, owner: $owner) {
    id
    owner {
      id
      login
    }
    name
    isFork
    defaultBranchRef {
      name
    }
    parent {
      id
      owner {
        id
        login
      }
      name
      isFork
      defaultBranchRef {
        name
      }
    }
  }
}
";

/// Node ID, URL and head of a pull request by number
pub const GET_PULL_REQUEST: &str = r"
query ($owner: String!, $name: String!, $number: Int!) {
  repository(name: $name, owner: $owner) {
    pullRequest(number: $number) {
      id
      url
      headRefOid
      headRefName
    }
  }
}
";

/// Set title and body of a pull request by node ID
pub const UPDATE_PULL_REQUEST: &str = r"
mutation ($pullRequestId: ID!, $title: String!, $body: String!) {
  updatePullRequest(
    input: {pullRequestId: $pullRequestId, title: $title, body: $body}
  ) {
    pullRequest {
      id
    }
  }
}
";

/// Create a ref at a commit
pub const CREATE_BRANCH: &str = r"
mutation ($repositoryId: ID!, $name: String!, $oid: GitObjectID!) {
  createRef(input: {repositoryId: $repositoryId, name: $name, oid: $oid}) {
    ref {
      id
    }
  }
}
";

/// Merge a commit into a branch on the server
pub const MERGE_BRANCH: &str = r"
mutation ($repositoryId: ID!, $base: String!, $head: String!) {
  mergeBranch(input: {repositoryId: $repositoryId, base: $base, head: $head}) {
    mergeCommit {
      oid
    }
  }
}
";

/// Login of the authenticated user
pub const GET_LOGIN: &str = r"
query {
  viewer {
    login
  }
}
";
