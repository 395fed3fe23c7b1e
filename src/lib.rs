//! gh-submit - fork-aware pull request submission
//!
//! Library for turning a local commit into a GitHub pull request. Every
//! operation goes through a [`transport::Transport`], so the same code runs
//! against the real API or a scripted mock.

pub mod api;
pub mod auth;
pub mod error;
pub mod queries;
pub mod remote;
pub mod submit;
pub mod transport;
pub mod types;
