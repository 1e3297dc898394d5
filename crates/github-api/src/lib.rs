//! Client for the GitHub REST API endpoints behind the projects showcase

mod client;
mod error;
mod types;

pub use client::GithubClient;
pub use error::{GithubError, Result};
pub use types::{Repo, RepoUpdate};
