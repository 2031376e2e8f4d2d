// GitHub API module.
// Provides the client and types for the repository listing endpoint.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{CLIENT_ID, GITHUB_API_BASE, GitHubClient};
pub use endpoints::MIN_PAGE_SIZE;
pub use types::*;
