// folio: featured GitHub projects for a portfolio.
// Fetches an owner's repositories, caches the listing, ranks and formats
// the best candidates as cards, and renders them in the terminal.

pub mod app;
pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod projects;
pub mod state;
pub mod ui;

pub use error::{FolioError, Result};
