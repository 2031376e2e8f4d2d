// State management module.
// Holds the presenter for the featured project list.

pub mod projects;

pub use projects::{LoadingState, ProjectList, ProjectsView, SKELETON_CARDS};
