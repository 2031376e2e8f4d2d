// Featured projects: model, transformation, fallback data and provider.

pub mod fallback;
pub mod model;
pub mod provider;
pub mod technology;
pub mod transform;

pub use fallback::fallback_projects;
pub use model::{DisplayProject, ProjectStatus};
pub use provider::{MetadataProvider, ProjectSource};
pub use technology::TechnologyLabels;
pub use transform::{select_featured, slugify};
