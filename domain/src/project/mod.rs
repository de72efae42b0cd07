//! Description of the project the snapshot tasks are applied to.

mod layout;

pub use layout::{DEFAULT_BUILD_DIR, Project};
