//! Domain logic - pure release rules independent of files and git

pub mod tag;
pub mod version;

pub use tag::ReleaseTag;
pub use version::{increment_version, BumpKind, Version};
