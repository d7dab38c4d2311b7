//! Domain logic - pure version values independent of git operations

pub mod descriptor;
pub mod tag;
pub mod version;

pub use descriptor::VersionDescriptor;
pub use tag::VersionTag;
pub use version::Version;
