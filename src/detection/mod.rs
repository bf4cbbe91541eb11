//! Framework detection from a project's dependency manifest

pub mod classifier;
pub mod kind;
pub mod manifest;

pub use classifier::{classify, MANIFEST_FILE};
pub use kind::FrameworkKind;
pub use manifest::PackageManifest;
