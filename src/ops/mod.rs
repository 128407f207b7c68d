mod manifest;
mod version;

pub use manifest::{RewriteOptions, RewriteOutcome, rewrite};
pub use version::{VersionRewrite, rewrite_version};
