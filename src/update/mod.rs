//! Update layer
//!
//! Compares parsed release blocks with the newest feed releases and rewrites
//! the `latest` and `latestReleaseDate` fields in place. Everything outside
//! those two values is kept byte for byte.
//!
//! # Modules
//!
//! - [`apply`]: Block comparison and in-place rewriting
//! - [`types`]: `Change` and `UpdateResult`

pub mod apply;
pub mod types;

pub use apply::{Updater, apply_updates};
pub use types::{Change, UpdateResult};
