//! Parser layer
//! - types.rs: Common types (ReleaseBlock)
//! - field.rs: Four-space indented field lookup
//! - release_cycle.rs: endoflife.date release-cycle block parser

pub mod field;
pub mod release_cycle;
pub mod types;

pub use release_cycle::ReleaseCycleParser;
pub use types::ReleaseBlock;
