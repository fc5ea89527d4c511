//! Version layer for release feed handling
//!
//! This module turns the vendor version feed into the newest release per
//! release cycle, and defines how vendor versions are ordered.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  raw bytes  │────▶│    Feed     │────▶│  CycleMap   │
//! │ (UTF-8/16)  │     │  (decode)   │     │ (per cycle) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │   Release   │
//!                     │(version cmp)│
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`feed`]: Feed decoding and per-cycle reduction
//! - [`release`]: Version parsing, ordering and release cycle extraction
//! - [`error`]: Error types for feed loading
//! - [`types`]: Common types like `LatestRelease`

pub mod error;
pub mod feed;
pub mod release;
pub mod types;
