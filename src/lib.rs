//! Keeps endoflife.date release-cycle records in sync with a vendor version
//! feed.
//!
//! A run loads the feed ([`version::feed`]), parses release blocks out of the
//! registry document ([`parser`]), and bumps `latest`/`latestReleaseDate`
//! where the feed knows a newer release ([`update`]). [`app::run`] ties the
//! stages together.

pub mod app;
pub mod config;
pub mod logging;
pub mod parser;
pub mod update;
pub mod version;
