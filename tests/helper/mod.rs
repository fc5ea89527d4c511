#![allow(dead_code, unused_imports)]

pub mod fixture;

pub use fixture::{DOCUMENT, Workspace, feed_json, utf16_le};
