//! Browsing state
//!
//! Split into modules to reduce complexity.

mod browser;

pub use browser::{BrowserState, Listing, Pending, matches_extension};
