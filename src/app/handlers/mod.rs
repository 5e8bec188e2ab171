//! Action handlers for the App
//!
//! Split into modules by concern.

mod file_ops;
mod navigation;
