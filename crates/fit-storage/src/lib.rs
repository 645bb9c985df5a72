//! Storage layer for fitfortoday
//!
//! This crate provides:
//! - A SQLite-backed key/value store with `localStorage` semantics
//! - The saved-outfit archive kept under a single key

pub mod archive;
pub mod db;
pub mod error;

pub use archive::{ARCHIVE_KEY, Archive};
pub use db::Storage;
pub use error::{Result, StorageError};
