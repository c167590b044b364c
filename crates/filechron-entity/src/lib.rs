//! # filechron-entity
//!
//! Domain entity models for Filechron. Every struct in this crate
//! represents a value object extracted from the version-history feed.
//! All entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`,
//! and are read-only once constructed.

pub mod kind;
pub mod record;
pub mod status;

pub use kind::FileType;
pub use record::FileVersionRecord;
pub use status::FileStatus;
