//! # filechron-feed
//!
//! The wire layer of Filechron: typed parsing of the XML version-history
//! feed and extraction of the ordered file-version catalog.
//!
//! The feed contract is small: a `files` container holding repeated `file`
//! elements, each with text-bearing leaf children. Extraction maps every
//! `file` element, in document order, to one
//! [`filechron_entity::FileVersionRecord`]. Absent children collapse to the
//! empty string; no field is interpreted at this layer.

pub mod document;
pub mod extractor;
pub mod observer;

pub use document::{FileElement, VersionFeed};
pub use extractor::{extract_file_versions, FeedExtractor};
pub use observer::CatalogObserver;
