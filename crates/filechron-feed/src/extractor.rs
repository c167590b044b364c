//! Catalog extraction from a parsed feed document.

use std::sync::Arc;

use filechron_core::error::ErrorKind;
use filechron_core::{AppError, AppResult};
use filechron_entity::FileVersionRecord;

use crate::document::{FileElement, VersionFeed};
use crate::observer::CatalogObserver;

/// Extracts the ordered file-version catalog from a feed document.
///
/// The extractor is stateless across calls: two extractions of the same
/// input yield element-wise equal sequences, and concurrent extractions
/// with independent inputs do not interfere.
#[derive(Default)]
pub struct FeedExtractor {
    observer: Option<Arc<dyn CatalogObserver>>,
}

impl FeedExtractor {
    /// Create an extractor with no observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor that reports every extracted catalog to the
    /// given observer.
    pub fn with_observer(observer: Arc<dyn CatalogObserver>) -> Self {
        Self {
            observer: Some(observer),
        }
    }

    /// Parse the feed XML and extract one record per `file` element, in
    /// document order.
    ///
    /// A document with zero `file` elements is success with an empty
    /// sequence. A document that cannot be parsed into the `files > file`
    /// shape surfaces the parser's failure as a serialization error.
    pub fn extract(&self, xml: &str) -> AppResult<Vec<FileVersionRecord>> {
        let feed: VersionFeed = quick_xml::de::from_str(xml).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Malformed version feed: {e}"),
                e,
            )
        })?;

        let records: Vec<FileVersionRecord> =
            feed.files.into_iter().map(into_record).collect();

        tracing::debug!(count = records.len(), "extracted file version catalog");

        if let Some(observer) = &self.observer {
            observer.catalog_extracted(&records);
        }

        Ok(records)
    }
}

/// Convenience wrapper for extraction without an observer.
pub fn extract_file_versions(xml: &str) -> AppResult<Vec<FileVersionRecord>> {
    FeedExtractor::new().extract(xml)
}

fn into_record(element: FileElement) -> FileVersionRecord {
    FileVersionRecord {
        file_history_id: element.file_history_id,
        version: element.version,
        path: element.path,
        kind: element.kind,
        status: element.status,
        size: element.size,
        last_modified: element.last_modified,
        checksum: element.checksum,
        updated: element.updated,
        posix_permissions: element.posix_permissions,
        // The feed has no DOS attributes element yet.
        dos_attributes: String::new(),
    }
}
