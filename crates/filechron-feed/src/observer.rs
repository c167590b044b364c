//! Diagnostic observer seam for catalog extraction.

use filechron_entity::FileVersionRecord;

/// Receives the extracted catalog for diagnostic purposes.
///
/// The observer is fire-and-forget: it runs after the catalog is fully
/// built, it must not influence the returned value, and omitting it
/// entirely is always correct.
pub trait CatalogObserver: Send + Sync {
    /// Called once per extraction with the complete record sequence.
    fn catalog_extracted(&self, records: &[FileVersionRecord]);
}

impl<F> CatalogObserver for F
where
    F: Fn(&[FileVersionRecord]) + Send + Sync,
{
    fn catalog_extracted(&self, records: &[FileVersionRecord]) {
        self(records)
    }
}
