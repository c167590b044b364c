//! File version record entity.

use serde::{Deserialize, Serialize};

use crate::kind::FileType;
use crate::status::FileStatus;

/// One version of one file, as reported by the history feed.
///
/// Every field is carried as the raw feed text; the extraction layer does
/// not interpret values. Numeric and enumerated interpretation happens on
/// read, through the accessor methods below. A record is a read-only view
/// object: it exposes no mutating methods once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileVersionRecord {
    /// Opaque identifier grouping all versions of the same logical file
    /// across renames.
    pub file_history_id: String,
    /// Version ordinal, strictly increasing per history id.
    pub version: String,
    /// File-system path at the time of this version.
    pub path: String,
    /// File kind as reported by the feed (`FILE`, `FOLDER`, `SYMLINK`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Change kind relative to the predecessor version
    /// (`NEW`, `CHANGED`, `RENAMED`, `DELETED`, ...).
    pub status: String,
    /// Size in bytes.
    pub size: String,
    /// Last-modified timestamp of the file content.
    pub last_modified: String,
    /// Content checksum, verbatim from the feed. No display convention is
    /// imposed here; consumers reformat if they need to.
    pub checksum: String,
    /// When the catalog entry itself was recorded.
    pub updated: String,
    /// POSIX permission bits (octal text).
    pub posix_permissions: String,
    /// Reserved. The feed has no corresponding element; always `""`.
    pub dos_attributes: String,
}

impl FileVersionRecord {
    /// Interpret the `kind` field as a [`FileType`].
    ///
    /// Unknown feed literals are preserved as [`FileType::Other`], never
    /// an error.
    pub fn file_type(&self) -> FileType {
        FileType::from_feed(&self.kind)
    }

    /// Interpret the `status` field as a [`FileStatus`].
    pub fn file_status(&self) -> FileStatus {
        FileStatus::from_feed(&self.status)
    }

    /// Parse the `size` field as a byte count, if it is numeric.
    pub fn size_bytes(&self) -> Option<u64> {
        self.size.parse().ok()
    }

    /// Parse the `version` field as an ordinal, if it is numeric.
    pub fn version_number(&self) -> Option<u64> {
        self.version.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::FileType;
    use crate::status::FileStatus;

    fn record() -> FileVersionRecord {
        FileVersionRecord {
            file_history_id: "a3f9".to_string(),
            version: "2".to_string(),
            path: "docs/report.txt".to_string(),
            kind: "FILE".to_string(),
            status: "CHANGED".to_string(),
            size: "2048".to_string(),
            last_modified: "2015-03-01T10:00:00Z".to_string(),
            checksum: "deadbeef".to_string(),
            updated: "2015-03-01T10:05:00Z".to_string(),
            posix_permissions: "rw-r--r--".to_string(),
            dos_attributes: String::new(),
        }
    }

    #[test]
    fn test_typed_on_read_accessors() {
        let r = record();
        assert_eq!(r.file_type(), FileType::File);
        assert_eq!(r.file_status(), FileStatus::Changed);
        assert_eq!(r.size_bytes(), Some(2048));
        assert_eq!(r.version_number(), Some(2));
    }

    #[test]
    fn test_non_numeric_fields_read_as_none() {
        let mut r = record();
        r.size = String::new();
        r.version = "two".to_string();
        assert_eq!(r.size_bytes(), None);
        assert_eq!(r.version_number(), None);
    }

    #[test]
    fn test_unknown_literals_are_preserved() {
        let mut r = record();
        r.kind = "HARDLINK".to_string();
        r.status = "MOVED".to_string();
        assert_eq!(r.file_type(), FileType::Other("HARDLINK".to_string()));
        assert_eq!(r.file_status(), FileStatus::Other("MOVED".to_string()));
    }
}
