//! Typed model of the version-history feed document.

use serde::Deserialize;

/// The root `files` container of the feed document.
#[derive(Debug, Default, Deserialize)]
pub struct VersionFeed {
    /// The repeated `file` elements, in document order.
    #[serde(rename = "file", default)]
    pub files: Vec<FileElement>,
}

/// One `file` element of the feed.
///
/// Every child is a text-bearing leaf. A child that is absent or empty
/// deserializes to the empty string; the two cases are deliberately not
/// distinguished.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileElement {
    pub file_history_id: String,
    pub version: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub size: String,
    pub last_modified: String,
    pub checksum: String,
    pub updated: String,
    pub posix_permissions: String,
}
