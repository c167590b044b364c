//! File change status enumeration.

use std::fmt;

/// The kind of change a version represents relative to its predecessor.
///
/// Open set, same policy as [`crate::kind::FileType`]: unknown feed
/// literals are data, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileStatus {
    /// The file appeared for the first time.
    New,
    /// The file content changed.
    Changed,
    /// The file was renamed or moved.
    Renamed,
    /// The file was deleted.
    Deleted,
    /// A literal this version of the catalog does not know about.
    Other(String),
}

impl FileStatus {
    /// Interpret a raw feed literal. Matching is case-insensitive; unknown
    /// literals are preserved verbatim.
    pub fn from_feed(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "NEW" => Self::New,
            "CHANGED" => Self::Changed,
            "RENAMED" => Self::Renamed,
            "DELETED" => Self::Deleted,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// Return the feed literal for this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "NEW",
            Self::Changed => "CHANGED",
            Self::Renamed => "RENAMED",
            Self::Deleted => "DELETED",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_literals() {
        assert_eq!(FileStatus::from_feed("NEW"), FileStatus::New);
        assert_eq!(FileStatus::from_feed("changed"), FileStatus::Changed);
        assert_eq!(FileStatus::from_feed("Renamed"), FileStatus::Renamed);
        assert_eq!(FileStatus::from_feed("DELETED"), FileStatus::Deleted);
    }

    #[test]
    fn test_unknown_literal_round_trips() {
        let status = FileStatus::from_feed("MOVED");
        assert_eq!(status, FileStatus::Other("MOVED".to_string()));
        assert_eq!(status.as_str(), "MOVED");
    }
}
