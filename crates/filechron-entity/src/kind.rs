//! File kind enumeration.

use std::fmt;

/// The kind of file-system object a version describes.
///
/// The feed defines an open set: literals other than the three known ones
/// are carried through as [`FileType::Other`] rather than rejected, so a
/// newer feed never breaks an older consumer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileType {
    /// A regular file.
    File,
    /// A directory.
    Folder,
    /// A symbolic link.
    Symlink,
    /// A literal this version of the catalog does not know about.
    Other(String),
}

impl FileType {
    /// Interpret a raw feed literal. Matching is case-insensitive; unknown
    /// literals are preserved verbatim.
    pub fn from_feed(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "FILE" => Self::File,
            "FOLDER" => Self::Folder,
            "SYMLINK" => Self::Symlink,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// Return the feed literal for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::File => "FILE",
            Self::Folder => "FOLDER",
            Self::Symlink => "SYMLINK",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_literals() {
        assert_eq!(FileType::from_feed("FILE"), FileType::File);
        assert_eq!(FileType::from_feed("folder"), FileType::Folder);
        assert_eq!(FileType::from_feed("Symlink"), FileType::Symlink);
    }

    #[test]
    fn test_unknown_literal_round_trips() {
        let kind = FileType::from_feed("socket");
        assert_eq!(kind, FileType::Other("socket".to_string()));
        assert_eq!(kind.as_str(), "socket");
    }
}
