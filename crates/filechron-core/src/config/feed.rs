//! Feed input configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the version-history feed input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Default path to the feed XML document, used when no path is given
    /// on the command line.
    #[serde(default = "default_source")]
    pub source: String,
    /// Maximum accepted feed size in megabytes. Larger documents are
    /// rejected before parsing.
    #[serde(default = "default_max_size")]
    pub max_size_mb: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            max_size_mb: default_max_size(),
        }
    }
}

fn default_source() -> String {
    "feed.xml".to_string()
}

fn default_max_size() -> u64 {
    64
}
