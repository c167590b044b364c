//! Table and JSON output formatting for the catalog CLI.

use filechron_core::AppResult;
use filechron_entity::FileVersionRecord;
use filechron_render::{basename, format_file_size, format_timestamp};
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Full records as JSON
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Table
    }
}

/// One display row of the catalog table.
#[derive(Tabled)]
struct VersionRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Modified")]
    modified: String,
}

impl VersionRow {
    fn from_record(record: &FileVersionRecord) -> Self {
        let size = match record.size_bytes() {
            Some(bytes) => format_file_size(bytes),
            None => record.size.clone(),
        };

        Self {
            name: basename(&record.path).to_string(),
            path: record.path.clone(),
            version: record.version.clone(),
            kind: record.file_type().to_string(),
            status: record.file_status().to_string(),
            size,
            modified: format_timestamp(&record.last_modified),
        }
    }
}

/// Print the extracted catalog in the selected format.
///
/// The table view interprets fields for readability; the JSON view emits
/// the records exactly as extracted.
pub fn print_catalog(records: &[FileVersionRecord], format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Table => {
            if records.is_empty() {
                println!("No file versions found.");
            } else {
                let rows: Vec<VersionRow> = records.iter().map(VersionRow::from_record).collect();
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(records)?;
            println!("{json}");
        }
    }
    Ok(())
}
