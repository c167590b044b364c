//! # filechron-render
//!
//! Pure presentation formatters consumed by UI layers: HTML-safe text
//! escaping, path basenames, human-readable byte sizes, and timestamp
//! rendering. Every function is a pure function of its input; nothing in
//! this crate performs I/O or holds state.

pub mod size;
pub mod text;
pub mod time;

pub use size::format_file_size;
pub use text::{basename, escape_html};
pub use time::format_timestamp;
