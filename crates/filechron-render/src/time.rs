//! Timestamp rendering.

use chrono::DateTime;

/// Render a feed timestamp for display as `dd/mm/yyyy hh:mm:ss`.
///
/// The feed carries timestamps as RFC 3339 text. Display must never fail
/// on feed data, so input that does not parse is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => timestamp.format("%d/%m/%Y %H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_rfc3339() {
        assert_eq!(
            format_timestamp("2015-03-01T10:05:30Z"),
            "01/03/2015 10:05:30"
        );
        assert_eq!(
            format_timestamp("2015-03-01T10:05:30+02:00"),
            "01/03/2015 10:05:30"
        );
    }

    #[test]
    fn test_unparseable_input_passes_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }
}
