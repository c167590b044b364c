//! Human-readable byte sizes.

const UNITS: [&str; 8] = ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count for display.
///
/// Counts below 1024 are rendered unrounded as `"<n> B"`. Larger counts
/// are divided by 1024 first and tested against the next unit second, so
/// exactly 1024 x 1024 bytes renders as `"1.0 MB"`. The result carries
/// one decimal place and a space before the unit.
///
/// Taking `u64` settles the out-of-range question by construction:
/// negative and non-finite counts are unrepresentable, and `u64::MAX` is
/// about 16 EB, well inside the unit list.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.1} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_below_threshold_unrounded() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(500), "500 B");
        assert_eq!(format_file_size(1023), "1023 B");
    }

    #[test]
    fn test_kilobytes() {
        assert_eq!(format_file_size(1024), "1.0 kB");
        assert_eq!(format_file_size(1536), "1.5 kB");
    }

    #[test]
    fn test_unit_boundary_divides_before_testing() {
        // 1024 * 1024 is already the next unit, not "1024.0 kB".
        assert_eq!(format_file_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1.0 GB");
    }

    #[test]
    fn test_just_below_unit_boundary_stays_in_unit() {
        assert_eq!(format_file_size(1024 * 1024 - 1), "1024.0 kB");
    }

    #[test]
    fn test_large_counts_stay_inside_unit_list() {
        let formatted = format_file_size(u64::MAX);
        assert!(formatted.ends_with(" EB"));
    }
}
