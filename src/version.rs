//! Version extraction and env-line formatting helpers.

use regex::Regex;

/// Extract the major segment from a raw version string.
///
/// The major segment is everything from the first digit onward (e.g.
/// `"v1.2.3"` yields `"1.2.3"`, `"release-10-beta"` yields `"10-beta"`).
/// This is a plain substring capture, not a validated semantic version.
///
/// Returns `None` when the input contains no digit followed by at least one
/// more character.
pub fn extract_major(input: &str) -> Option<&str> {
    // Digit plus greedy remainder: the search starts the capture at the
    // first digit and runs through end of string.
    let re = Regex::new(r"(?P<major>\d.+)").ok()?;
    Some(re.captures(input)?.name("major")?.as_str())
}

/// Format a shell-sourceable export line, e.g. `export major="1.2.3"`.
///
/// The value is substituted verbatim, without escaping. No trailing newline.
pub fn format_export(name: &str, value: &str) -> String {
    format!("export {}=\"{}\"", name, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_major_with_prefix() {
        assert_eq!(extract_major("v1.2.3"), Some("1.2.3"));
        assert_eq!(extract_major("release-10-beta"), Some("10-beta"));
        assert_eq!(extract_major("V2.0.0-rc1"), Some("2.0.0-rc1"));
    }

    #[test]
    fn test_extract_major_bare_version() {
        assert_eq!(extract_major("1.2.3"), Some("1.2.3"));
        assert_eq!(extract_major("10.20"), Some("10.20"));
    }

    #[test]
    fn test_extract_major_no_digits() {
        assert_eq!(extract_major("stable"), None);
        assert_eq!(extract_major(""), None);
    }

    #[test]
    fn test_extract_major_trailing_single_digit() {
        // The pattern requires at least one character after the digit.
        assert_eq!(extract_major("v1"), None);
        assert_eq!(extract_major("v1."), Some("1."));
    }

    #[test]
    fn test_extract_major_starts_at_first_digit() {
        assert_eq!(extract_major("rel-2024-01"), Some("2024-01"));
    }

    #[test]
    fn test_format_export() {
        assert_eq!(format_export("major", "1.2.3"), "export major=\"1.2.3\"");
        assert_eq!(
            format_export("release", "10-beta"),
            "export release=\"10-beta\""
        );
    }

    #[test]
    fn test_format_export_verbatim_value() {
        // Embedded quotes are not escaped.
        assert_eq!(format_export("major", "1.0\"x"), "export major=\"1.0\"x\"");
    }
}
