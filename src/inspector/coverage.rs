use crate::utils::{InspectorError, Result};

/// Coverage marker used when a caller reported no depth at a site.
pub const NO_COVERAGE: &str = "na";

/// Converts a raw coverage column into a read depth, mapping `na` (any case) to 0.
pub fn normalize_coverage(raw: &str) -> Result<u32> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case(NO_COVERAGE) {
        return Ok(0);
    }
    value
        .parse::<u32>()
        .map_err(|_| InspectorError::InvalidCoverage(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_coverage_marker_is_zero_in_any_case() {
        for raw in ["NA", "na", "Na", "nA"] {
            assert_eq!(normalize_coverage(raw).unwrap(), 0);
        }
    }

    #[test]
    fn integer_coverage_is_parsed() {
        assert_eq!(normalize_coverage("57").unwrap(), 57);
        assert_eq!(normalize_coverage("0").unwrap(), 0);
    }

    #[test]
    fn negative_or_non_numeric_coverage_is_rejected() {
        for raw in ["-3", "abc", "", "12.5"] {
            assert!(
                matches!(normalize_coverage(raw), Err(InspectorError::InvalidCoverage(v)) if v == raw)
            );
        }
    }
}
