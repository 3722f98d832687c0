//! Free-text query and pagination helpers for catalog listings.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of catalog entries per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Maximum number of catalog entries per page.
pub const MAX_PAGE_LIMIT: i64 = 200;

// ---------------------------------------------------------------------------
// Query helpers
// ---------------------------------------------------------------------------

/// Normalize a raw search query for matching.
///
/// - Leading and trailing whitespace is removed.
/// - The result is lower-cased.
///
/// Returns `None` when nothing is left, meaning "no restriction".
///
/// # Examples
///
/// ```
/// use interviewer_core::search::normalize_query;
/// assert_eq!(normalize_query("  React "), Some("react".to_string()));
/// assert_eq!(normalize_query("   "), None);
/// ```
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- normalize_query -----------------------------------------------------

    #[test]
    fn query_is_trimmed_and_lowercased() {
        assert_eq!(normalize_query(" REACT "), Some("react".to_string()));
    }

    #[test]
    fn empty_query_is_none() {
        assert_eq!(normalize_query(""), None);
    }

    #[test]
    fn whitespace_query_is_none() {
        assert_eq!(normalize_query(" \t "), None);
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_eq!(
            normalize_query("binary  search"),
            Some("binary  search".to_string())
        );
    }

    // -- clamp_limit ---------------------------------------------------------

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, 50, 200), 50);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some(500), 50, 200), 200);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(-5), 50, 200), 1);
        assert_eq!(clamp_limit(Some(0), 50, 200), 1);
    }

    // -- clamp_offset --------------------------------------------------------

    #[test]
    fn clamp_offset_defaults_to_zero() {
        assert_eq!(clamp_offset(None), 0);
    }

    #[test]
    fn clamp_offset_floors_at_zero() {
        assert_eq!(clamp_offset(Some(-10)), 0);
    }
}
