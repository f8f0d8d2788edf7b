//! Author-position resolution
//!
//! The affiliation table's `author_position` column is heterogeneous:
//! integers, integers-as-strings, and a short vocabulary of role words.
//! [`resolve`] maps every input to a normalized integer or `None`; it
//! never fails.

pub const FIRST_AUTHOR: i32 = 1;
pub const MIDDLE_AUTHOR: i32 = 2;
/// Sentinel for the corresponding author
pub const CORRESPONDING_AUTHOR: i32 = -1;

/// Resolve a raw author-position cell. `None` means the row is excluded
/// downstream.
pub fn resolve(raw: Option<&str>) -> Option<i32> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(position) = trimmed.parse::<i32>() {
        return Some(position);
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "middle" | "mid" => Some(MIDDLE_AUTHOR),
        "last" | "corresponding" | "corr" => Some(CORRESPONDING_AUTHOR),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_is_total() {
        assert_eq!(resolve(Some("1")), Some(1));
        assert_eq!(resolve(Some("middle")), Some(2));
        assert_eq!(resolve(Some("last")), Some(-1));
        assert_eq!(resolve(Some("corresponding")), Some(-1));
        assert_eq!(resolve(Some("unknown")), None);
        assert_eq!(resolve(None), None);
    }

    #[test]
    fn test_vocabulary_is_case_insensitive() {
        assert_eq!(resolve(Some("Mid")), Some(MIDDLE_AUTHOR));
        assert_eq!(resolve(Some("CORR")), Some(CORRESPONDING_AUTHOR));
        assert_eq!(resolve(Some("Last")), Some(CORRESPONDING_AUTHOR));
    }

    #[test]
    fn test_whitespace_handling() {
        assert_eq!(resolve(Some(" 1 ")), Some(1));
        assert_eq!(resolve(Some("  middle  ")), Some(2));
        assert_eq!(resolve(Some("   ")), None);
    }

    #[test]
    fn test_non_integer_numerics_are_excluded() {
        assert_eq!(resolve(Some("1.5")), None);
    }
}
