//! Location token normalization.
//!
//! The API stores concert locations as hyphen-delimited lowercase tokens
//! (`"seattle-washington-usa"`); the filter panel and the criteria work on
//! the human-readable form (`"Seattle, Washington, Usa"`). Every comparison
//! between the two goes through [`normalize_location`].

/// Rewrite a raw location token for display and comparison.
///
/// Splits on `-`, uppercases the first character of each segment (the rest
/// is left as-is) and joins with `", "`. Empty segments stay empty.
pub fn normalize_location(raw: &str) -> String {
    raw.split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(", ")
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalizes_each_segment() {
        assert_eq!(normalize_location("new-york-usa"), "New, York, Usa");
        assert_eq!(
            normalize_location("seattle-washington-usa"),
            "Seattle, Washington, Usa"
        );
    }

    #[test]
    fn test_only_first_letter_changes() {
        assert_eq!(normalize_location("north_carolina-USA"), "North_carolina, USA");
        assert_eq!(normalize_location("london"), "London");
    }

    #[test]
    fn test_empty_segments_pass_through() {
        assert_eq!(normalize_location(""), "");
        assert_eq!(normalize_location("a--b"), "A, , B");
        assert_eq!(normalize_location("-x"), ", X");
    }

    #[test]
    fn test_non_ascii_first_letter() {
        assert_eq!(normalize_location("école-france"), "École, France");
    }
}
