//! Case-insensitive subsequence matching.
//!
//! A pattern matches a candidate when every character of the pattern can be
//! found in the candidate, in order, with any characters in between. Pattern
//! characters are plain literals; nothing is interpreted as pattern syntax.
//! Comparison works on Unicode code points folded with [`char::to_lowercase`].

/// Compares two code points ignoring case.
fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Returns `true` if `pattern` is a case-insensitive subsequence of `candidate`.
///
/// An empty pattern matches everything.
///
/// # Example
///
/// ```text
/// matches("Excalidraw", "xcld") == true
/// matches("Excalidraw", "xlc")  == false
/// ```
#[must_use]
pub fn matches(candidate: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return true;
    }

    let mut remaining = candidate.chars();
    pattern
        .chars()
        .all(|p| remaining.by_ref().any(|c| chars_eq_ignore_case(c, p)))
}

/// Returns the code-point indices of the leftmost subsequence match.
///
/// `None` when the pattern does not match; an empty vector for an empty pattern.
#[must_use]
pub fn match_positions(candidate: &str, pattern: &str) -> Option<Vec<usize>> {
    let mut positions = Vec::with_capacity(pattern.chars().count());
    let mut remaining = candidate.chars().enumerate();

    for p in pattern.chars() {
        let (idx, _) = remaining
            .by_ref()
            .find(|&(_, c)| chars_eq_ignore_case(c, p))?;
        positions.push(idx);
    }

    Some(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn subsequence_in_order_matches() {
        assert!(matches("Excalidraw", "xcld"));
        assert!(matches("Excalidraw", "EXCALIDRAW"));
        assert!(matches("Swagger Editor (Legacy)", "sel"));
    }

    #[test]
    fn order_violation_does_not_match() {
        assert!(!matches("Excalidraw", "xlc"));
    }

    #[test]
    fn empty_pattern_matches_everything() {
        assert!(matches("", ""));
        assert!(matches("DrawSQL", ""));
    }

    #[test]
    fn longer_pattern_never_matches() {
        assert!(!matches("abc", "abcd"));
        assert!(!matches("", "a"));
    }

    #[test]
    fn regex_metacharacters_are_literals() {
        assert!(matches("Swagger Editor (Next Gen)", "(n)"));
        assert!(!matches("Swagger", ".*"));
        assert!(matches("a.b*c", ".*"));
        assert!(!matches("abc", "a|b"));
        assert!(matches("[x]", "[]"));
    }

    #[test]
    fn unicode_is_matched_per_code_point() {
        assert!(matches("Ünïcödé", "üc"));
        assert!(matches("日本語アプリ", "本ア"));
        assert!(!matches("日本", "本日"));
    }

    #[test]
    fn positions_are_code_point_indices() {
        assert_eq!(match_positions("Excalidraw", "xcld"), Some(vec![1, 2, 4, 6]));
        assert_eq!(match_positions("éa", "a"), Some(vec![1]));
        assert_eq!(match_positions("abc", ""), Some(vec![]));
        assert_eq!(match_positions("abc", "cb"), None);
    }

    proptest! {
        #[test]
        fn a_string_matches_itself(s in "\\PC{0,16}") {
            prop_assert!(matches(&s, &s));
        }

        #[test]
        fn ascii_case_is_ignored(s in "[a-zA-Z0-9 ]{0,16}") {
            prop_assert!(matches(&s.to_ascii_uppercase(), &s.to_ascii_lowercase()));
        }

        #[test]
        fn positions_agree_with_predicate(candidate in "[a-dA-D ]{0,12}", pattern in "[a-d]{0,4}") {
            prop_assert_eq!(matches(&candidate, &pattern), match_positions(&candidate, &pattern).is_some());
        }
    }
}
