//! Property-based tests for path manipulation functions.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{is_strict_descendant, normalize, relative_path, slugify, to_slash};
    use proptest::prelude::*;
    use std::path::PathBuf;

    fn segments() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z0-9_]{1,8}", 0..6)
    }

    fn absolute(parts: &[String]) -> PathBuf {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    }

    // ============================================================================
    // normalize property tests
    // ============================================================================

    proptest! {
        /// Property: normalize is idempotent
        #[test]
        fn normalize_is_idempotent(parts in prop::collection::vec("[a-z]{1,4}|\\.|\\.\\.", 0..10)) {
            let path = absolute(&parts);
            let once = normalize(&path);
            let twice = normalize(&once);
            prop_assert_eq!(once, twice);
        }

        /// Property: a normalized absolute path has no `.` or `..` components
        #[test]
        fn normalize_removes_dot_components(parts in prop::collection::vec("[a-z]{1,4}|\\.|\\.\\.", 0..10)) {
            let normalized = normalize(&absolute(&parts));
            for component in normalized.components() {
                prop_assert!(
                    !matches!(component, std::path::Component::CurDir | std::path::Component::ParentDir),
                    "unexpected component in {:?}",
                    normalized
                );
            }
        }
    }

    // ============================================================================
    // relative_path property tests
    // ============================================================================

    proptest! {
        /// Property: joining base with relative_path(base, target) lands on target
        #[test]
        fn relative_path_round_trips(base in segments(), target in segments()) {
            let base = absolute(&base);
            let target = absolute(&target);
            let rel = relative_path(&base, &target);
            prop_assert_eq!(normalize(&base.join(&rel)), normalize(&target));
        }

        /// Property: to_slash output never contains a backslash
        #[test]
        fn to_slash_has_no_backslash(parts in segments()) {
            let rel: PathBuf = parts.iter().collect();
            prop_assert!(!to_slash(&rel).contains('\\'));
        }

        /// Property: every child of a directory is its strict descendant
        #[test]
        fn children_are_strict_descendants(base in segments(), child in "[a-z0-9_]{1,8}") {
            let base = absolute(&base);
            prop_assert!(is_strict_descendant(&base.join(&child), &base));
            prop_assert!(!is_strict_descendant(&base, &base));
        }
    }

    // ============================================================================
    // slugify property tests
    // ============================================================================

    proptest! {
        /// Property: slugs only contain lowercase ascii alphanumerics and dashes
        #[test]
        fn slugify_output_is_safe(input in ".*") {
            let slug = slugify(&input);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }

        /// Property: slugify is idempotent
        #[test]
        fn slugify_is_idempotent(input in ".*") {
            let once = slugify(&input);
            prop_assert_eq!(slugify(&once), once);
        }
    }
}
