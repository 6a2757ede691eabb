//! Case-insensitive text comparison.
//!
//! Each character is folded on its own (upper case, then lower case), so the
//! result never depends on neighbouring characters. A final capital sigma
//! folds the same as any other sigma.

use std::cmp::Ordering;

fn fold(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
}

/// Case-folded copy of `text`, for substring matching.
pub fn fold_case(text: &str) -> String {
    fold(text).collect()
}

/// True if `a` and `b` differ at most in letter case.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    fold(a).eq(fold(b))
}

/// Lexicographic ordering of the case-folded characters.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    fold(a).cmp(fold(b))
}
