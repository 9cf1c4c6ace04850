pub mod batch;
pub mod chars;
pub mod kind;

use self::chars::CharSet;
use crate::is_space;

/// First character of `code` after any leading spaces, or `None` if the
/// code is blank.
#[inline]
#[must_use]
pub fn significant_char(code: &str) -> Option<char> {
    code.chars().find(|ch| !is_space(*ch))
}

/// Whether the first non-space character of `code` is one of `targets`.
///
/// Blank codes are never a match, whatever the target set.
#[inline]
#[must_use]
pub fn classify_first_char(code: &str, targets: CharSet) -> bool {
    significant_char(code).is_some_and(|ch| targets.contains(ch))
}

/// `V` codes (supplementary factors).
#[inline]
#[must_use]
pub fn is_variant(code: &str) -> bool {
    classify_first_char(code, CharSet::VARIANT)
}

/// `E` codes (external causes).
#[inline]
#[must_use]
pub fn is_supplemental(code: &str) -> bool {
    classify_first_char(code, CharSet::SUPPLEMENTAL)
}

#[inline]
#[must_use]
pub fn is_variant_or_supplemental(code: &str) -> bool {
    classify_first_char(code, CharSet::VARIANT_OR_SUPPLEMENTAL)
}
