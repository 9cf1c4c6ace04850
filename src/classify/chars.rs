use static_assertions::assert_impl_all;

use crate::error::CharSetError;

/// The characters a code's first significant character is tested against.
///
/// Membership is per `char`; order and duplicates don't matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharSet<'a> {
    chars: &'a str,
}

assert_impl_all!(CharSet<'static>: Send, Sync, Copy);

impl<'a> CharSet<'a> {
    pub const VARIANT: CharSet<'static> = CharSet::new("Vv");
    pub const SUPPLEMENTAL: CharSet<'static> = CharSet::new("Ee");
    pub const VARIANT_OR_SUPPLEMENTAL: CharSet<'static> = CharSet::new("VvEe");

    /// Unchecked: an empty set simply never matches.
    #[must_use]
    pub const fn new(chars: &'a str) -> Self {
        Self { chars }
    }

    /// # Errors
    ///
    /// Returns [`CharSetError::Empty`] if `chars` has no characters
    pub const fn try_new(chars: &'a str) -> Result<Self, CharSetError> {
        if chars.is_empty() {
            return Err(CharSetError::Empty);
        }
        Ok(Self::new(chars))
    }

    #[inline]
    #[must_use]
    pub fn contains(self, ch: char) -> bool {
        self.chars.contains(ch)
    }

    #[must_use]
    pub const fn as_str(self) -> &'a str {
        self.chars
    }
}
