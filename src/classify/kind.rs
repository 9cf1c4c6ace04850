use std::fmt::Display;

use super::{chars::CharSet, significant_char};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeKind {
    /// Starts with `V`
    Variant,
    /// Starts with `E`
    Supplemental,
    /// Starts with anything else, normally a digit
    Other,
    /// Empty, or only spaces
    Blank,
}

impl CodeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Variant => "variant",
            Self::Supplemental => "supplemental",
            Self::Other => "other",
            Self::Blank => "blank",
        }
    }
}

impl Display for CodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[must_use]
pub fn kind_of(code: &str) -> CodeKind {
    match significant_char(code) {
        None => CodeKind::Blank,
        Some(ch) if CharSet::VARIANT.contains(ch) => CodeKind::Variant,
        Some(ch) if CharSet::SUPPLEMENTAL.contains(ch) => CodeKind::Supplemental,
        Some(_) => CodeKind::Other,
    }
}
