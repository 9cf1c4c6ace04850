#![warn(clippy::pedantic, clippy::nursery, clippy::unwrap_used, clippy::perf)]
#![deny(unused_must_use)]

pub mod classify;
pub mod error;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use classify::{
    batch::{classify_batch, classify_batch_par},
    chars::CharSet,
    classify_first_char, is_supplemental, is_variant, is_variant_or_supplemental,
    kind::{kind_of, CodeKind},
};

/// Only the ASCII space counts, tabs and newlines are significant.
#[inline]
pub const fn is_space(ch: char) -> bool {
    ch == ' '
}
