use std::{num::NonZeroUsize, thread};

use super::{chars::CharSet, classify_first_char};

/// Below this many codes per worker, spawning threads costs more than it saves.
const MIN_CHUNK_LEN: usize = 4096;

/// Classifies every code against `targets`, flipping each result if `invert`.
///
/// The output has one entry per input code, in input order.
#[must_use]
pub fn classify_batch<S: AsRef<str>>(codes: &[S], targets: &str, invert: bool) -> Vec<bool> {
    let targets = CharSet::new(targets);
    codes.iter().map(|code| invert != classify_first_char(code.as_ref(), targets)).collect()
}

/// Same result as [`classify_batch`], split across up to `threads` workers.
///
/// Each worker owns a disjoint slice of the output, and a `bool` is a whole
/// byte, so no synchronization is needed.
#[must_use]
pub fn classify_batch_par<S>(
    codes: &[S],
    targets: &str,
    invert: bool,
    threads: NonZeroUsize,
) -> Vec<bool>
where
    S: AsRef<str> + Sync,
{
    let chunk_len = codes.len().div_ceil(threads.get()).max(MIN_CHUNK_LEN);
    if chunk_len >= codes.len() {
        return classify_batch(codes, targets, invert);
    }

    tracing::debug!(codes = codes.len(), chunk_len, "classifying in parallel");

    let targets = CharSet::new(targets);
    let mut out = vec![false; codes.len()];
    thread::scope(|s| {
        for (src, dst) in codes.chunks(chunk_len).zip(out.chunks_mut(chunk_len)) {
            s.spawn(move || fill(src, dst, targets, invert));
        }
    });
    out
}

#[inline]
fn fill<S: AsRef<str>>(codes: &[S], out: &mut [bool], targets: CharSet, invert: bool) {
    debug_assert_eq!(codes.len(), out.len());
    for (code, res) in codes.iter().zip(out) {
        *res = invert != classify_first_char(code.as_ref(), targets);
    }
}
