use wasm_bindgen::prelude::*;

/// One byte per code, `1` for a match, so JS receives a `Uint8Array`
#[wasm_bindgen]
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn classify_batch(codes: Vec<String>, target_chars: &str, invert: bool) -> Vec<u8> {
    crate::classify_batch(&codes, target_chars, invert).into_iter().map(u8::from).collect()
}

/// One of `variant`, `supplemental`, `other` or `blank`
#[wasm_bindgen]
#[must_use]
pub fn kind_of(code: &str) -> String {
    crate::kind_of(code).as_str().to_owned()
}
