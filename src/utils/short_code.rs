//! Conversion between link ids and public short codes.
//!
//! A short code is the decimal form of the link id. [`encode`] and
//! [`decode`] are inverses over all positive ids.

/// Encodes a link id as its short code.
pub fn encode(id: i64) -> String {
    id.to_string()
}

/// Decodes a short code back into a link id.
///
/// Returns `None` for anything that cannot name a stored link: empty
/// strings, non-digits, leading zeros, values outside `i64`, and ids
/// below 1. Only the exact output of [`encode`] decodes.
pub fn decode(code: &str) -> Option<i64> {
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if code.starts_with('0') {
        return None;
    }

    code.parse::<i64>().ok().filter(|id| *id > 0)
}
