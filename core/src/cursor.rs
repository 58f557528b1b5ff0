//! Opaque page tokens.
//!
//! A cursor is the base64 form of a 1-based page number. Clients must treat it
//! as an opaque handle and only ever hand it back to the query engine.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Encode a 1-based page number into a cursor
pub fn encode(page: usize) -> String {
    STANDARD.encode(page.to_string())
}

/// Decode a cursor back into its page number.
///
/// Returns `None` for anything that was not produced by [`encode`].
pub fn decode(cursor: &str) -> Option<usize> {
    let bytes = STANDARD.decode(cursor.trim()).ok()?;
    let text = std::str::from_utf8(&bytes).ok()?;

    match text.parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(page) => Some(page),
    }
}
