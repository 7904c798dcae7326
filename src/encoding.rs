//! Text encodings shared by the hashing and cipher operations.
//!
//! Binary values cross the public API as standard, padded base64. The cipher
//! path is the exception: its salt and IV are taken as ASCII text.

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::error::{CryptoError, Result};

/// Encodes bytes as standard padded base64.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard padded base64, naming `what` in the error.
pub fn from_base64(text: &str, what: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text.as_bytes())
        .map_err(|e| CryptoError::invalid(format!("{what} is not valid base64: {e}")))
}

/// Converts text to bytes one byte per character; non-ASCII characters become `?`.
pub fn ascii_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
        .collect()
}
