//! Base64 codec for credential material.
//!
//! Salt and hash bytes are embedded into the `$`-delimited credential
//! string using the URL-safe base64 alphabet without padding, so the
//! encoded form never contains `$`, `=`, or any character that would
//! require escaping.
//!
//! Round-trip law: `decode(&encode(b)) == Ok(b)` for every byte sequence
//! `b`. The empty sequence encodes to the empty string and back.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

pub use base64::DecodeError;

/// Encodes bytes as unpadded, URL-safe base64.
///
/// Total and deterministic; the empty slice yields the empty string.
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes unpadded, URL-safe base64 back into bytes.
///
/// The empty string decodes to an empty vector. Inputs containing
/// characters outside the alphabet, padding characters, or an impossible
/// length fail with [`DecodeError`].
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_NO_PAD.decode(text)
}
