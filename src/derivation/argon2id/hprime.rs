//! BLAKE2b layer: the initial hash and the variable-length hash H'.
//!
//! BLAKE2b itself comes from the `blake2` crate; this module only adds the
//! Argon2-specific H' construction (RFC 9106 §3.3), which extends BLAKE2b
//! beyond its 64-byte limit by chaining 64-byte digests and concatenating
//! their first halves.

use blake2::digest::{Update, VariableOutput};
use blake2::{Blake2b512, Blake2bVar, Digest};

/// Plain 64-byte BLAKE2b, used for the initial hash H0.
pub(crate) fn blake2b_512(input: &[u8]) -> [u8; 64] {
    Blake2b512::digest(input).into()
}

/// Variable-length hash H'.
///
/// The requested length is prepended to the input as a 32-bit little-endian
/// prefix. Up to 64 bytes, this is a single BLAKE2b call with the matching
/// digest size; beyond that, 64-byte digests are chained and the first 32
/// bytes of each are emitted, finishing with one digest sized to the
/// remainder.
///
/// `out_len` must be at least 1; callers in this crate pass 4..=2³²-1 for
/// tags and 1024 for block seeding.
pub(crate) fn variable_hash(out_len: usize, input: &[u8]) -> Vec<u8> {
    let mut prefixed = Vec::with_capacity(4 + input.len());
    prefixed.extend_from_slice(&(out_len as u32).to_le_bytes());
    prefixed.extend_from_slice(input);

    if out_len <= 64 {
        return blake2b_var(out_len, &prefixed);
    }

    let mut out = Vec::with_capacity(out_len);
    let mut v = blake2b_512(&prefixed);
    out.extend_from_slice(&v[..32]);

    let mut remaining = out_len - 32;
    while remaining > 64 {
        v = blake2b_512(&v);
        out.extend_from_slice(&v[..32]);
        remaining -= 32;
    }

    out.extend_from_slice(&blake2b_var(remaining, &v));
    out
}

/// One BLAKE2b digest of `len` bytes, `len` in 1..=64.
fn blake2b_var(len: usize, input: &[u8]) -> Vec<u8> {
    let mut hasher = Blake2bVar::new(len).unwrap();
    hasher.update(input);
    let mut out = vec![0u8; len];
    hasher.finalize_variable(&mut out).unwrap();
    out
}
