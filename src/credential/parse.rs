//! Tokenization of the numeric credential segments.
//!
//! Fields are taken apart explicitly — strip the expected key, strip the
//! `=`, parse the integer — instead of going through a scanf-style
//! formatter, so a wrong key, a missing field, or trailing garbage is
//! rejected rather than silently accepted. Field order is fixed.

use std::str::FromStr;

use super::error::CredentialError;

/// Parses the version segment, `v=<int>`.
pub(crate) fn version(segment: &str) -> Result<u32, CredentialError> {
    field(segment, "v")
}

/// Parses the cost segment, `m=<int>,t=<int>,p=<int>`, in exactly that
/// order. The parallelism field must fit in a byte.
pub(crate) fn cost(segment: &str) -> Result<(u32, u32, u8), CredentialError> {
    let mut fields = segment.split(',');

    let memory = field(fields.next().unwrap_or(""), "m")?;
    let time = field(fields.next().unwrap_or(""), "t")?;
    let threads = field(fields.next().unwrap_or(""), "p")?;

    if fields.next().is_some() {
        return Err(CredentialError::MalformedField("p"));
    }

    Ok((memory, time, threads))
}

fn field<T: FromStr>(segment: &str, key: &'static str) -> Result<T, CredentialError> {
    segment
        .strip_prefix(key)
        .and_then(|rest| rest.strip_prefix('='))
        .and_then(|value| value.parse().ok())
        .ok_or(CredentialError::MalformedField(key))
}
