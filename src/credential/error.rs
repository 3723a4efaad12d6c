//! Error taxonomy for the credential service.

use crate::derivation::DerivationError;
use thiserror::Error;

/// Errors returned by hashing or verification.
///
/// All variants are terminal and surfaced directly to the caller; nothing
/// is retried or recovered internally. Callers should treat
/// [`HashMismatch`](CredentialError::HashMismatch) as an authentication
/// failure safe to report as "invalid credentials", and every other
/// variant as an operational error that should not be shown to end users
/// verbatim.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The password input was empty.
    #[error("password must not be empty")]
    PasswordRequired,
    /// The salt input was empty.
    #[error("salt must not be empty")]
    SaltRequired,
    /// The credential string input was empty.
    #[error("credential must not be empty")]
    CredentialRequired,
    /// The credential string does not split into exactly six `$`-separated
    /// segments.
    #[error("credential must contain exactly six `$`-separated segments")]
    InvalidFormat,
    /// A numeric field is missing, out of order, or not a valid integer.
    /// Carries the key of the offending field (`v`, `m`, `t`, or `p`).
    #[error("credential field `{0}` is not a valid integer")]
    MalformedField(&'static str),
    /// The credential's version differs from the derivation primitive's
    /// current version. No cross-version re-derivation is attempted.
    #[error("credential version does not match the derivation primitive")]
    VersionMismatch,
    /// A salt or hash segment is not valid unpadded URL-safe base64.
    #[error("credential contains invalid base64: {0}")]
    Decode(#[from] base64::DecodeError),
    /// The derivation primitive rejected the parameters.
    #[error(transparent)]
    Derivation(#[from] DerivationError),
    /// The re-derived hash does not equal the stored hash, i.e. the
    /// password is wrong.
    #[error("password does not match the stored hash")]
    HashMismatch,
}
