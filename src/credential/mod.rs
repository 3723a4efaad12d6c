//! Credential strings: hashing, parsing, and verification.
//!
//! A credential string is the canonical textual form of a completed hash:
//!
//! ```text
//! $argon2id$v=19$m=65536,t=1,p=4$c2FsdA$OWwmnKFemKE2ILjM60j1so1oRXDFJYqvOiYlZTByvuU
//! ```
//!
//! It is produced once by [`CredentialService::hash_password`], persisted
//! by the caller as an opaque value, and later handed back verbatim to
//! [`CredentialService::verify_password`]. The string is self-describing:
//! it carries everything verification needs except the password itself.
//! The salt inside it is base64-encoded but not secret — it exists to make
//! re-derivation reproducible, not to be protected.
//!
//! Verification is strict. The version must equal the primitive's current
//! version (a mismatch is a hard error, not an upgrade path), the cost
//! fields must appear as `m`, `t`, `p` in that order, and the final hash
//! comparison runs in constant time so a mismatch position never leaks
//! through timing.

mod core;
mod error;
mod parse;

pub use self::core::CredentialService;
pub use self::error::CredentialError;
