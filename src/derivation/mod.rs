//! Memory-hard key derivation behind an injectable seam.
//!
//! The credential service never calls a hash function directly: it is
//! generic over the [`Derivation`] trait, which models the primitive as a
//! deterministic function from `(password, salt, options)` to raw hash
//! bytes plus a fixed version constant. The version is stamped into every
//! new credential string and checked against stored ones.
//!
//! The crate ships one implementation, [`Argon2id`] (RFC 9106, version 19),
//! in the `argon2id` submodule. Callers with their own primitive can
//! implement the trait instead.

pub mod argon2id;

pub use argon2id::{Argon2id, argon2id};

use thiserror::Error;

/// Derivation parameters.
///
/// These control the memory and time cost of the primitive and the length
/// of its output. All fields must be positive; the primitive rejects
/// zero values but applies no upper bound, so choosing sane costs for the
/// deployment is the caller's responsibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Number of passes over memory (minimum 1).
    pub time: u32,
    /// Memory cost in KiB (minimum 1).
    pub memory: u32,
    /// Degree of parallelism (minimum 1).
    pub threads: u8,
    /// Length of the derived hash in bytes (minimum 4).
    pub key_len: u32,
}

impl Default for Options {
    /// Default parameters: one pass over 64 MiB with four lanes, 32-byte
    /// output. Chosen for interactive use in a web application.
    fn default() -> Self {
        Self {
            time: 1,
            memory: 64 * 1024,
            threads: 4,
            key_len: 32,
        }
    }
}

/// Errors raised by a derivation primitive rejecting its parameters.
///
/// These are terminal: the primitive performs no clamping or fallback on
/// out-of-contract values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DerivationError {
    /// Time (passes) must be at least 1.
    #[error("time cost must be at least 1")]
    TooFewPasses,
    /// Memory must be at least 1 KiB.
    #[error("memory cost must be at least 1 KiB")]
    MemoryTooSmall,
    /// Parallelism must be at least 1.
    #[error("parallelism must be at least 1")]
    TooFewThreads,
    /// Output length must be at least 4 bytes.
    #[error("output length must be at least 4 bytes")]
    OutputTooShort,
}

/// A deterministic, memory-hard password-to-key function.
///
/// Implementations must be pure: identical inputs always produce identical
/// output, with no internal randomness and no side effects. This is what
/// makes a stored credential re-verifiable.
pub trait Derivation {
    /// Version identifier of the primitive.
    ///
    /// Stamped into newly formatted credential strings and required to
    /// match exactly when verifying stored ones.
    fn version(&self) -> u32;

    /// Derives `options.key_len` bytes from the password and salt.
    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        options: &Options,
    ) -> Result<Vec<u8>, DerivationError>;
}
