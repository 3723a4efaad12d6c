//! Password hashing and verification with Argon2id credential strings.
//!
//! This crate turns a password and a salt into a single, self-describing
//! credential string, and later checks a password against such a string
//! without leaking timing information. The credential string is the only
//! persisted artifact: it carries the algorithm version, the cost
//! parameters, and the base64-encoded salt and hash, so a stored credential
//! can always be re-verified with the exact parameters it was created with.
//!
//! The focus is on **format stability, parameter round-tripping, and
//! constant-time verification**, rather than on providing a large
//! cryptographic API.
//!
//! # Module overview
//!
//! - `codec`
//!   URL-safe, unpadded base64 encoding of credential material. This is the
//!   textual form in which salt and hash bytes are embedded into the
//!   `$`-delimited credential string.
//!
//! - `derivation`
//!   The memory-hard key-derivation seam. The credential service works
//!   against the [`Derivation`] trait, so the primitive is an injected
//!   capability; the crate ships [`Argon2id`] (RFC 9106, version 19) as its
//!   stock implementation, bit-compatible with Go's `x/crypto/argon2`.
//!
//! - `credential`
//!   The credential service itself: hashing (derive → encode → format) and
//!   verification (parse → decode → re-derive → constant-time compare),
//!   with a closed set of typed errors.
//!
//! # Credential string format
//!
//! ```text
//! $argon2id$v=<version>$m=<memory>,t=<time>,p=<threads>$<salt>$<hash>
//! ```
//!
//! Exactly six `$`-separated segments (the leading `$` produces an empty
//! first segment). The parameter order `m`, `t`, `p` is fixed. The output
//! length is not stored; verification recovers it from the decoded hash.
//!
//! # Design goals
//!
//! - Pure, synchronous, stateless operations with no I/O
//! - Minimal and explicit APIs
//! - Every failure surfaced as a typed, terminal error
//! - Constant-time hash comparison, never short-circuiting
//!
//! This crate is not a password-policy engine and not a credential store;
//! generating salts, rate limiting, and persistence are left to the caller.

pub mod codec;
pub mod credential;
pub mod derivation;

pub use credential::{CredentialError, CredentialService};
pub use derivation::{Argon2id, Derivation, DerivationError, Options};
