//! Argon2id password hashing function (RFC 9106).
//!
//! Argon2id is a memory-hard password hashing function combining the
//! data-independent addressing of Argon2i (for side-channel resistance
//! during the first half of the first pass) with the data-dependent
//! addressing of Argon2d (for resistance against time-memory trade-offs).
//!
//! The computation has four stages:
//!
//! 1. **Initialization**: H0 = BLAKE2b(params || password || salt).
//! 2. **Lane seeding**: the first two blocks of each lane come from the
//!    variable-length hash H' of H0.
//! 3. **Memory filling**: the remaining blocks are produced by the
//!    compression function G over multiple passes.
//! 4. **Finalization**: the last block of each lane is XORed together and
//!    H' reduces the result to the requested tag length.
//!
//! This implementation matches Go's `x/crypto/argon2.IDKey` bit for bit,
//! so credentials produced by either side verify against the other.

pub(crate) mod block;
pub mod core;
pub(crate) mod hprime;
pub(crate) mod memory;

pub use self::core::{Argon2id, argon2id};
