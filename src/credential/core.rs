//! The credential service: hashing and constant-time verification.

use subtle::ConstantTimeEq;

use super::error::CredentialError;
use super::parse;
use crate::codec;
use crate::derivation::{Argon2id, Derivation, Options};

/// Hashes passwords into credential strings and verifies passwords
/// against them.
///
/// The service owns an injected [`Derivation`] primitive and nothing
/// else: both operations are pure, synchronous, and safe to run
/// concurrently. Memory use is bounded by `options.memory` per call, so
/// callers running many derivations at once must budget for the
/// aggregate themselves.
#[derive(Debug, Clone, Default)]
pub struct CredentialService<D = Argon2id> {
    derivation: D,
}

impl CredentialService<Argon2id> {
    /// Creates a service backed by the stock Argon2id primitive.
    pub fn argon2id() -> Self {
        Self::new(Argon2id)
    }
}

impl<D: Derivation> CredentialService<D> {
    /// Creates a service around the given derivation primitive.
    pub fn new(derivation: D) -> Self {
        Self { derivation }
    }

    /// Hashes a password into a credential string.
    ///
    /// The salt is caller-chosen; it is not secret, but it must not be
    /// empty, and it is stored base64-encoded inside the credential so
    /// verification can re-derive with it. Deterministic: identical
    /// inputs always produce the identical string.
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// use credal::{CredentialService, Options};
    ///
    /// let service = CredentialService::argon2id();
    /// let credential = service
    ///     .hash_password("password", "a random salt", &Options::default())
    ///     .unwrap();
    /// ```
    pub fn hash_password(
        &self,
        password: &str,
        salt: &str,
        options: &Options,
    ) -> Result<String, CredentialError> {
        if password.is_empty() {
            return Err(CredentialError::PasswordRequired);
        }
        if salt.is_empty() {
            return Err(CredentialError::SaltRequired);
        }

        let hash = self
            .derivation
            .derive(password.as_bytes(), salt.as_bytes(), options)?;

        Ok(format!(
            "$argon2id$v={}$m={},t={},p={}${}${}",
            self.derivation.version(),
            options.memory,
            options.time,
            options.threads,
            codec::encode(salt.as_bytes()),
            codec::encode(&hash),
        ))
    }

    /// Verifies a password against a stored credential string.
    ///
    /// The pipeline is linear: split into six segments, check the version
    /// against the primitive, parse the cost parameters, decode salt and
    /// hash, re-derive with the output length taken from the decoded hash
    /// (so credentials hashed with any historical `key_len` verify), and
    /// compare in constant time.
    ///
    /// Returns `Ok(())` only on exact equality;
    /// [`HashMismatch`](CredentialError::HashMismatch) means the password
    /// is wrong, every other error means the credential is unusable.
    pub fn verify_password(&self, password: &str, credential: &str) -> Result<(), CredentialError> {
        if password.is_empty() {
            return Err(CredentialError::PasswordRequired);
        }
        if credential.is_empty() {
            return Err(CredentialError::CredentialRequired);
        }

        let segments: Vec<&str> = credential.split('$').collect();
        if segments.len() != 6 {
            return Err(CredentialError::InvalidFormat);
        }

        let version = parse::version(segments[2])?;
        if version != self.derivation.version() {
            return Err(CredentialError::VersionMismatch);
        }

        let (memory, time, threads) = parse::cost(segments[3])?;

        let salt = codec::decode(segments[4])?;
        let stored = codec::decode(segments[5])?;

        let options = Options {
            time,
            memory,
            threads,
            key_len: stored.len() as u32,
        };
        let derived = self
            .derivation
            .derive(password.as_bytes(), &salt, &options)?;

        // Never short-circuits on the first differing byte.
        if bool::from(derived.ct_eq(&stored)) {
            Ok(())
        } else {
            Err(CredentialError::HashMismatch)
        }
    }
}
