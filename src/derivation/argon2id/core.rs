//! Argon2id orchestration: parameter checks, H0, lane seeding, memory
//! filling, and finalization.

use super::block::Block;
use super::hprime::{blake2b_512, variable_hash};
use super::memory::Matrix;
use crate::derivation::{Derivation, DerivationError, Options};

/// Argon2 version 1.3, the value stamped into credential strings as `v=19`.
const VERSION: u32 = 0x13;

const SYNC_POINTS: u32 = 4;

/// The Argon2id derivation primitive (RFC 9106).
///
/// Output is bit-compatible with Go's `x/crypto/argon2.IDKey`: no secret
/// key or associated data inputs, no minimum salt length, and the memory
/// cost rounded down to a multiple of `4 × threads` (clamped up to
/// `8 × threads`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2id;

impl Derivation for Argon2id {
    fn version(&self) -> u32 {
        VERSION
    }

    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        options: &Options,
    ) -> Result<Vec<u8>, DerivationError> {
        argon2id(password, salt, options)
    }
}

/// Computes an Argon2id hash of the given password.
///
/// # Arguments
///
/// * `password` - The password to hash
/// * `salt` - A random salt (16+ bytes recommended; no minimum enforced)
/// * `options` - Cost parameters and output length
///
/// # Returns
///
/// The derived hash of `options.key_len` bytes, or a [`DerivationError`]
/// if a parameter is out of contract.
pub fn argon2id(
    password: &[u8],
    salt: &[u8],
    options: &Options,
) -> Result<Vec<u8>, DerivationError> {
    if options.time < 1 {
        return Err(DerivationError::TooFewPasses);
    }
    if options.memory < 1 {
        return Err(DerivationError::MemoryTooSmall);
    }
    if options.threads < 1 {
        return Err(DerivationError::TooFewThreads);
    }
    if options.key_len < 4 {
        return Err(DerivationError::OutputTooShort);
    }

    // H0 hashes the memory cost as requested, before rounding.
    let h0 = initial_hash(password, salt, options);

    let lanes = options.threads as u32;
    let mut total_blocks = options.memory / (SYNC_POINTS * lanes) * (SYNC_POINTS * lanes);
    if total_blocks < 2 * SYNC_POINTS * lanes {
        total_blocks = 2 * SYNC_POINTS * lanes;
    }

    let matrix = Matrix::new(lanes, total_blocks);
    let mut memory = vec![Block::ZERO; total_blocks as usize];

    // Seed each lane: B[lane][j] = H'^1024(H0 || LE32(j) || LE32(lane))
    for lane in 0..lanes {
        for j in 0..2u32 {
            let mut input = Vec::with_capacity(72);
            input.extend_from_slice(&h0);
            input.extend_from_slice(&j.to_le_bytes());
            input.extend_from_slice(&lane.to_le_bytes());

            let seed: [u8; 1024] = variable_hash(1024, &input).try_into().unwrap();
            memory[matrix.index(lane, j)] = Block::from_bytes(seed);
        }
    }

    matrix.fill(&mut memory, options.time);

    // XOR the last block of every lane, then hash down to the tag length.
    let mut last = Block::ZERO;
    for lane in 0..lanes {
        last.xor_assign(&memory[matrix.index(lane, matrix.lane_len - 1)]);
    }

    Ok(variable_hash(options.key_len as usize, &last.to_bytes()))
}

/// Initial hash H0 (RFC 9106 §3.2).
///
/// A 64-byte BLAKE2b over all parameters and length-prefixed inputs:
///
/// ```text
/// H0 = BLAKE2b(p || T || m || t || v || y || |P| || P || |S| || S || 0 || 0)
/// ```
///
/// The two trailing zero lengths stand for the absent secret key and
/// associated data.
fn initial_hash(password: &[u8], salt: &[u8], options: &Options) -> [u8; 64] {
    let mut buf = Vec::with_capacity(32 + password.len() + salt.len());

    buf.extend_from_slice(&(options.threads as u32).to_le_bytes());
    buf.extend_from_slice(&options.key_len.to_le_bytes());
    buf.extend_from_slice(&options.memory.to_le_bytes());
    buf.extend_from_slice(&options.time.to_le_bytes());
    buf.extend_from_slice(&VERSION.to_le_bytes());
    buf.extend_from_slice(&2u32.to_le_bytes()); // type = Argon2id

    buf.extend_from_slice(&(password.len() as u32).to_le_bytes());
    buf.extend_from_slice(password);

    buf.extend_from_slice(&(salt.len() as u32).to_le_bytes());
    buf.extend_from_slice(salt);

    buf.extend_from_slice(&0u32.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());

    blake2b_512(&buf)
}
