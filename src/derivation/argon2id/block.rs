//! The 1024-byte Argon2 memory block and compression function G.
//!
//! G is built from the BLAKE2b round function, modified to multiply the
//! lower 32 bits of its inputs for stronger diffusion (RFC 9106 §3.5).

/// A 1024-byte memory block, stored as 128 little-endian 64-bit words.
///
/// Blocks are the unit of memory the algorithm fills and mixes. Contents
/// are zeroed on drop.
#[derive(Debug, Clone)]
pub(crate) struct Block(pub(crate) [u64; 128]);

impl Block {
    pub(crate) const ZERO: Self = Self([0u64; 128]);

    pub(crate) fn xor_assign(&mut self, other: &Block) {
        self.0
            .iter_mut()
            .zip(other.0.iter())
            .for_each(|(a, b)| *a ^= b);
    }

    pub(crate) fn from_bytes(bytes: [u8; 1024]) -> Self {
        let words = core::array::from_fn(|i| {
            let start = i * 8;
            u64::from_le_bytes(bytes[start..start + 8].try_into().unwrap())
        });
        Block(words)
    }

    pub(crate) fn to_bytes(&self) -> [u8; 1024] {
        let mut out = [0u8; 1024];
        self.0.iter().enumerate().for_each(|(i, word)| {
            let start = i * 8;
            out[start..start + 8].copy_from_slice(&word.to_le_bytes());
        });
        out
    }

    /// Compression function G: P(P(X ⊕ Y)) ⊕ X ⊕ Y.
    ///
    /// The permutation P runs first over rows of 16 consecutive words,
    /// then over interleaved columns, so every word of the result depends
    /// on every word of both inputs.
    pub(crate) fn compress(x: &Self, y: &Self) -> Self {
        let mut r = Block::ZERO;
        for i in 0..128 {
            r.0[i] = x.0[i] ^ y.0[i];
        }

        let mut z = r.clone();

        for i in 0..8 {
            let base = 16 * i;
            let mut v: [u64; 16] = z.0[base..base + 16].try_into().unwrap();
            permute(&mut v);
            z.0[base..base + 16].copy_from_slice(&v);
        }

        for i in 0..8 {
            // Column pass: words 2i, 2i+1 of each 16-word row.
            let idx: [usize; 16] = core::array::from_fn(|k| 2 * i + (k / 2) * 16 + (k % 2));
            let mut v: [u64; 16] = core::array::from_fn(|k| z.0[idx[k]]);
            permute(&mut v);
            for (k, &pos) in idx.iter().enumerate() {
                z.0[pos] = v[k];
            }
        }

        for i in 0..128 {
            z.0[i] ^= r.0[i];
        }

        z
    }

    /// Builds an address block for data-independent indexing.
    ///
    /// Computed as G(0, G(0, Z)) where Z packs the current position and a
    /// running counter, so reference indices for the first half of the
    /// first pass never depend on memory contents.
    pub(crate) fn address_block(
        pass: u32,
        lane: u32,
        slice: u32,
        total_blocks: u32,
        time: u32,
        counter: u32,
    ) -> Self {
        let mut input = Block::ZERO;
        input.0[0] = pass as u64;
        input.0[1] = lane as u64;
        input.0[2] = slice as u64;
        input.0[3] = total_blocks as u64;
        input.0[4] = time as u64;
        input.0[5] = 2; // Argon2id
        input.0[6] = counter as u64;

        let inner = Block::compress(&Block::ZERO, &input);
        Block::compress(&Block::ZERO, &inner)
    }
}

impl Drop for Block {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(|v| *v = 0);
    }
}

/// Argon2's variant of the BLAKE2b G function.
///
/// Each addition also mixes in `2 × trunc(a) × trunc(b)`, where trunc()
/// keeps the lower 32 bits. Rotations are 32, 24, 16, and 63 bits.
#[inline(always)]
fn g(a: u64, b: u64, c: u64, d: u64) -> (u64, u64, u64, u64) {
    let a = a.wrapping_add(b).wrapping_add(
        2u64.wrapping_mul((a as u32) as u64)
            .wrapping_mul((b as u32) as u64),
    );
    let d = (d ^ a).rotate_right(32);

    let c = c.wrapping_add(d).wrapping_add(
        2u64.wrapping_mul((c as u32) as u64)
            .wrapping_mul((d as u32) as u64),
    );
    let b = (b ^ c).rotate_right(24);

    let a = a.wrapping_add(b).wrapping_add(
        2u64.wrapping_mul((a as u32) as u64)
            .wrapping_mul((b as u32) as u64),
    );
    let d = (d ^ a).rotate_right(16);

    let c = c.wrapping_add(d).wrapping_add(
        2u64.wrapping_mul((c as u32) as u64)
            .wrapping_mul((d as u32) as u64),
    );
    let b = (b ^ c).rotate_right(63);

    (a, b, c, d)
}

/// One round of the modified BLAKE2b permutation over a 4×4 word matrix:
/// columns first, then diagonals.
#[inline(always)]
fn permute(v: &mut [u64; 16]) {
    (v[0], v[4], v[8], v[12]) = g(v[0], v[4], v[8], v[12]);
    (v[1], v[5], v[9], v[13]) = g(v[1], v[5], v[9], v[13]);
    (v[2], v[6], v[10], v[14]) = g(v[2], v[6], v[10], v[14]);
    (v[3], v[7], v[11], v[15]) = g(v[3], v[7], v[11], v[15]);

    (v[0], v[5], v[10], v[15]) = g(v[0], v[5], v[10], v[15]);
    (v[1], v[6], v[11], v[12]) = g(v[1], v[6], v[11], v[12]);
    (v[2], v[7], v[8], v[13]) = g(v[2], v[7], v[8], v[13]);
    (v[3], v[4], v[9], v[14]) = g(v[3], v[4], v[9], v[14]);
}
