//! Memory matrix organization and the filling loop.
//!
//! Memory is a matrix of 1024-byte blocks: `lanes` independent rows, each
//! split into 4 slices that act as synchronization points. Within a slice,
//! a block is computed as G(previous block in lane, reference block), where
//! the reference is selected pseudo-randomly from already-computed blocks.

use super::block::Block;

const SYNC_POINTS: u32 = 4;

/// Geometry of the block matrix.
#[derive(Debug, Clone)]
pub(crate) struct Matrix {
    pub(crate) lanes: u32,
    pub(crate) lane_len: u32,
    pub(crate) segment_len: u32,
    pub(crate) total_blocks: u32,
}

impl Matrix {
    /// `total_blocks` must already be rounded to a multiple of `4 × lanes`.
    pub(crate) fn new(lanes: u32, total_blocks: u32) -> Self {
        let lane_len = total_blocks / lanes;
        Self {
            lanes,
            lane_len,
            segment_len: lane_len / SYNC_POINTS,
            total_blocks,
        }
    }

    #[inline]
    pub(crate) fn index(&self, lane: u32, index_in_lane: u32) -> usize {
        (lane * self.lane_len + index_in_lane) as usize
    }

    /// Runs the requested number of passes over the whole matrix.
    ///
    /// Slices are strict sync points: a lane may only reference blocks of
    /// other lanes from slices already completed in the current pass.
    /// Lanes are processed sequentially here; the result is identical to a
    /// threaded fill.
    pub(crate) fn fill(&self, memory: &mut [Block], time: u32) {
        for pass in 0..time {
            for slice in 0..SYNC_POINTS {
                for lane in 0..self.lanes {
                    self.fill_segment(memory, pass, slice, lane, time);
                }
            }
        }
    }

    /// Fills one lane's share of one slice.
    ///
    /// Argon2id addresses data-independently during the first half of the
    /// first pass (address blocks) and data-dependently everywhere else
    /// (the first word of the previous block).
    fn fill_segment(&self, memory: &mut [Block], pass: u32, slice: u32, lane: u32, time: u32) {
        let data_independent = pass == 0 && slice < SYNC_POINTS / 2;

        let mut addresses = Block::ZERO;
        let mut counter = 0u32;

        if data_independent {
            counter += 1;
            addresses =
                Block::address_block(pass, lane, slice, self.total_blocks, time, counter);
        }

        // The first two blocks of each lane are seeded before filling.
        let start = if pass == 0 && slice == 0 { 2 } else { 0 };

        for i in start..self.segment_len {
            let index_in_lane = slice * self.segment_len + i;

            let prev_idx = if index_in_lane == 0 {
                self.lane_len - 1
            } else {
                index_in_lane - 1
            };

            let (j1, j2) = if data_independent {
                if i != 0 && i % 128 == 0 {
                    counter += 1;
                    addresses = Block::address_block(
                        pass,
                        lane,
                        slice,
                        self.total_blocks,
                        time,
                        counter,
                    );
                }
                let word = addresses.0[(i % 128) as usize];
                (word as u32, (word >> 32) as u32)
            } else {
                let word = memory[self.index(lane, prev_idx)].0[0];
                (word as u32, (word >> 32) as u32)
            };

            let (ref_lane, ref_idx) = self.reference_position(pass, slice, lane, i, j1, j2);

            let compressed = Block::compress(
                &memory[self.index(lane, prev_idx)],
                &memory[self.index(ref_lane, ref_idx)],
            );

            let cur = self.index(lane, index_in_lane);
            if pass == 0 {
                memory[cur] = compressed;
            } else {
                memory[cur].xor_assign(&compressed);
            }
        }
    }

    /// Selects the reference block for position (lane, slice, i).
    ///
    /// Implements RFC 9106 §3.4.1.3: the reference lane comes from J2
    /// (except in the very first slice, which may only look at itself), the
    /// window of eligible blocks depends on pass/slice/lane, and J1 maps
    /// into that window through the quadratic phi distribution, which
    /// biases selection toward recent blocks.
    fn reference_position(
        &self,
        pass: u32,
        slice: u32,
        lane: u32,
        index_in_segment: u32,
        j1: u32,
        j2: u32,
    ) -> (u32, u32) {
        let ref_lane = if pass == 0 && slice == 0 {
            lane
        } else {
            j2 % self.lanes
        };

        let same_lane = ref_lane == lane;

        let window = if pass == 0 {
            if slice == 0 {
                index_in_segment.saturating_sub(1)
            } else if same_lane {
                slice * self.segment_len + index_in_segment - 1
            } else {
                let base = slice * self.segment_len;
                if index_in_segment == 0 {
                    base.saturating_sub(1)
                } else {
                    base
                }
            }
        } else if same_lane {
            self.lane_len - self.segment_len + index_in_segment - 1
        } else {
            let base = self.lane_len - self.segment_len;
            if index_in_segment == 0 {
                base.saturating_sub(1)
            } else {
                base
            }
        };

        if window == 0 {
            return (ref_lane, 0);
        }

        // phi: x = J1² / 2³², position = W - 1 - (W × x / 2³²)
        let j1 = j1 as u64;
        let x = (j1 * j1) >> 32;
        let relative = (window as u64)
            .saturating_sub(1)
            .saturating_sub(((window as u64) * x) >> 32) as u32;

        let window_start = if pass == 0 || slice == SYNC_POINTS - 1 {
            0
        } else {
            (slice + 1) * self.segment_len
        };

        (ref_lane, (window_start + relative) % self.lane_len)
    }
}
