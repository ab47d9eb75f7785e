// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

/// Tiny deterministic RNG (xorshift64*) so tests don't need `rand`.
#[derive(Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Creates a new PRNG with the given seed.
    ///
    /// If `seed` is 0, it is replaced with 1 (zero seeds would produce
    /// all-zero output in xorshift).
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform f32 in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        ((self.next_u64() >> 40) as f32) / ((1u64 << 24) as f32)
    }
}

/// Builds a flat circle buffer of `n` records with the given `stride`.
///
/// Centers land in `[0, span)²`, radii in `[0, max_radius)`. Padding lanes
/// (if any) are filled with a sentinel the engine must ignore.
pub fn random_buffer(
    rng: &mut XorShift64,
    n: usize,
    stride: usize,
    span: f32,
    max_radius: f32,
) -> Vec<f32> {
    let mut buffer = Vec::with_capacity(n * stride);
    for _ in 0..n {
        buffer.push(rng.next_f32() * span);
        buffer.push(rng.next_f32() * span);
        buffer.push(rng.next_f32() * max_radius);
        for _ in 3..stride {
            buffer.push(-1234.5);
        }
    }
    buffer
}
