//! ISAAC (Indirection, Shift, Accumulate, Add, and Count) PRNG
//!
//! Bob Jenkins' 32-bit generator, exposed through the `rand_core` traits so a
//! stream can be handed to anything that takes an `Rng`.

use rand_core::{RngCore, SeedableRng, impls};

const LOG_SIZE: usize = 8;
const SIZE: usize = 1 << LOG_SIZE; // 256
const HALF: usize = SIZE / 2;
const GOLDEN_RATIO: u32 = 0x9e37_79b9;

/// Shift applied at each step of the key-scheduling mix. Positive shifts left,
/// negative shifts right.
const MIX_SHIFTS: [i32; 8] = [11, -2, 8, -16, 10, -4, 8, -9];

/// One self-contained ISAAC stream.
///
/// Streams never share state. Two streams built from different seeds are
/// statistically independent, which is what each sampling worker relies on.
#[derive(Clone)]
pub struct IsaacRng {
    mem: [u32; SIZE],
    rsl: [u32; SIZE],
    cursor: usize,
    a: u32,
    b: u32,
    c: u32,
}

#[inline]
fn shifted(x: u32, shift: i32) -> u32 {
    if shift >= 0 {
        x << shift
    } else {
        x >> -shift
    }
}

impl IsaacRng {
    /// Build the generator state from a full block of seed words.
    fn from_words(words: [u32; SIZE]) -> Self {
        let mut rng = Self {
            mem: [0; SIZE],
            rsl: words,
            cursor: 0,
            a: 0,
            b: 0,
            c: 0,
        };

        let mut acc = [GOLDEN_RATIO; 8];
        for _ in 0..4 {
            Self::scramble(&mut acc);
        }

        // Two passes so every seed word reaches every memory word
        for pass in 0..2 {
            for chunk in 0..SIZE / 8 {
                let base = chunk * 8;
                for (k, word) in acc.iter_mut().enumerate() {
                    let src = if pass == 0 {
                        rng.rsl[base + k]
                    } else {
                        rng.mem[base + k]
                    };
                    *word = word.wrapping_add(src);
                }
                Self::scramble(&mut acc);
                rng.mem[base..base + 8].copy_from_slice(&acc);
            }
        }

        rng.refill();
        rng
    }

    #[inline]
    fn scramble(acc: &mut [u32; 8]) {
        for (k, &shift) in MIX_SHIFTS.iter().enumerate() {
            acc[k] ^= shifted(acc[(k + 1) % 8], shift);
            acc[(k + 3) % 8] = acc[(k + 3) % 8].wrapping_add(acc[k]);
            acc[(k + 1) % 8] = acc[(k + 1) % 8].wrapping_add(acc[(k + 2) % 8]);
        }
    }

    #[inline]
    fn lookup(&self, x: u32) -> u32 {
        self.mem[(x >> 2) as usize & (SIZE - 1)]
    }

    /// Produce the next block of 256 results.
    fn refill(&mut self) {
        self.c = self.c.wrapping_add(1);
        self.b = self.b.wrapping_add(self.c);

        for i in 0..SIZE {
            let mix = match i % 4 {
                0 => self.a << 13,
                1 => self.a >> 6,
                2 => self.a << 2,
                _ => self.a >> 16,
            };
            let x = self.mem[i];
            self.a = (self.a ^ mix).wrapping_add(self.mem[(i + HALF) % SIZE]);
            let y = self.lookup(x).wrapping_add(self.a).wrapping_add(self.b);
            self.mem[i] = y;
            self.b = self.lookup(y >> LOG_SIZE).wrapping_add(x);
            self.rsl[i] = self.b;
        }

        self.cursor = SIZE;
    }
}

impl RngCore for IsaacRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        if self.cursor == 0 {
            self.refill();
        }
        self.cursor -= 1;
        self.rsl[self.cursor]
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for IsaacRng {
    type Seed = [u8; 32];

    /// The 32 seed bytes fill the first eight seed words; the rest stay zero.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut words = [0u32; SIZE];
        for (word, bytes) in words.iter_mut().zip(seed.chunks_exact(4)) {
            *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        Self::from_words(words)
    }
}

impl Default for IsaacRng {
    fn default() -> Self {
        Self::from_seed([0; 32])
    }
}
