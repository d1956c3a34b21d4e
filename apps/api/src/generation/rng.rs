//! Seeded pseudo-random sequence used by the listing generator.
//!
//! MT19937 seeded through the reference `init_by_array` routine, with the key
//! built from the seed's magnitude in 32-bit little-endian words. Index draws
//! use bit-length rejection sampling, so a given seed always walks the same
//! sequence of catalog indices.

use rand_mt::Mt;

pub struct SeededSequence {
    mt: Mt,
}

impl SeededSequence {
    /// Accepts the full `i64` domain. Negative seeds share the sequence of
    /// their magnitude; zero seeds with the key `[0]`.
    pub fn new(seed: i64) -> Self {
        let key = seed_key(seed);
        SeededSequence {
            mt: Mt::new_with_key(key.iter().copied()),
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.mt.next_u32()
    }

    /// Uniform index in `0..n`. `n` must be at least 1.
    pub fn index_below(&mut self, n: usize) -> usize {
        debug_assert!(n >= 1 && n <= u32::MAX as usize);
        let bits = usize::BITS - n.leading_zeros();
        loop {
            let candidate = (self.next_u32() >> (32 - bits)) as usize;
            if candidate < n {
                return candidate;
            }
        }
    }

    pub fn choose<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.index_below(items.len())]
    }
}

fn seed_key(seed: i64) -> Vec<u32> {
    let mut magnitude = seed.unsigned_abs();
    let mut key = Vec::with_capacity(2);
    while magnitude != 0 {
        key.push(magnitude as u32);
        magnitude >>= 32;
    }
    if key.is_empty() {
        key.push(0);
    }
    key
}
