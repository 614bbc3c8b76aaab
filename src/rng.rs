//! Xorshift PRNG behind the `rand_core` traits.
//!
//! Fade countdowns and match targets only need to look unpredictable, not
//! be unpredictable; a 32-bit xorshift is plenty and costs a handful of
//! instructions. Seeding folds in the EEPROM boot counter so consecutive
//! power-ups play differently.

use rand_core::{Error, RngCore};

const SEED_MIX: u32 = 0x9E37_79B9;

pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Zero is the xorshift fixed point; a zero seed is replaced.
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { SEED_MIX } else { seed },
        }
    }

    /// Seed from the EEPROM boot counter
    /// (see `Eeprom::bump_boot_count`).
    pub const fn from_boot_count(count: u8) -> Self {
        Self::new(SEED_MIX ^ ((count as u32) << 8 | count as u32))
    }
}

impl RngCore for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    fn next_u64(&mut self) -> u64 {
        (self.next_u32() as u64) << 32 | self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_per_seed() {
        let mut a = XorShift32::new(42);
        let mut b = XorShift32::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn seeds_diverge() {
        let mut a = XorShift32::new(1);
        let mut b = XorShift32::new(2);
        assert_ne!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn never_reaches_the_zero_fixed_point() {
        let mut rng = XorShift32::new(0);
        for _ in 0..10_000 {
            assert_ne!(rng.next_u32(), 0);
        }
    }

    #[test]
    fn boot_counts_give_distinct_streams() {
        let mut seen_first = [0u32; 8];
        for count in 0..8u8 {
            seen_first[count as usize] = XorShift32::from_boot_count(count).next_u32();
        }
        for i in 0..8 {
            for j in i + 1..8 {
                assert_ne!(seen_first[i], seen_first[j]);
            }
        }
    }

    #[test]
    fn fill_bytes_covers_partial_chunks() {
        let mut rng = XorShift32::new(9);
        let mut buf = [0u8; 7];
        rng.fill_bytes(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }
}
