/// xorshift32 - tiny, deterministic, good enough for picking patterns and colours.
#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

// xorshift has a fixed point at zero
const ZERO_SEED_REPLACEMENT: u32 = 0x9E37_79B9;

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed };
        Self { state }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform index in `0..len` (multiply-shift, no modulo bias worth caring about).
    /// Returns 0 when `len` is 0.
    #[inline]
    pub fn below(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * len as u64) >> 32) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_does_not_get_stuck() {
        let mut rng = XorShift32::new(0);
        assert_ne!(rng.next_u32(), 0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = XorShift32::new(12345);
        let mut b = XorShift32::new(12345);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn below_stays_in_range_and_hits_every_bucket() {
        let mut rng = XorShift32::new(7);
        let mut seen = [false; 11];
        for _ in 0..2000 {
            let i = rng.below(11);
            assert!(i < 11);
            seen[i] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(rng.below(0), 0);
    }
}
