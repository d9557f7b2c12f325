//! Deterministic random stream used for obstacle scattering.
//!
//! PCG-XSH-RR: a 64-bit linear congruential state permuted down to 32-bit
//! output. Small, fast, and fully reproducible — the same seed always
//! produces the same obstacle layout, which keeps runs replayable.

#[derive(Clone, Copy, Debug)]
pub struct Pcg32 {
    state: u64,
}

impl Pcg32 {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a stream from a seed. One warm-up step decorrelates
    /// low-entropy seeds such as 0 and 1.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            state: seed.wrapping_add(Self::INCREMENT),
        };
        rng.advance();
        rng
    }

    fn advance(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// Next 32 bits of the stream.
    pub fn next_u32(&mut self) -> u32 {
        let state = self.state;
        self.advance();

        // XSH-RR output permutation: xorshift the high bits down, then
        // rotate by the top five bits of the state.
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rotation = (state >> 59) as u32;
        xorshifted.rotate_right(rotation)
    }

    /// Uniform value in `[0, bound)`. Modulo bias is irrelevant at the grid
    /// sizes this crate deals with.
    pub fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Pcg32::new(42);
        let mut b = Pcg32::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Pcg32::new(1);
        let mut b = Pcg32::new(2);
        let matches = (0..100).filter(|_| a.next_u32() == b.next_u32()).count();
        assert!(matches < 3);
    }

    #[test]
    fn below_respects_bound() {
        let mut rng = Pcg32::new(7);
        for _ in 0..1000 {
            assert!(rng.below(10) < 10);
        }
    }
}
