//! Xorshift32 random source
//!
//! Same generator the grid behaviors use; seeded per simulation so tests can
//! replay a run.

pub const DEFAULT_SEED: u32 = 12345;

#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    /// Zero is a fixed point of xorshift, so it is remapped to the default seed
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }

    /// Uniform in [0, 1)
    #[inline]
    pub fn unit(&mut self) -> f64 {
        // Top 24 bits keep the result strictly below 1.0
        (self.next_u32() >> 8) as f64 / (1u32 << 24) as f64
    }

    /// Uniform in [-half_width, half_width)
    #[inline]
    pub fn symmetric(&mut self, half_width: f64) -> f64 {
        (self.unit() - 0.5) * 2.0 * half_width
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}
