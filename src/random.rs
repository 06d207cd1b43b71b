//! Caller-supplied randomness
//!
//! Every campfire decision that rolls dice takes a `&mut dyn RandomSource`.
//! Any `rand::Rng` is a source, so hosts pass their world RNG and tests pass a
//! seeded `StdRng` or a scripted source.

use rand::Rng;

/// Source of pseudo-random values for tick and effect decisions
pub trait RandomSource {
    /// Uniform integer in `0..bound`. `bound` must be positive.
    fn next_int(&mut self, bound: u32) -> u32;

    /// Uniform float in `[0, 1)`
    fn next_float(&mut self) -> f32;

    /// Uniform double in `[0, 1)`
    fn next_double(&mut self) -> f64;

    fn next_bool(&mut self) -> bool;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_int(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "next_int bound must be positive");
        self.gen_range(0..bound.max(1))
    }

    fn next_float(&mut self) -> f32 {
        self.gen::<f32>()
    }

    fn next_double(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_bool(&mut self) -> bool {
        self.gen::<bool>()
    }
}

/// Fisher-Yates shuffle driven by a `RandomSource`
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_int(i as u32 + 1) as usize;
        items.swap(i, j);
    }
}

/// Random sign, `1.0` or `-1.0`
pub fn random_sign(rng: &mut dyn RandomSource) -> f32 {
    if rng.next_bool() {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Scripted source that always returns the same extreme values.
    ///
    /// `always()` makes every `1 in N` roll succeed; `never()` makes every
    /// roll fail.
    #[derive(Debug, Clone, Copy)]
    pub struct ScriptedRandom {
        low: bool,
    }

    impl ScriptedRandom {
        pub fn always() -> Self {
            Self { low: true }
        }

        pub fn never() -> Self {
            Self { low: false }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn next_int(&mut self, bound: u32) -> u32 {
            if self.low {
                0
            } else {
                bound.saturating_sub(1)
            }
        }

        fn next_float(&mut self) -> f32 {
            if self.low {
                0.0
            } else {
                0.999
            }
        }

        fn next_double(&mut self) -> f64 {
            if self.low {
                0.0
            } else {
                0.999
            }
        }

        fn next_bool(&mut self) -> bool {
            self.low
        }
    }
}
