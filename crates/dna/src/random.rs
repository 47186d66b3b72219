//! Uniform random draws used by the factory, mutation and meiosis.
//!
//! Every `rand::Rng` already is a [`RandomSource`], so a seeded
//! [`StdRng`](rand::rngs::StdRng) gives reproducible runs. Hosts that need
//! exact control (replays, scripted tests) can implement the trait directly.

use rand::Rng;

pub trait RandomSource {
    /// Uniform integer in `[min, max]`, both inclusive. Requires `min <= max`.
    fn random_int_inclusive(&mut self, min: i64, max: i64) -> i64;

    /// Uniform float in `[min, max]`. Requires `min <= max`.
    fn random_float_in_range(&mut self, min: f64, max: f64) -> f64;

    /// Fair coin: `true` with probability 1/2.
    fn coin_flip(&mut self) -> bool {
        self.random_int_inclusive(1, 2) == 1
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn random_int_inclusive(&mut self, min: i64, max: i64) -> i64 {
        self.gen_range(min..=max)
    }

    fn random_float_in_range(&mut self, min: f64, max: f64) -> f64 {
        if min == max {
            return min;
        }
        self.gen_range(min..=max)
    }
}
