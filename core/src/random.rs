//! Pluggable source of randomness for the simulator.
//!
//! Everything random in a scan (which devices are picked, when they are
//! revealed, which findings fire) is drawn through [`RandomSource`], so a seed
//! or a scripted source fully determines a scan's content.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource: Send {
    /// Bernoulli draw that is `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform integer in `0..upper`. `upper` must be non-zero.
    fn below(&mut self, upper: usize) -> usize;
}

/// [`StdRng`]-backed source, reproducible when built from a seed.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }

    fn below(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

/// Returns a Fisher-Yates shuffled copy of `items`.
pub fn shuffled<T: Clone>(items: &[T], random: &mut dyn RandomSource) -> Vec<T> {
    let mut out: Vec<T> = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = random.below(i + 1);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
pub(crate) mod scripted {
    use std::collections::VecDeque;

    use super::RandomSource;

    /// Replays fixed outcomes; `chance` falls back to `false` and `below` to 0.
    #[derive(Default)]
    pub struct ScriptedRandom {
        pub chances: VecDeque<bool>,
        pub picks: VecDeque<usize>,
    }

    impl ScriptedRandom {
        pub fn with_chances(chances: &[bool]) -> Self {
            Self {
                chances: chances.iter().copied().collect(),
                picks: VecDeque::new(),
            }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn chance(&mut self, _probability: f64) -> bool {
            self.chances.pop_front().unwrap_or(false)
        }

        fn below(&mut self, upper: usize) -> usize {
            self.picks.pop_front().unwrap_or(0).min(upper - 1)
        }
    }
}
