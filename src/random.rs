use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Exp};

/// The two variate streams the stochastic engine consumes. Each engine owns
/// its source, so ensemble replication is just constructing engines with
/// distinct seeds, and tests can inject scripted streams.
pub trait RandomSource {
    /// A uniform variate in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// An exponential variate with the given mean. `mean` must be positive.
    fn exponential(&mut self, mean: f64) -> f64;
}

/// The default source: a `StdRng` seeded per instance, so identical seeds
/// reproduce identical trajectories.
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        SeededSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn exponential(&mut self, mean: f64) -> f64 {
        // Will never panic: `Exp::new` only fails on a non-positive rate,
        // and callers guarantee a positive mean.
        let distribution = Exp::new(1.0 / mean).unwrap();
        distribution.sample(&mut self.rng)
    }
}

/// Replays fixed variate sequences, for tests that pin down exact event
/// sequences. Panics when a script runs dry.
#[cfg(test)]
pub(crate) struct ScriptedSource {
    uniforms: std::vec::IntoIter<f64>,
    waits: std::vec::IntoIter<f64>,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(uniforms: Vec<f64>, waits: Vec<f64>) -> Self {
        ScriptedSource {
            uniforms: uniforms.into_iter(),
            waits: waits.into_iter(),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn uniform(&mut self) -> f64 {
        self.uniforms.next().expect("uniform script exhausted")
    }

    fn exponential(&mut self, _mean: f64) -> f64 {
        self.waits.next().expect("waiting-time script exhausted")
    }
}
