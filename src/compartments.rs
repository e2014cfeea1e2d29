/*!

The shared compartment data model: a fixed-shape record of the four SIR
values at one instant, and the trajectory of such records a simulation run
produces.

The stochastic engine records integer counts (`Compartments<u32>`); the
continuous engine records fractions of the initial population
(`Compartments<f64>`, with the `total` field carrying the absolute population
mass). Both feed the same [`Trajectory`] interface, which is the entire
contract with downstream consumers such as plotting or CSV reports.

*/

use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// Names one of the four recorded series of a [`Trajectory`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Compartment {
    Susceptible,
    Infected,
    Recovered,
    Population,
}

/// Compartment values at a single instant. The `total` field is re-derived
/// from the other three on every update; the population is closed, so this is
/// an invariant recomputation rather than a source of change.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Compartments<T> {
    pub susceptible: T,
    pub infected: T,
    pub recovered: T,
    pub total: T,
}

impl<T: Copy> Compartments<T> {
    #[must_use]
    pub fn get(&self, compartment: Compartment) -> T {
        match compartment {
            Compartment::Susceptible => self.susceptible,
            Compartment::Infected => self.infected,
            Compartment::Recovered => self.recovered,
            Compartment::Population => self.total,
        }
    }
}

impl Compartments<u32> {
    /// Builds a state from an `(S, I, R)` triple, deriving the total.
    #[must_use]
    pub fn from_counts(susceptible: u32, infected: u32, recovered: u32) -> Self {
        let mut state = Compartments {
            susceptible,
            infected,
            recovered,
            total: 0,
        };
        state.recount();
        state
    }

    /// One susceptible becomes infected.
    pub fn infect(&mut self) {
        self.susceptible -= 1;
        self.infected += 1;
        self.recount();
    }

    /// One infected becomes recovered.
    pub fn recover(&mut self) {
        self.infected -= 1;
        self.recovered += 1;
        self.recount();
    }

    /// Re-derives the population total from the compartments.
    pub fn recount(&mut self) {
        self.total = self.susceptible + self.infected + self.recovered;
    }
}

impl Compartments<f64> {
    /// Normalizes integer counts to fractions of the initial population.
    /// The `total` field keeps the absolute population mass so integration
    /// can track its (nominally zero) drift.
    #[must_use]
    pub fn normalized(counts: Compartments<u32>) -> Self {
        let mass = f64::from(counts.total);
        Compartments {
            susceptible: f64::from(counts.susceptible) / mass,
            infected: f64::from(counts.infected) / mass,
            recovered: f64::from(counts.recovered) / mass,
            total: mass,
        }
    }
}

// Field-wise arithmetic for the RK4 stage combinations.
impl Add for Compartments<f64> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Compartments {
            susceptible: self.susceptible + other.susceptible,
            infected: self.infected + other.infected,
            recovered: self.recovered + other.recovered,
            total: self.total + other.total,
        }
    }
}

impl Mul<f64> for Compartments<f64> {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Compartments {
            susceptible: self.susceptible * factor,
            infected: self.infected * factor,
            recovered: self.recovered * factor,
            total: self.total * factor,
        }
    }
}

/// An ordered time series of compartment states produced by a simulation run.
/// Times are strictly increasing; the first sample is always the `t = 0`
/// initial condition.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory<T> {
    times: Vec<f64>,
    states: Vec<Compartments<T>>,
}

impl<T: Copy> Trajectory<T> {
    pub(crate) fn with_initial(state: Compartments<T>) -> Self {
        Trajectory {
            times: vec![0.0],
            states: vec![state],
        }
    }

    pub(crate) fn push(&mut self, t: f64, state: Compartments<T>) {
        debug_assert!(t > self.final_time(), "trajectory times must increase");
        self.times.push(t);
        self.states.push(state);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    #[must_use]
    pub fn states(&self) -> &[Compartments<T>] {
        &self.states
    }

    #[must_use]
    pub fn final_time(&self) -> f64 {
        // A trajectory always holds at least the t = 0 sample.
        *self.times.last().unwrap()
    }

    #[must_use]
    pub fn final_state(&self) -> Compartments<T> {
        *self.states.last().unwrap()
    }
}

impl<T: Copy + Into<f64>> Trajectory<T> {
    /// The named compartment's values across the whole run, as floats.
    #[must_use]
    pub fn series(&self, compartment: Compartment) -> Vec<f64> {
        self.states
            .iter()
            .map(|state| state.get(compartment).into())
            .collect()
    }

    /// [`Trajectory::series`] with every value multiplied by `scale`. Used to
    /// report absolute counts from a normalized run at presentation time.
    #[must_use]
    pub fn scaled_series(&self, compartment: Compartment, scale: f64) -> Vec<f64> {
        self.states
            .iter()
            .map(|state| state.get(compartment).into() * scale)
            .collect()
    }
}
