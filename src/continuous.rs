/*!

The deterministic mean-field counterpart: the SIR ordinary differential
equations integrated with classical fixed-step 4th-order Runge-Kutta over a
uniform grid of `floor(tmax / dt)` points.

State is kept as fractions of the initial population; the `total` field
carries the absolute population mass so its (nominally zero) drift can be
checked. There is no stochasticity and no early termination.

*/

use log::trace;

use crate::{
    compartments::{Compartment, Compartments, Trajectory},
    engine::Engine,
    error::SirError,
    parameters::Parameters,
};

pub struct ContinuousEngine {
    beta: f64,
    gamma: f64,
    step: f64,
    n_points: usize,
    population_size: f64,
    current: Compartments<f64>,
    trajectory: Trajectory<f64>,
}

impl ContinuousEngine {
    pub fn new(initial: (u32, u32, u32), parameters: &Parameters) -> Result<Self, SirError> {
        parameters.validate()?;
        if !(parameters.step > 0.0) {
            return Err(SirError::Config(format!(
                "integration step must be positive, got {}",
                parameters.step
            )));
        }
        if !(parameters.population_size > 0.0) {
            return Err(SirError::Config(format!(
                "population_size must be positive, got {}",
                parameters.population_size
            )));
        }
        let (s0, i0, r0) = initial;
        if s0 == 0 && i0 == 0 && r0 == 0 {
            return Err(SirError::Config(
                "initial population must not be empty".to_string(),
            ));
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n_points = (parameters.max_time / parameters.step).floor() as usize;
        if n_points < 1 {
            return Err(SirError::Config(format!(
                "horizon {} is shorter than one integration step {}",
                parameters.max_time, parameters.step
            )));
        }

        let current = Compartments::normalized(Compartments::from_counts(s0, i0, r0));
        Ok(ContinuousEngine {
            beta: parameters.beta,
            gamma: parameters.gamma,
            step: parameters.step,
            n_points,
            population_size: parameters.population_size,
            trajectory: Trajectory::with_initial(current),
            current,
        })
    }

    /// Mean-field SIR derivative for a normalized state. The `total` slot
    /// carries the mass-conservation residual, nominally zero.
    fn derivative(&self, y: Compartments<f64>) -> Compartments<f64> {
        let d_susceptible = -self.beta * y.susceptible * y.infected;
        let d_infected = self.beta * y.susceptible * y.infected - self.gamma * y.infected;
        let d_recovered = self.gamma * y.infected;
        Compartments {
            susceptible: d_susceptible,
            infected: d_infected,
            recovered: d_recovered,
            total: d_susceptible + d_infected + d_recovered,
        }
    }

    /// The named series scaled from fractions to absolute counts by the
    /// configured `population_size`. Presentation only; the integrated state
    /// stays normalized.
    #[must_use]
    pub fn absolute_series(&self, compartment: Compartment) -> Vec<f64> {
        self.trajectory
            .scaled_series(compartment, self.population_size)
    }

    /// Consumes the engine, yielding the recorded trajectory.
    #[must_use]
    pub fn into_trajectory(self) -> Trajectory<f64> {
        self.trajectory
    }
}

impl Engine for ContinuousEngine {
    type Count = f64;

    fn run(&mut self) -> Result<(), SirError> {
        trace!(
            "integrating {} RK4 steps of {} to t = {}",
            self.n_points - 1,
            self.step,
            self.step * (self.n_points - 1) as f64
        );
        let dt = self.step;
        for i in 1..self.n_points {
            let y = self.current;
            let k1 = self.derivative(y) * dt;
            let k2 = self.derivative(y + k1 * 0.5) * dt;
            let k3 = self.derivative(y + k2 * 0.5) * dt;
            let k4 = self.derivative(y + k3) * dt;
            self.current = y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (1.0 / 6.0);
            self.trajectory.push(i as f64 * dt, self.current);
        }
        Ok(())
    }

    fn trajectory(&self) -> &Trajectory<f64> {
        &self.trajectory
    }
}
