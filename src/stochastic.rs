/*!

Exact sample paths of the continuous-time Markov SIR process via the
Gillespie direct method.

Each iteration draws the sojourn time to the next event from an exponential
distribution whose rate is the sum of the individual event rates (the minimum
of competing exponential clocks is itself exponential with the summed rate),
then selects infection or recovery in proportion to their rates. The run ends
when the horizon is passed or the infection goes extinct, whichever comes
first.

*/

use log::{debug, trace};

use crate::{
    compartments::{Compartments, Trajectory},
    engine::Engine,
    error::SirError,
    parameters::Parameters,
    random::{RandomSource, SeededSource},
};

pub struct StochasticEngine<S = SeededSource> {
    beta: f64,
    gamma: f64,
    max_time: f64,
    current: Compartments<u32>,
    trajectory: Trajectory<u32>,
    source: S,
}

impl StochasticEngine<SeededSource> {
    /// Builds an engine with a fresh random stream seeded from
    /// `parameters.seed`.
    pub fn new(initial: (u32, u32, u32), parameters: &Parameters) -> Result<Self, SirError> {
        Self::with_source(initial, parameters, SeededSource::from_seed(parameters.seed))
    }
}

impl<S: RandomSource> StochasticEngine<S> {
    /// Builds an engine around an injected variate source.
    pub fn with_source(
        initial: (u32, u32, u32),
        parameters: &Parameters,
        source: S,
    ) -> Result<Self, SirError> {
        parameters.validate()?;
        if !(parameters.beta > 0.0) {
            return Err(SirError::Config(format!(
                "stochastic transmission rate beta must be positive, got {}",
                parameters.beta
            )));
        }
        let (s0, i0, r0) = initial;
        if s0 == 0 && i0 == 0 && r0 == 0 {
            return Err(SirError::Config(
                "initial population must not be empty".to_string(),
            ));
        }

        let current = Compartments::from_counts(s0, i0, r0);
        Ok(StochasticEngine {
            beta: parameters.beta,
            gamma: parameters.gamma,
            max_time: parameters.max_time,
            trajectory: Trajectory::with_initial(current),
            current,
            source,
        })
    }

    /// Consumes the engine, yielding the recorded trajectory.
    #[must_use]
    pub fn into_trajectory(self) -> Trajectory<u32> {
        self.trajectory
    }
}

impl<S: RandomSource> Engine for StochasticEngine<S> {
    type Count = u32;

    fn run(&mut self) -> Result<(), SirError> {
        trace!("starting stochastic run to t = {}", self.max_time);
        let mut t = 0.0;
        while t < self.max_time {
            let state = self.current;

            // Extinction absorbs the process: both event rates vanish with I.
            if state.infected == 0 {
                debug!("infection extinct at t = {t}");
                break;
            }

            let rate_infect = self.beta * f64::from(state.susceptible)
                * f64::from(state.infected)
                / f64::from(state.total);
            let rate_recover = self.gamma * f64::from(state.infected);
            let rate_total = rate_infect + rate_recover;
            if rate_total <= 0.0 {
                // Unreachable while gamma > 0 and I > 0; stop loudly rather
                // than divide by zero below.
                return Err(SirError::DegenerateRates(format!(
                    "total event rate is {rate_total} with {} infected at t = {t}",
                    state.infected
                )));
            }

            t += self.source.exponential(1.0 / rate_total);

            // rate_infect is zero exactly when S is, so ties at zero must
            // fall through to recovery.
            if rate_infect > 0.0 && self.source.uniform() * rate_total <= rate_infect {
                self.current.infect();
            } else {
                self.current.recover();
            }
            self.trajectory.push(t, self.current);
        }
        debug!(
            "stochastic run recorded {} events, final t = {}",
            self.trajectory.len() - 1,
            self.trajectory.final_time()
        );
        Ok(())
    }

    fn trajectory(&self) -> &Trajectory<u32> {
        &self.trajectory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compartments::Compartment;
    use crate::parameters::ParametersBuilder;
    use crate::random::ScriptedSource;

    fn parameters(beta: f64, gamma: f64, max_time: f64, seed: u64) -> Parameters {
        ParametersBuilder::default()
            .beta(beta)
            .gamma(gamma)
            .max_time(max_time)
            .seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn rejects_non_positive_rates() {
        let result = StochasticEngine::new((999, 1, 0), &parameters(0.0, 0.4, 50.0, 0));
        assert!(matches!(result, Err(SirError::Config(_))));

        let result = StochasticEngine::new((999, 1, 0), &parameters(2.0, -0.4, 50.0, 0));
        assert!(matches!(result, Err(SirError::Config(_))));
    }

    #[test]
    fn rejects_empty_population() {
        let result = StochasticEngine::new((0, 0, 0), &parameters(2.0, 0.4, 50.0, 0));
        assert!(matches!(result, Err(SirError::Config(_))));
    }

    #[test]
    fn all_recovered_appends_nothing() {
        let mut engine = StochasticEngine::new((0, 0, 100), &parameters(2.0, 0.4, 50.0, 0)).unwrap();
        engine.run().unwrap();
        assert_eq!(engine.trajectory().len(), 1);
        assert_eq!(engine.trajectory().final_time(), 0.0);
    }

    #[test]
    fn scripted_event_sequence() {
        // With (999, 1, 0), beta = 2, gamma = 0.4 the first three selections
        // fall out as infect, infect, recover:
        //   event 1: rates (1.998, 0.4),   0.5 * 2.398 = 1.199 <= 1.998
        //   event 2: rates (3.992, 0.8),   0.5 * 4.792 = 2.396 <= 3.992
        //   event 3: rates (5.982, 1.2),   0.9 * 7.182 = 6.464 >  5.982
        let source = ScriptedSource::new(vec![0.5, 0.5, 0.9], vec![1.0, 1.0, 1.0]);
        let mut engine =
            StochasticEngine::with_source((999, 1, 0), &parameters(2.0, 0.4, 3.0, 0), source)
                .unwrap();
        engine.run().unwrap();

        let trajectory = engine.trajectory();
        assert_eq!(trajectory.times(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(
            trajectory.series(Compartment::Infected),
            vec![1.0, 2.0, 3.0, 2.0]
        );
        let last = trajectory.final_state();
        assert_eq!(
            (last.susceptible, last.infected, last.recovered),
            (997, 2, 1)
        );
    }

    #[test]
    fn population_is_conserved() {
        let mut engine = StochasticEngine::new((999, 1, 0), &parameters(2.0, 0.4, 50.0, 123)).unwrap();
        engine.run().unwrap();
        for state in engine.trajectory().states() {
            assert_eq!(state.susceptible + state.infected + state.recovered, 1000);
            assert_eq!(state.total, 1000);
        }
    }

    #[test]
    fn counts_move_one_at_a_time() {
        let mut engine = StochasticEngine::new((999, 1, 0), &parameters(2.0, 0.4, 50.0, 123)).unwrap();
        engine.run().unwrap();
        let states = engine.trajectory().states();
        for pair in states.windows(2) {
            assert!(pair[1].susceptible <= pair[0].susceptible);
            assert!(pair[1].recovered >= pair[0].recovered);
            let delta = i64::from(pair[1].infected) - i64::from(pair[0].infected);
            assert_eq!(delta.abs(), 1);
        }
    }

    #[test]
    fn terminates_extinct_or_past_horizon() {
        let mut engine = StochasticEngine::new((999, 1, 0), &parameters(2.0, 0.4, 50.0, 123)).unwrap();
        engine.run().unwrap();
        let trajectory = engine.trajectory();
        assert!(trajectory.final_state().infected == 0 || trajectory.final_time() >= 50.0);
    }

    #[test]
    fn supercritical_epidemic_burns_out() {
        // beta / gamma = 5, so with seed 123 the outbreak runs to extinction
        // well before the t = 50 horizon.
        let mut engine = StochasticEngine::new((999, 1, 0), &parameters(2.0, 0.4, 50.0, 123)).unwrap();
        engine.run().unwrap();
        assert_eq!(engine.trajectory().final_state().infected, 0);
    }

    #[test]
    fn same_seed_reproduces_trajectory() {
        let mut first = StochasticEngine::new((999, 1, 0), &parameters(2.0, 0.4, 50.0, 42)).unwrap();
        let mut second = StochasticEngine::new((999, 1, 0), &parameters(2.0, 0.4, 50.0, 42)).unwrap();
        first.run().unwrap();
        second.run().unwrap();
        assert_eq!(first.trajectory(), second.trajectory());
    }

    #[test]
    fn different_seeds_diverge() {
        let mut first = StochasticEngine::new((999, 1, 0), &parameters(2.0, 0.4, 50.0, 42)).unwrap();
        let mut second = StochasticEngine::new((999, 1, 0), &parameters(2.0, 0.4, 50.0, 88)).unwrap();
        first.run().unwrap();
        second.run().unwrap();
        assert_ne!(first.trajectory(), second.trajectory());
    }

    #[test]
    fn times_strictly_increase() {
        let mut engine = StochasticEngine::new((999, 1, 0), &parameters(2.0, 0.4, 50.0, 7)).unwrap();
        engine.run().unwrap();
        let times = engine.trajectory().times();
        for pair in times.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }
}
