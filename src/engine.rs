use crate::compartments::Trajectory;
use crate::error::SirError;

/// The shared contract of the two simulation strategies: advance the owned
/// state to the horizon, recording one trajectory sample per step.
///
/// A `run` is blocking and synchronous, with no shared mutable state; given
/// the same construction (and seed, for the stochastic variant) it produces
/// the same trajectory, so concurrent ensemble runs need no coordination
/// beyond constructing independent engines.
pub trait Engine {
    /// Scalar the engine records per compartment: integer counts for the
    /// event-driven engine, fractions for the mean-field one.
    type Count: Copy + Into<f64>;

    /// Runs the simulation to completion.
    fn run(&mut self) -> Result<(), SirError>;

    /// The trajectory recorded so far; just the `t = 0` sample before `run`.
    fn trajectory(&self) -> &Trajectory<Self::Count>;
}
