/*!

Two complementary simulations of an SIR epidemic in a closed population:

- [`StochasticEngine`] draws exact sample paths of the continuous-time Markov
  jump process with the Gillespie direct method, producing an event-indexed
  trajectory of integer counts.
- [`ContinuousEngine`] integrates the mean-field SIR ordinary differential
  equations with fixed-step 4th-order Runge-Kutta, producing a uniformly
  sampled trajectory of population fractions.

The engines are independent leaves sharing the [`Compartments`]/[`Trajectory`]
data model and the [`Engine`] run contract. A typical comparison runs the
stochastic engine first and hands its final time to the continuous engine as
the horizon, so both series share a time axis:

```rust
use sir_sim::{ContinuousEngine, Engine, ParametersBuilder, StochasticEngine};

let parameters = ParametersBuilder::default().seed(123).build().unwrap();
let mut stochastic = StochasticEngine::new((999, 1, 0), &parameters).unwrap();
stochastic.run().unwrap();

let mut mean_field_parameters = parameters.clone();
// Floor the horizon so an immediately-extinct outbreak still leaves a grid.
mean_field_parameters.max_time = stochastic.trajectory().final_time().max(1.0);
let mut continuous = ContinuousEngine::new((999, 1, 0), &mean_field_parameters).unwrap();
continuous.run().unwrap();
```

*/

pub mod compartments;
pub mod continuous;
pub mod engine;
pub mod error;
pub mod logging;
pub mod parameters;
pub mod random;
pub mod report;
pub mod stochastic;

pub use compartments::{Compartment, Compartments, Trajectory};
pub use continuous::ContinuousEngine;
pub use engine::Engine;
pub use error::SirError;
pub use parameters::{Parameters, ParametersBuilder};
pub use random::{RandomSource, SeededSource};
pub use stochastic::StochasticEngine;
