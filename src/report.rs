//! CSV output for trajectories, the one reporting surface the engines feed.
//! Rows are `t,susceptible,infected,recovered,total`, one per sample.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::compartments::Trajectory;
use crate::error::SirError;

#[derive(Serialize)]
struct TrajectoryRow {
    t: f64,
    susceptible: f64,
    infected: f64,
    recovered: f64,
    total: f64,
}

/// Writes every sample of `trajectory` as a CSV row, header included.
pub fn write_trajectory<T, W>(trajectory: &Trajectory<T>, writer: W) -> Result<(), SirError>
where
    T: Copy + Into<f64>,
    W: Write,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (t, state) in trajectory.times().iter().zip(trajectory.states()) {
        csv_writer.serialize(TrajectoryRow {
            t: *t,
            susceptible: state.susceptible.into(),
            infected: state.infected.into(),
            recovered: state.recovered.into(),
            total: state.total.into(),
        })?;
    }
    csv_writer.flush().map_err(SirError::IoError)?;
    Ok(())
}

/// [`write_trajectory`] into a file created at `path`.
pub fn write_trajectory_file<T: Copy + Into<f64>>(
    trajectory: &Trajectory<T>,
    path: impl AsRef<Path>,
) -> Result<(), SirError> {
    let file = File::create(path)?;
    write_trajectory(trajectory, file)
}
