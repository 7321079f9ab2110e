use crate::analyzer::analyze_parameters;
use crate::constants::DEFAULT_STEP_COUNT;
use crate::diagnostics::Diagnostics;
use crate::engine::{ShellModel, ShellState, SimulationSample};
use crate::integrator::step;
use crate::params::SimulationParameters;
use crate::period;
use serde::Serialize;
use std::fmt;
use std::ops::ControlFlow;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised by a simulation run
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid simulation parameters: {0}")]
    InvalidParameters(Diagnostics),
    #[error("degenerate sample at index {index} (t = {time} s): {kind}")]
    Degenerate {
        index: usize,
        time: f64,
        kind: DegeneracyKind,
    },
}

/// Quantity tracked by a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Radius,
    Velocity,
    Pressure,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Radius => write!(f, "radius"),
            Quantity::Velocity => write!(f, "velocity"),
            Quantity::Pressure => write!(f, "pressure"),
        }
    }
}

/// Why a sample can no longer be trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneracyKind {
    /// The shell collapsed through the centre; the pressure update divided by
    /// a non-positive radius
    NonPositiveRadius,
    NonFinite(Quantity),
}

impl DegeneracyKind {
    /// Classify a sample, or `None` when it is well-defined
    pub fn of(sample: &SimulationSample) -> Option<Self> {
        if !sample.velocity.is_finite() {
            Some(DegeneracyKind::NonFinite(Quantity::Velocity))
        } else if !sample.radius.is_finite() {
            Some(DegeneracyKind::NonFinite(Quantity::Radius))
        } else if sample.radius <= 0.0 {
            Some(DegeneracyKind::NonPositiveRadius)
        } else if !sample.pressure.is_finite() {
            Some(DegeneracyKind::NonFinite(Quantity::Pressure))
        } else {
            None
        }
    }
}

impl fmt::Display for DegeneracyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegeneracyKind::NonPositiveRadius => write!(f, "radius is not positive"),
            DegeneracyKind::NonFinite(quantity) => write!(f, "{} is not finite", quantity),
        }
    }
}

/// First degenerate sample of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Degeneracy {
    /// Position in the series (0-based)
    pub index: usize,
    pub time: f64,
    pub kind: DegeneracyKind,
}

/// Ordered output of one run.
///
/// Samples are stored exactly as integrated; degenerate values are reported
/// through [`Series::degeneracy`] rather than altered. A series always holds
/// at least one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    samples: Vec<SimulationSample>,
    interrupted: bool,
}

impl Series {
    pub fn samples(&self) -> &[SimulationSample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<SimulationSample> {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether the run was stopped early by its observer
    pub fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.time)
    }

    pub fn radii(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.radius)
    }

    pub fn velocities(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.velocity)
    }

    pub fn pressures(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.pressure)
    }

    pub fn degeneracy(&self) -> Option<Degeneracy> {
        self.samples.iter().enumerate().find_map(|(index, sample)| {
            DegeneracyKind::of(sample).map(|kind| Degeneracy {
                index,
                time: sample.time,
                kind,
            })
        })
    }

    /// Reject the series if any sample is degenerate
    pub fn check(self) -> Result<Self, SimulationError> {
        match self.degeneracy() {
            Some(Degeneracy { index, time, kind }) => {
                Err(SimulationError::Degenerate { index, time, kind })
            }
            None => Ok(self),
        }
    }

    /// The samples preceding the first degenerate one
    pub fn truncated(&self) -> &[SimulationSample] {
        match self.degeneracy() {
            Some(degeneracy) => &self.samples[..degeneracy.index],
            None => &self.samples,
        }
    }

    pub fn mean_radius(&self) -> f64 {
        period::mean_radius(&self.samples).unwrap_or(f64::NAN)
    }

    pub fn mean_pressure(&self) -> f64 {
        period::mean_pressure(&self.samples).unwrap_or(f64::NAN)
    }
}

/// Main entry point: integrate the shell for `step_count` steps
pub fn simulate(params: &SimulationParameters) -> Result<Series, SimulationError> {
    simulate_with(params, |_| ControlFlow::Continue(()))
}

/// Integrate the shell, handing each sample to `observer` as it is produced.
///
/// Returning `ControlFlow::Break` stops the run after the current sample; the
/// returned series then holds the samples produced so far and reports
/// [`Series::is_interrupted`].
pub fn simulate_with<F>(
    params: &SimulationParameters,
    mut observer: F,
) -> Result<Series, SimulationError>
where
    F: FnMut(&SimulationSample) -> ControlFlow<()>,
{
    let diagnostics = analyze_parameters(params);
    if diagnostics.has_errors() {
        return Err(SimulationError::InvalidParameters(diagnostics));
    }
    for diagnostic in diagnostics.warnings() {
        warn!(parameter = ?diagnostic.parameter, "{}", diagnostic.message);
    }

    let model = ShellModel::from(params);
    debug!(
        steps = params.step_count,
        time_step = model.time_step,
        exponent = model.exponent,
        "starting shell simulation"
    );

    let mut samples = Vec::with_capacity(params.step_count.min(DEFAULT_STEP_COUNT));
    let mut state = ShellState::initial(params);
    let mut interrupted = false;

    for i in 1..=params.step_count {
        state = step(state, &model);
        let sample = SimulationSample::new(model.time_step * i as f64, state);
        samples.push(sample);

        if observer(&sample).is_break() {
            interrupted = i < params.step_count;
            break;
        }
    }

    let series = Series {
        samples,
        interrupted,
    };

    if let Some(degeneracy) = series.degeneracy() {
        warn!(
            index = degeneracy.index,
            time = degeneracy.time,
            "simulation produced a degenerate sample: {}",
            degeneracy.kind
        );
    }
    debug!(
        samples = series.len(),
        interrupted = series.interrupted,
        "shell simulation complete"
    );

    Ok(series)
}
