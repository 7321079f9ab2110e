use crate::constants::GRAVITATIONAL_CONSTANT;
use crate::params::SimulationParameters;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Per-run constants of the force balance, resolved once from the parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellModel {
    pub mass: f64,
    pub surface_mass: f64,
    /// Pressure-scaling exponent `k`
    pub exponent: f64,
    pub time_step: f64,
}

impl From<&SimulationParameters> for ShellModel {
    fn from(params: &SimulationParameters) -> Self {
        Self {
            mass: params.mass,
            surface_mass: params.surface_mass,
            exponent: params.exponent.exponent(),
            time_step: params.time_step,
        }
    }
}

/// Radial state of the shell carried from one step to the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellState {
    pub radius: f64,
    pub velocity: f64,
    pub pressure: f64,
}

impl ShellState {
    pub fn initial(params: &SimulationParameters) -> Self {
        Self {
            radius: params.initial_radius,
            velocity: params.initial_velocity,
            pressure: params.initial_pressure,
        }
    }

    /// Outward acceleration from pressure acting on the shell
    pub fn pressure_acceleration(&self, model: &ShellModel) -> f64 {
        (4.0 * PI * self.radius.powi(2) * self.pressure) / model.surface_mass
    }

    /// Inward acceleration of a point mass at this radius
    pub fn gravitational_acceleration(&self, model: &ShellModel) -> f64 {
        (GRAVITATIONAL_CONSTANT * model.mass) / self.radius.powi(2)
    }

    /// Net outward acceleration of the shell
    pub fn acceleration(&self, model: &ShellModel) -> f64 {
        self.pressure_acceleration(model) - self.gravitational_acceleration(model)
    }
}

/// One entry of the output series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSample {
    /// Elapsed time (s), `time_step · index` with index starting at 1
    pub time: f64,
    pub radius: f64,
    pub velocity: f64,
    pub pressure: f64,
}

impl SimulationSample {
    pub fn new(time: f64, state: ShellState) -> Self {
        Self {
            time,
            radius: state.radius,
            velocity: state.velocity,
            pressure: state.pressure,
        }
    }

    pub fn state(&self) -> ShellState {
        ShellState {
            radius: self.radius,
            velocity: self.velocity,
            pressure: self.pressure,
        }
    }
}
