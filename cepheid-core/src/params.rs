//! Simulation parameters, presets and parameter files
//!
//! A [`SimulationParameters`] value is built fresh for every run, either from
//! a [`Preset`], from a JSON parameter file, or by scaling a base set with
//! [`Multipliers`].

use crate::constants::{
    DEFAULT_FIXED_EXPONENT, DEFAULT_GAMMA, DEFAULT_MASS, DEFAULT_PRESSURE, DEFAULT_RADIUS,
    DEFAULT_STEP_COUNT, DEFAULT_SURFACE_MASS, DEFAULT_TIME_STEP, DEFAULT_VELOCITY, MAX_MULTIPLIER,
    MIN_MULTIPLIER,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while building or loading parameters
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed parameter file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("multiplier '{name}' must lie within {min}..={max}, got {value}")]
    MultiplierOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("unknown preset '{0}' (expected 'simple' or 'polytropic')")]
    UnknownPreset(String),
}

/// How the pressure-update exponent `k` is derived
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExponentPolicy {
    /// Use `exponent` directly
    Fixed { exponent: f64 },
    /// Adiabatic compression with index `gamma`: `k = 3·γ`
    Polytropic { gamma: f64 },
}

impl ExponentPolicy {
    pub fn exponent(&self) -> f64 {
        match self {
            ExponentPolicy::Fixed { exponent } => *exponent,
            ExponentPolicy::Polytropic { gamma } => 3.0 * gamma,
        }
    }

    pub fn gamma(&self) -> Option<f64> {
        match self {
            ExponentPolicy::Fixed { .. } => None,
            ExponentPolicy::Polytropic { gamma } => Some(*gamma),
        }
    }
}

impl Default for ExponentPolicy {
    fn default() -> Self {
        ExponentPolicy::Fixed {
            exponent: DEFAULT_FIXED_EXPONENT,
        }
    }
}

impl fmt::Display for ExponentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExponentPolicy::Fixed { exponent } => write!(f, "fixed k = {}", exponent),
            ExponentPolicy::Polytropic { gamma } => {
                write!(f, "polytropic γ = {} (k = {})", gamma, 3.0 * gamma)
            }
        }
    }
}

/// Inputs of one shell simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Central gravitating mass (kg)
    pub mass: f64,
    /// Mass of the oscillating shell (kg); must be non-zero
    pub surface_mass: f64,
    pub initial_radius: f64,
    pub initial_velocity: f64,
    pub initial_pressure: f64,
    pub exponent: ExponentPolicy,
    /// Integration step (s)
    pub time_step: f64,
    pub step_count: usize,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            mass: DEFAULT_MASS,
            surface_mass: DEFAULT_SURFACE_MASS,
            initial_radius: DEFAULT_RADIUS,
            initial_velocity: DEFAULT_VELOCITY,
            initial_pressure: DEFAULT_PRESSURE,
            exponent: ExponentPolicy::default(),
            time_step: DEFAULT_TIME_STEP,
            step_count: DEFAULT_STEP_COUNT,
        }
    }
}

impl SimulationParameters {
    pub fn with_exponent(mut self, exponent: ExponentPolicy) -> Self {
        self.exponent = exponent;
        self
    }

    /// Switch to the polytropic variant with adiabatic index `gamma`
    pub fn with_gamma(self, gamma: f64) -> Self {
        self.with_exponent(ExponentPolicy::Polytropic { gamma })
    }

    pub fn with_steps(mut self, time_step: f64, step_count: usize) -> Self {
        self.time_step = time_step;
        self.step_count = step_count;
        self
    }

    /// Derive a new parameter set by scaling this one.
    ///
    /// The gamma multiplier only applies to the polytropic variant; a fixed
    /// exponent is left untouched.
    pub fn scaled(&self, multipliers: &Multipliers) -> Result<Self, ParamsError> {
        multipliers.validate()?;

        let exponent = match self.exponent {
            ExponentPolicy::Polytropic { gamma } => ExponentPolicy::Polytropic {
                gamma: gamma * multipliers.gamma,
            },
            fixed @ ExponentPolicy::Fixed { .. } => fixed,
        };

        Ok(Self {
            mass: self.mass * multipliers.mass,
            surface_mass: self.surface_mass * multipliers.surface_mass,
            initial_radius: self.initial_radius * multipliers.radius,
            initial_velocity: self.initial_velocity * multipliers.velocity,
            initial_pressure: self.initial_pressure * multipliers.pressure,
            exponent,
            time_step: self.time_step,
            step_count: self.step_count,
        })
    }

    /// Parse a JSON parameter set. Missing fields fall back to the defaults.
    pub fn from_json_str(source: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let source = fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }

    pub fn to_json_pretty(&self) -> Result<String, ParamsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Named starting configurations.
///
/// The two presets share every magnitude and differ only in the exponent
/// policy. With the default γ = 5/3 both resolve to `k = 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    Simple,
    Polytropic,
}

impl Preset {
    pub fn parameters(self) -> SimulationParameters {
        match self {
            Preset::Simple => SimulationParameters::default(),
            Preset::Polytropic => SimulationParameters::default().with_gamma(DEFAULT_GAMMA),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Simple => "simple",
            Preset::Polytropic => "polytropic",
        }
    }
}

impl FromStr for Preset {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Preset::Simple),
            "polytropic" => Ok(Preset::Polytropic),
            _ => Err(ParamsError::UnknownPreset(s.to_string())),
        }
    }
}

/// Relative adjustments applied on top of a base parameter set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Multipliers {
    pub mass: f64,
    pub surface_mass: f64,
    pub radius: f64,
    pub velocity: f64,
    pub pressure: f64,
    pub gamma: f64,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            mass: 1.0,
            surface_mass: 1.0,
            radius: 1.0,
            velocity: 1.0,
            pressure: 1.0,
            gamma: 1.0,
        }
    }
}

impl Multipliers {
    pub fn validate(&self) -> Result<(), ParamsError> {
        let fields = [
            ("mass", self.mass),
            ("surface_mass", self.surface_mass),
            ("radius", self.radius),
            ("velocity", self.velocity),
            ("pressure", self.pressure),
            ("gamma", self.gamma),
        ];

        for (name, value) in fields {
            if !(MIN_MULTIPLIER..=MAX_MULTIPLIER).contains(&value) {
                return Err(ParamsError::MultiplierOutOfRange {
                    name,
                    value,
                    min: MIN_MULTIPLIER,
                    max: MAX_MULTIPLIER,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_simple_preset() {
        let params = SimulationParameters::default();
        assert_eq!(params, Preset::Simple.parameters());
        assert_eq!(params.exponent.exponent(), 5.0);
        assert_eq!(params.step_count, 150);
        assert_eq!(params.time_step, 1e4);
    }

    #[test]
    fn test_polytropic_preset_resolves_to_five() {
        let params = Preset::Polytropic.parameters();
        assert_eq!(params.exponent.gamma(), Some(5.0 / 3.0));
        assert_relative_eq!(params.exponent.exponent(), 5.0);
        assert_eq!(params.initial_pressure, 56_000.0);
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("simple".parse::<Preset>().unwrap(), Preset::Simple);
        assert_eq!("Polytropic".parse::<Preset>().unwrap(), Preset::Polytropic);
        for preset in [Preset::Simple, Preset::Polytropic] {
            assert_eq!(preset.name().parse::<Preset>().unwrap(), preset);
        }
        assert!(matches!(
            "adiabatic".parse::<Preset>(),
            Err(ParamsError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_scaled_applies_each_multiplier() {
        let base = Preset::Polytropic.parameters();
        let multipliers = Multipliers {
            mass: 0.5,
            radius: 1.5,
            pressure: 1.2,
            gamma: 0.6,
            ..Multipliers::default()
        };

        let scaled = base.scaled(&multipliers).unwrap();
        assert_relative_eq!(scaled.mass, 5e30);
        assert_relative_eq!(scaled.surface_mass, 1e26);
        assert_relative_eq!(scaled.initial_radius, 2.55e10);
        assert_relative_eq!(scaled.initial_pressure, 67_200.0);
        assert_relative_eq!(scaled.exponent.gamma().unwrap(), 1.0);
        assert_eq!(scaled.step_count, base.step_count);
    }

    #[test]
    fn test_scaled_keeps_fixed_exponent() {
        let multipliers = Multipliers {
            gamma: 1.5,
            ..Multipliers::default()
        };
        let scaled = SimulationParameters::default()
            .scaled(&multipliers)
            .unwrap();
        assert_eq!(scaled.exponent, ExponentPolicy::Fixed { exponent: 5.0 });
    }

    #[test]
    fn test_multiplier_out_of_range() {
        let multipliers = Multipliers {
            surface_mass: 2.0,
            ..Multipliers::default()
        };
        let err = SimulationParameters::default()
            .scaled(&multipliers)
            .unwrap_err();
        match err {
            ParamsError::MultiplierOutOfRange { name, value, .. } => {
                assert_eq!(name, "surface_mass");
                assert_eq!(value, 2.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let params = SimulationParameters::from_json_str(
            r#"{ "initial_pressure": 42000.0, "exponent": { "kind": "polytropic", "gamma": 1.4 } }"#,
        )
        .unwrap();

        assert_eq!(params.initial_pressure, 42_000.0);
        assert_eq!(params.exponent, ExponentPolicy::Polytropic { gamma: 1.4 });
        assert_eq!(params.mass, DEFAULT_MASS);
        assert_eq!(params.step_count, DEFAULT_STEP_COUNT);
    }

    #[test]
    fn test_json_written_by_to_json_pretty_loads_back() {
        let params = Preset::Polytropic.parameters().with_steps(5e3, 300);
        let json = params.to_json_pretty().unwrap();
        assert_eq!(SimulationParameters::from_json_str(&json).unwrap(), params);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = SimulationParameters::from_json_str("{ \"mass\": \"heavy\" }").unwrap_err();
        assert!(matches!(err, ParamsError::Json(_)));
    }
}
