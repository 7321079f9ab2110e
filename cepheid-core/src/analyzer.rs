//! Static checks on simulation parameters
//!
//! This module inspects a parameter set before any step is taken so that a
//! configuration the model cannot run is rejected up front, without
//! producing a partial series.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::params::{ExponentPolicy, SimulationParameters};

/// Analyze a parameter set and return diagnostics
pub fn analyze_parameters(params: &SimulationParameters) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    // Check 1: every scalar input is a real number
    let (exponent_name, exponent_value) = match params.exponent {
        ExponentPolicy::Fixed { exponent } => ("exponent", exponent),
        ExponentPolicy::Polytropic { gamma } => ("gamma", gamma),
    };
    let scalars = [
        ("mass", params.mass),
        ("surface_mass", params.surface_mass),
        ("initial_radius", params.initial_radius),
        ("initial_velocity", params.initial_velocity),
        ("initial_pressure", params.initial_pressure),
        (exponent_name, exponent_value),
        ("time_step", params.time_step),
    ];
    for (name, value) in scalars {
        if !value.is_finite() {
            diagnostics.push(Diagnostic::error(
                format!("parameter '{}' must be finite, got {}", name, value),
                Some(name),
            ));
        }
    }

    // Check 2: divisors and discretization controls
    if params.surface_mass.is_finite() && params.surface_mass <= 0.0 {
        diagnostics.push(Diagnostic::error(
            format!("surface mass must be positive, got {}", params.surface_mass),
            Some("surface_mass"),
        ));
    }
    if params.time_step.is_finite() && params.time_step <= 0.0 {
        diagnostics.push(Diagnostic::error(
            format!("time step must be positive, got {}", params.time_step),
            Some("time_step"),
        ));
    }
    if params.step_count == 0 {
        diagnostics.push(Diagnostic::error(
            "step count must be at least 1",
            Some("step_count"),
        ));
    }

    // Check 3: values outside the physical domain that the model still runs
    if params.mass <= 0.0 {
        diagnostics.push(Diagnostic::warning(
            format!(
                "mass {} is not positive; gravity will push outward",
                params.mass
            ),
            Some("mass"),
        ));
    }
    if params.initial_radius <= 0.0 {
        diagnostics.push(Diagnostic::warning(
            format!(
                "initial radius {} is not positive; the first pressure update is undefined",
                params.initial_radius
            ),
            Some("initial_radius"),
        ));
    }
    if params.initial_pressure < 0.0 {
        diagnostics.push(Diagnostic::warning(
            format!("initial pressure {} is negative", params.initial_pressure),
            Some("initial_pressure"),
        ));
    }
    if exponent_value <= 0.0 {
        diagnostics.push(Diagnostic::warning(
            format!(
                "{} {} is not positive; compression will lower pressure",
                exponent_name, exponent_value
            ),
            Some(exponent_name),
        ));
    }

    diagnostics
}
