pub mod analyzer;
pub mod constants;
pub mod diagnostics;
pub mod engine;
pub mod integrator;
pub mod params;
pub mod period;
pub mod runtime;

pub use analyzer::analyze_parameters;
pub use diagnostics::{Diagnostic, DiagnosticSeverity, Diagnostics};
pub use engine::{ShellModel, ShellState, SimulationSample};
pub use params::{ExponentPolicy, Multipliers, ParamsError, Preset, SimulationParameters};
pub use period::{
    estimate_period, mean_pressure, mean_radius, summarize, upward_crossings, PeriodEstimate,
    SeriesStats,
};
pub use runtime::{
    simulate, simulate_with, Degeneracy, DegeneracyKind, Quantity, Series, SimulationError,
};
