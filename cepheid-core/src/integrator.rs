use crate::engine::{ShellModel, ShellState};

/// Advance the shell by one time step using semi-implicit Euler integration.
///
/// The velocity is updated from the previous radius and pressure, the radius
/// from the new velocity, and the pressure by adiabatic scaling with the
/// ratio of old to new radius. No value is clamped.
pub fn step(state: ShellState, model: &ShellModel) -> ShellState {
    let velocity = state.velocity + state.acceleration(model) * model.time_step;
    let radius = state.radius + velocity * model.time_step;
    let pressure = state.pressure * (state.radius / radius).powf(model.exponent);

    ShellState {
        radius,
        velocity,
        pressure,
    }
}
