// Physical constants (SI units) and the default starting point of the shell
// model. Both presets share these magnitudes; they differ only in how the
// pressure exponent is derived.

/// Newtonian gravitational constant (m³ kg⁻¹ s⁻²)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Total gravitating mass of a typical Cepheid (kg)
pub const DEFAULT_MASS: f64 = 1e31;

/// Mass of the oscillating surface shell (kg)
pub const DEFAULT_SURFACE_MASS: f64 = 1e26;

/// Starting radius of the shell (m)
pub const DEFAULT_RADIUS: f64 = 1.7e10;

/// Starting radial velocity of the shell (m/s)
pub const DEFAULT_VELOCITY: f64 = 0.0;

/// Starting pressure acting on the shell (N/m²)
pub const DEFAULT_PRESSURE: f64 = 56_000.0;

/// Pressure-scaling exponent of the simple preset
pub const DEFAULT_FIXED_EXPONENT: f64 = 5.0;

/// Adiabatic index of a monatomic ideal gas, used by the polytropic preset
pub const DEFAULT_GAMMA: f64 = 5.0 / 3.0;

/// Integration time step (s)
pub const DEFAULT_TIME_STEP: f64 = 1e4;

/// Number of integration steps per run
pub const DEFAULT_STEP_COUNT: usize = 150;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Lower bound of a parameter multiplier
pub const MIN_MULTIPLIER: f64 = 0.5;

/// Upper bound of a parameter multiplier
pub const MAX_MULTIPLIER: f64 = 1.5;
