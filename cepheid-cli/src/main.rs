use cepheid_core::diagnostics::format_error;
use cepheid_core::{simulate, summarize, Multipliers, Preset, Series, SimulationParameters};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod report;

use report::{print_params, print_series, print_stats, OutputFormat};

#[derive(Parser)]
#[command(name = "cepheid")]
#[command(about = "Cepheid shell pulsation simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Integrate the shell and print the radius, velocity and pressure series
    Run {
        #[command(flatten)]
        scenario: ScenarioArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Fail instead of printing a series containing degenerate samples
        #[arg(long, conflicts_with = "truncate")]
        strict: bool,

        /// Drop the samples from the first degenerate one onward
        #[arg(long)]
        truncate: bool,
    },
    /// Print the oscillation period, mean radius and mean pressure
    Stats {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Radius threshold for period detection (defaults to the initial radius)
        #[arg(long)]
        threshold: Option<f64>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Print the resolved parameters as JSON, ready to edit and pass back via --params
    Params {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    Simple,
    Polytropic,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Simple => Preset::Simple,
            PresetArg::Polytropic => Preset::Polytropic,
        }
    }
}

#[derive(Args)]
struct ScenarioArgs {
    /// Starting configuration
    #[arg(long, value_enum, default_value_t = PresetArg::Simple, conflicts_with = "params")]
    preset: PresetArg,

    /// JSON parameter file (missing fields use the defaults)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Scale the central mass (0.5 to 1.5)
    #[arg(long, default_value_t = 1.0)]
    mass_scale: f64,

    /// Scale the shell mass (0.5 to 1.5)
    #[arg(long, default_value_t = 1.0)]
    surface_mass_scale: f64,

    /// Scale the initial radius (0.5 to 1.5)
    #[arg(long, default_value_t = 1.0)]
    radius_scale: f64,

    /// Scale the initial velocity (0.5 to 1.5)
    #[arg(long, default_value_t = 1.0)]
    velocity_scale: f64,

    /// Scale the initial pressure (0.5 to 1.5)
    #[arg(long, default_value_t = 1.0)]
    pressure_scale: f64,

    /// Scale the adiabatic index (0.5 to 1.5, polytropic runs only)
    #[arg(long, default_value_t = 1.0)]
    gamma_scale: f64,

    /// Override the number of steps
    #[arg(long)]
    steps: Option<usize>,

    /// Override the time step in seconds
    #[arg(long)]
    dt: Option<f64>,
}

impl ScenarioArgs {
    fn resolve(&self) -> Result<SimulationParameters, Box<dyn std::error::Error>> {
        let base = match &self.params {
            Some(path) => {
                info!("Loading parameters from {}", path.display());
                SimulationParameters::from_file(path)?
            }
            None => {
                let preset = Preset::from(self.preset);
                info!("Using the {} preset", preset.name());
                preset.parameters()
            }
        };

        let multipliers = Multipliers {
            mass: self.mass_scale,
            surface_mass: self.surface_mass_scale,
            radius: self.radius_scale,
            velocity: self.velocity_scale,
            pressure: self.pressure_scale,
            gamma: self.gamma_scale,
        };
        let mut params = base.scaled(&multipliers)?;

        if let Some(steps) = self.steps {
            params.step_count = steps;
        }
        if let Some(dt) = self.dt {
            params.time_step = dt;
        }

        Ok(params)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,cepheid_cli=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run_command(cli.command) {
        eprintln!("{}", format_error(e.as_ref()));
        std::process::exit(1);
    }
}

fn run_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Run {
            scenario,
            format,
            strict,
            truncate,
        } => {
            let params = scenario.resolve()?;
            let mut series = simulate(&params)?;
            if strict {
                series = series.check()?;
            }

            let samples = if truncate {
                series.truncated()
            } else {
                series.samples()
            };
            if needs_truncate_hint(&series, truncate) {
                info!("pass --truncate to drop samples from the first degenerate one onward");
            }

            print_series(samples, format)?;
        }
        Commands::Stats {
            scenario,
            threshold,
            format,
        } => {
            let params = scenario.resolve()?;
            let series = simulate(&params)?;
            let threshold = threshold.unwrap_or(params.initial_radius);
            let stats = summarize(&series, threshold);
            print_stats(&stats, threshold, format)?;
        }
        Commands::Params { scenario } => {
            let params = scenario.resolve()?;
            print_params(&params)?;
        }
    }

    Ok(())
}

/// The library already logs the degenerate sample itself; the CLI only adds
/// how to drop it.
fn needs_truncate_hint(series: &Series, truncate: bool) -> bool {
    !truncate && series.degeneracy().is_some()
}
