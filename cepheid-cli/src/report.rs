//! Terminal output for series, statistics and parameter sets

use cepheid_core::{SeriesStats, SimulationParameters, SimulationSample};
use clap::ValueEnum;
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

pub fn print_series(
    samples: &[SimulationSample],
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(
                out,
                "{:>12}  {:>16}  {:>16}  {:>16}",
                "time (s)", "radius (m)", "velocity (m/s)", "pressure (N/m²)"
            )?;
            for s in samples {
                writeln!(
                    out,
                    "{:>12}  {:>16.6e}  {:>16.6e}  {:>16.6e}",
                    s.time, s.radius, s.velocity, s.pressure
                )?;
            }
        }
        OutputFormat::Csv => {
            writeln!(out, "time,radius,velocity,pressure")?;
            for s in samples {
                writeln!(out, "{},{},{},{}", s.time, s.radius, s.velocity, s.pressure)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, samples)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

pub fn print_stats(
    stats: &SeriesStats,
    threshold: f64,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, stats)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "threshold,period_seconds,mean_radius,mean_pressure")?;
            let period = stats
                .period
                .seconds()
                .map(|s| s.to_string())
                .unwrap_or_default();
            writeln!(
                out,
                "{},{},{},{}",
                threshold, period, stats.mean_radius, stats.mean_pressure
            )?;
        }
        OutputFormat::Table => {
            match (stats.period.seconds(), stats.period.days()) {
                (Some(seconds), Some(days)) => writeln!(
                    out,
                    "Period: {} s ({:.2} days)",
                    group_digits(seconds),
                    days
                )?,
                _ => writeln!(out, "Period: unable to calculate ({})", stats.period)?,
            }
            writeln!(out, "Average radius: {} m", group_digits(stats.mean_radius))?;
            writeln!(
                out,
                "Average pressure: {} N/m²",
                group_digits(stats.mean_pressure)
            )?;
            writeln!(out, "Threshold: {} m", group_digits(threshold))?;
        }
    }

    Ok(())
}

pub fn print_params(params: &SimulationParameters) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", params.to_json_pretty()?);
    Ok(())
}

/// Integer part of `value` with comma thousands separators
fn group_digits(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = format!("{:.0}", value.abs().trunc());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 && digits != "0" {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
