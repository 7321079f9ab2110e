//! Period estimation and descriptive statistics over a radius trace
//!
//! The period is taken as the mean spacing between upward crossings of a
//! caller-chosen threshold. A crossing happens at sample `i` when
//! `radius[i] > threshold` and `radius[i - 1] <= threshold`; the first sample
//! has no predecessor and is compared against itself, so it never counts.

use crate::constants::SECONDS_PER_DAY;
use crate::engine::SimulationSample;
use crate::runtime::Series;
use serde::Serialize;
use std::fmt;

/// Outcome of a period estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PeriodEstimate {
    Period { seconds: f64 },
    /// Fewer than two crossings were found, so no interval can be measured
    InsufficientData {
        crossings: usize,
    },
}

impl PeriodEstimate {
    pub fn seconds(&self) -> Option<f64> {
        match self {
            PeriodEstimate::Period { seconds } => Some(*seconds),
            PeriodEstimate::InsufficientData { .. } => None,
        }
    }

    pub fn days(&self) -> Option<f64> {
        self.seconds().map(|s| s / SECONDS_PER_DAY)
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, PeriodEstimate::InsufficientData { .. })
    }
}

impl fmt::Display for PeriodEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodEstimate::Period { seconds } => {
                write!(f, "{} s ({} days)", seconds, seconds / SECONDS_PER_DAY)
            }
            PeriodEstimate::InsufficientData { crossings } => write!(
                f,
                "insufficient data ({} upward crossing(s), need 2)",
                crossings
            ),
        }
    }
}

/// Times at which the radius rises through `threshold`
pub fn upward_crossings(samples: &[SimulationSample], threshold: f64) -> Vec<f64> {
    let Some(first) = samples.first() else {
        return Vec::new();
    };

    let mut crossings = Vec::new();
    let mut previous = first.radius;
    for sample in samples {
        if sample.radius > threshold && previous <= threshold {
            crossings.push(sample.time);
        }
        previous = sample.radius;
    }
    crossings
}

/// Estimate the oscillation period as the mean interval between crossings
pub fn estimate_period(samples: &[SimulationSample], threshold: f64) -> PeriodEstimate {
    let crossings = upward_crossings(samples, threshold);
    if crossings.len() < 2 {
        return PeriodEstimate::InsufficientData {
            crossings: crossings.len(),
        };
    }

    let intervals = crossings.windows(2).map(|pair| pair[1] - pair[0]);
    PeriodEstimate::Period {
        seconds: mean(intervals).unwrap_or(f64::NAN),
    }
}

/// Arithmetic mean of the radius, or `None` for an empty slice
pub fn mean_radius(samples: &[SimulationSample]) -> Option<f64> {
    mean(samples.iter().map(|s| s.radius))
}

/// Arithmetic mean of the pressure, or `None` for an empty slice
pub fn mean_pressure(samples: &[SimulationSample]) -> Option<f64> {
    mean(samples.iter().map(|s| s.pressure))
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Summary figures of one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesStats {
    pub period: PeriodEstimate,
    pub mean_radius: f64,
    pub mean_pressure: f64,
}

pub fn summarize(series: &Series, threshold: f64) -> SeriesStats {
    SeriesStats {
        period: estimate_period(series.samples(), threshold),
        mean_radius: series.mean_radius(),
        mean_pressure: series.mean_pressure(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn trace(points: &[(f64, f64)]) -> Vec<SimulationSample> {
        points
            .iter()
            .map(|&(time, radius)| SimulationSample {
                time,
                radius,
                velocity: 0.0,
                pressure: 1.0,
            })
            .collect()
    }

    #[test]
    fn test_three_crossings_give_mean_interval() {
        let samples = trace(&[
            (0.0, 0.0),
            (10.0, 2.0),
            (20.0, 0.0),
            (30.0, 2.0),
            (40.0, 0.0),
            (50.0, 2.0),
        ]);
        assert_eq!(upward_crossings(&samples, 1.0), vec![10.0, 30.0, 50.0]);
        assert_eq!(
            estimate_period(&samples, 1.0),
            PeriodEstimate::Period { seconds: 20.0 }
        );
    }

    #[test]
    fn test_uneven_intervals_are_averaged() {
        let samples = trace(&[
            (0.0, 0.0),
            (10.0, 2.0),
            (20.0, 0.0),
            (30.0, 2.0),
            (40.0, 0.0),
            (50.0, 0.0),
            (60.0, 0.0),
            (70.0, 2.0),
        ]);
        // intervals 20 and 40
        assert_eq!(estimate_period(&samples, 1.0).seconds(), Some(30.0));
    }

    #[test]
    fn test_single_crossing_is_insufficient() {
        let samples = trace(&[(1.0, 0.0), (2.0, 1.0), (3.0, 2.0), (4.0, 3.0)]);
        let estimate = estimate_period(&samples, 1.5);
        assert_eq!(estimate, PeriodEstimate::InsufficientData { crossings: 1 });
        assert!(estimate.is_insufficient());
        assert_eq!(estimate.seconds(), None);
    }

    #[test]
    fn test_first_sample_never_crosses() {
        let samples = trace(&[(1.0, 5.0), (2.0, 0.0), (3.0, 5.0)]);
        assert_eq!(upward_crossings(&samples, 1.0), vec![3.0]);
    }

    #[test]
    fn test_touching_threshold_counts_as_below() {
        // equality is "at or below": no crossing until a strictly greater sample
        let samples = trace(&[
            (0.0, 0.0),
            (1.0, 1.0),
            (2.0, 1.0),
            (3.0, 2.0),
            (4.0, 1.0),
            (5.0, 1.5),
        ]);
        assert_eq!(upward_crossings(&samples, 1.0), vec![3.0, 5.0]);
    }

    #[test]
    fn test_empty_trace() {
        assert!(upward_crossings(&[], 1.0).is_empty());
        assert_eq!(
            estimate_period(&[], 1.0),
            PeriodEstimate::InsufficientData { crossings: 0 }
        );
        assert_eq!(mean_radius(&[]), None);
        assert_eq!(mean_pressure(&[]), None);
    }

    #[test]
    fn test_means() {
        let mut samples = trace(&[(1.0, 1.0), (2.0, 2.0), (3.0, 6.0)]);
        samples[2].pressure = 4.0;
        assert_relative_eq!(mean_radius(&samples).unwrap(), 3.0);
        assert_relative_eq!(mean_pressure(&samples).unwrap(), 2.0);
    }

    #[test]
    fn test_non_finite_values_propagate_into_means() {
        let mut samples = trace(&[(1.0, 1.0), (2.0, 2.0)]);
        samples[1].pressure = f64::NAN;
        assert!(mean_pressure(&samples).unwrap().is_nan());
    }

    #[test]
    fn test_days_conversion() {
        let estimate = PeriodEstimate::Period { seconds: 172_800.0 };
        assert_eq!(estimate.days(), Some(2.0));
        assert!(estimate.to_string().contains("2 days"));
    }
}
