//! Trajectory summaries.

use serde::Serialize;

use crate::sim::SimRecord;

/// Headline numbers for a run.
///
/// Extrema, crossing, overshoot and reversals are taken over finite samples
/// only. A run whose temperature overflowed reports those samples in
/// `non_finite_samples` instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectorySummary {
    pub samples: usize,
    pub min: f64,
    pub max: f64,
    pub final_temperature: f64,
    pub setpoint: f64,
    /// First sample index at or above the setpoint.
    pub first_crossing: Option<usize>,
    /// Largest excursion above the setpoint (0 if never above).
    pub peak_overshoot: f64,
    /// Number of times the step direction flips; high for chattering loops.
    pub reversals: usize,
    /// Samples that are NaN or infinite.
    pub non_finite_samples: usize,
}

impl TrajectorySummary {
    pub fn from_record(record: &SimRecord) -> Option<Self> {
        Self::from_samples(record.trajectory.samples(), record.setpoint)
    }

    /// Summarize raw samples. Returns `None` for an empty series.
    pub fn from_samples(samples: &[f64], setpoint: f64) -> Option<Self> {
        let final_temperature = *samples.last()?;

        let finite = || samples.iter().copied().filter(|t| t.is_finite());
        let min = finite().fold(f64::NAN, f64::min);
        let max = finite().fold(f64::NAN, f64::max);
        let first_crossing = samples
            .iter()
            .position(|&t| t.is_finite() && t >= setpoint);
        let non_finite_samples = samples.iter().filter(|t| !t.is_finite()).count();

        let mut reversals = 0;
        let mut last_direction = 0.0f64;
        for pair in samples.windows(2) {
            if !pair[0].is_finite() || !pair[1].is_finite() {
                last_direction = 0.0;
                continue;
            }
            if pair[1] == pair[0] {
                continue;
            }
            let direction = (pair[1] - pair[0]).signum();
            if last_direction != 0.0 && direction != last_direction {
                reversals += 1;
            }
            last_direction = direction;
        }

        Some(Self {
            samples: samples.len(),
            min,
            max,
            final_temperature,
            setpoint,
            first_crossing,
            peak_overshoot: if max.is_nan() {
                0.0
            } else {
                (max - setpoint).max(0.0)
            },
            reversals,
            non_finite_samples,
        })
    }

    /// Whether any sample overflowed to infinity or NaN.
    pub fn diverged(&self) -> bool {
        self.non_finite_samples > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_has_no_summary() {
        assert_eq!(TrajectorySummary::from_samples(&[], 50.0), None);
    }

    #[test]
    fn summary_of_rising_series() {
        let s = TrajectorySummary::from_samples(&[25.0, 30.0, 35.0], 50.0).unwrap();
        assert_eq!(s.samples, 3);
        assert_eq!(s.min, 25.0);
        assert_eq!(s.max, 35.0);
        assert_eq!(s.final_temperature, 35.0);
        assert_eq!(s.first_crossing, None);
        assert_eq!(s.peak_overshoot, 0.0);
        assert_eq!(s.reversals, 0);
        assert!(!s.diverged());
    }

    #[test]
    fn summary_counts_chatter() {
        let s =
            TrajectorySummary::from_samples(&[45.0, 50.0, 48.0, 53.0, 51.0, 49.0, 54.0], 50.0)
                .unwrap();
        assert_eq!(s.first_crossing, Some(1));
        assert_eq!(s.peak_overshoot, 4.0);
        // up, down, up, down, down, up
        assert_eq!(s.reversals, 4);
    }

    #[test]
    fn flat_segments_do_not_count() {
        let s = TrajectorySummary::from_samples(&[1.0, 2.0, 2.0, 3.0], 50.0).unwrap();
        assert_eq!(s.reversals, 0);
    }

    #[test]
    fn non_finite_windows_are_not_reversals() {
        let samples = [40.0, 60.0, f64::INFINITY, f64::NAN, f64::NAN, f64::NAN];
        let s = TrajectorySummary::from_samples(&samples, 50.0).unwrap();
        assert_eq!(s.reversals, 0);
        assert_eq!(s.non_finite_samples, 4);
        assert!(s.diverged());
        assert_eq!(s.min, 40.0);
        assert_eq!(s.max, 60.0);
        assert!(s.final_temperature.is_nan());
    }

    #[test]
    fn all_non_finite_has_nan_extrema() {
        let s = TrajectorySummary::from_samples(&[f64::NAN, f64::NAN], 50.0).unwrap();
        assert!(s.min.is_nan() && s.max.is_nan());
        assert_eq!(s.peak_overshoot, 0.0);
        assert_eq!(s.first_crossing, None);
    }
}
