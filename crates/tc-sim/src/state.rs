//! Simulation state and recorded trajectory.

use serde::Serialize;

/// Temperature of the plant at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationState {
    pub temperature: f64,
    /// Number of steps applied so far (0 at start).
    pub step_index: usize,
}

impl SimulationState {
    /// State at step 0, before any controller or plant update.
    pub fn initial(temperature: f64) -> Self {
        Self {
            temperature,
            step_index: 0,
        }
    }
}

/// Ordered temperature samples, one per simulated step.
///
/// Sample `i` is the temperature after step `i + 1` has been applied. The
/// initial temperature is not part of the trajectory. Only the simulation
/// driver appends; samples are never rewritten.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Trajectory {
    samples: Vec<f64>,
}

/// Upper bound on up-front allocation; longer runs grow the buffer as they go.
const MAX_PREALLOCATED_SAMPLES: usize = 1 << 16;

impl Trajectory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity.min(MAX_PREALLOCATED_SAMPLES)),
        }
    }

    pub(crate) fn push(&mut self, temperature: f64) {
        self.samples.push(temperature);
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<f64> {
        self.samples.last().copied()
    }

    /// Iterate `(step, temperature)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.samples.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_step_zero() {
        let s = SimulationState::initial(20.0);
        assert_eq!(s.temperature, 20.0);
        assert_eq!(s.step_index, 0);
    }

    #[test]
    fn huge_step_count_does_not_preallocate() {
        let t = Trajectory::with_capacity(usize::MAX);
        assert!(t.is_empty());
        assert!(t.samples.capacity() <= MAX_PREALLOCATED_SAMPLES);
    }

    #[test]
    fn trajectory_appends_in_order() {
        let mut t = Trajectory::with_capacity(3);
        assert!(t.is_empty());
        t.push(25.0);
        t.push(30.0);
        assert_eq!(t.len(), 2);
        assert_eq!(t.samples(), &[25.0, 30.0]);
        assert_eq!(t.last(), Some(30.0));
        let pairs: Vec<_> = t.iter().collect();
        assert_eq!(pairs, vec![(0, 25.0), (1, 30.0)]);
    }
}
