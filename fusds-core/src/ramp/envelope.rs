use std::time::Duration;

use derive_new::new;

use crate::common::PERCENT_MAX;

/// Normalized ramp envelope, rising from `0` to `1`.
#[derive(new, Clone, PartialEq, Debug)]
pub struct RampEnvelope {
    samples: Vec<f64>,
    resolution: Duration,
}

impl RampEnvelope {
    /// Normalized samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Temporal step between samples.
    pub const fn resolution(&self) -> Duration {
        self.resolution
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Checks whether the envelope has no step.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Total duration of the envelope.
    pub fn duration(&self) -> Duration {
        self.resolution * self.samples.len() as u32
    }

    /// Attenuation steps \[%\] at the beginning of a pulse: the reversed envelope, truncated.
    pub fn ramp_up(&self) -> Vec<u8> {
        self.samples.iter().rev().map(|&s| percent(s)).collect()
    }

    /// Attenuation steps \[%\] at the end of a pulse: the envelope, truncated.
    pub fn ramp_down(&self) -> Vec<u8> {
        self.samples.iter().map(|&s| percent(s)).collect()
    }
}

fn percent(sample: f64) -> u8 {
    (sample * PERCENT_MAX) as u8
}
