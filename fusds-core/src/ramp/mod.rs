mod envelope;
mod error;
mod shape;

pub use envelope::RampEnvelope;
pub use error::RampError;
pub use shape::RampShape;

use std::time::Duration;

use crate::common::{RAMP_RESOLUTION_MIN, RAMP_STEPS_MAX};

/// Ramp of a pulse.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ramp {
    shape: RampShape,
    duration: Duration,
    resolution: Duration,
    max_steps: usize,
}

impl Ramp {
    /// Creates a new [`Ramp`] with the finest IGT resolution and step ceiling.
    pub const fn new(shape: RampShape, duration: Duration) -> Self {
        Self {
            shape,
            duration,
            resolution: RAMP_RESOLUTION_MIN,
            max_steps: RAMP_STEPS_MAX,
        }
    }

    /// Sets the temporal step resolution.
    pub const fn with_resolution(self, resolution: Duration) -> Self {
        Self { resolution, ..self }
    }

    /// Sets the step ceiling.
    pub const fn with_max_steps(self, max_steps: usize) -> Self {
        Self { max_steps, ..self }
    }

    /// Ramp shape.
    pub const fn shape(&self) -> RampShape {
        self.shape
    }

    /// Ramp duration.
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Calculates the envelope.
    ///
    /// Returns `None` for [`RampShape::Rectangular`] and for a duration shorter than one step,
    /// i.e., the pulse is emitted at full amplitude.
    pub fn calc(&self) -> Result<Option<RampEnvelope>, RampError> {
        if self.resolution.is_zero() {
            return Err(RampError::ZeroResolution);
        }
        if self.max_steps == 0 {
            return Err(RampError::ZeroMaxSteps);
        }
        let max_steps =
            u32::try_from(self.max_steps).map_err(|_| RampError::TooManySteps(self.max_steps))?;
        if self.shape == RampShape::Rectangular {
            return Ok(None);
        }

        let steps = self.duration.as_nanos() / self.resolution.as_nanos();
        let (steps, resolution) = if steps > self.max_steps as u128 {
            let resolution = self.duration / max_steps;
            tracing::debug!(
                "Ramp of {:?} exceeds {} steps, resolution is {:?}",
                self.duration,
                self.max_steps,
                resolution
            );
            (self.max_steps, resolution)
        } else {
            (steps as usize, self.resolution)
        };
        if steps == 0 {
            return Ok(None);
        }

        let samples = match self.shape {
            RampShape::Rectangular => return Ok(None),
            RampShape::Linear => linspace(0.0, 1.0, steps).collect(),
            RampShape::Tukey => tukey(steps, 1.0),
        };
        Ok(Some(RampEnvelope::new(samples, resolution)))
    }
}

fn linspace(start: f64, stop: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (stop - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| start + step * i as f64)
}

fn tukey(n: usize, alpha: f64) -> Vec<f64> {
    linspace(0.0, alpha / 2.0, n)
        .map(|x| 0.5 * (1.0 + (2.0 * std::f64::consts::PI / alpha * (x - alpha / 2.0)).cos()))
        .collect()
}
