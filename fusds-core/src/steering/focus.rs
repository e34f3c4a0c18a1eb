use itertools::Itertools;

use crate::{
    common::{deg, mm, Angle, Freq},
    geometry::{ElementArray, Point3},
};

use super::{Dephasing, SteeringError};

/// Time-of-flight steering to a focal point.
///
/// The working space of the transducer has its origin at the natural focal point (all phases are
/// zero) and its Z axis toward the transducer.
#[derive(Clone, PartialEq, Debug)]
pub struct Focus {
    pos: Point3,
    dephasing: Dephasing,
}

impl Focus {
    /// constructor
    ///
    /// # Arguments
    ///
    /// * `pos` - position of the focal point in meters
    ///
    pub const fn new(pos: Point3) -> Self {
        Self {
            pos,
            dephasing: Dephasing::None,
        }
    }

    /// Aims on the main axis at `focus_wrt_bowl` \[mm\] from the bowl center of a transducer with
    /// a natural focus of `natural_focus` \[mm\].
    pub fn on_axis(natural_focus: f64, focus_wrt_bowl: f64) -> Self {
        Self::new(Point3::new(0., 0., (natural_focus - focus_wrt_bowl) * mm))
    }

    /// set dephasing overlay
    pub fn with_dephasing(self, dephasing: Dephasing) -> Self {
        Self { dephasing, ..self }
    }

    /// position of the focal point
    pub const fn pos(&self) -> Point3 {
        self.pos
    }

    /// dephasing overlay
    pub const fn dephasing(&self) -> &Dephasing {
        &self.dephasing
    }

    /// Calculates the phase of each element.
    ///
    /// `freqs` holds either a single frequency shared by all elements or one frequency per element.
    pub fn calc(
        &self,
        array: &ElementArray,
        freqs: &[Freq],
    ) -> Result<Vec<Angle>, SteeringError> {
        if array.is_empty() {
            return Err(SteeringError::EmptyArray);
        }
        if freqs.len() != 1 && freqs.len() != array.num_elements() {
            return Err(SteeringError::FrequencyCountMismatch {
                actual: freqs.len(),
                elements: array.num_elements(),
            });
        }
        if let Some(f) = freqs.iter().find(|f| !f.is_valid()) {
            return Err(SteeringError::InvalidFrequency(f.hz()));
        }
        self.dephasing.validate(array.num_elements())?;

        let phases = array
            .iter()
            .map(|el| {
                let freq = freqs[if freqs.len() == 1 { 0 } else { el.idx() }];
                let dist = (el.position() - self.pos).norm();
                (dist / freq.wavelength()).fract() * 360.0 * deg
            })
            .collect_vec();
        let phases = self.dephasing.apply(phases)?;

        tracing::debug!("Computed phases for focal point {:?}: {:?}", self.pos, phases);

        Ok(phases)
    }
}
