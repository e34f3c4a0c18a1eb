use getset::{CopyGetters, Getters};

use super::EquipmentError;
use crate::calibration::{EqualizationSegment, LinearLaw};

/// Calibration record of a driving system and transducer pair.
#[derive(Clone, PartialEq, Debug, Getters, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentCombination {
    /// Serial of the driving system.
    #[getset(get = "pub")]
    driving_system: String,
    /// Serial of the transducer.
    #[getset(get = "pub")]
    transducer: String,
    /// Law from voltage \[V\] to amplitude \[%\].
    #[getset(get_copy = "pub")]
    v2a: LinearLaw,
    /// Law from pressure over equalization factor \[Pa\] to amplitude \[%\].
    #[getset(get_copy = "pub")]
    p2a: LinearLaw,
    /// Equalization segments, low segment first.
    #[getset(get = "pub")]
    segments: [EqualizationSegment; 2],
}

impl EquipmentCombination {
    /// Creates a new [`EquipmentCombination`].
    ///
    /// # Errors
    ///
    /// Returns [`EquipmentError::NonContiguousSegments`] unless the low segment is closed, the high
    /// segment is left-open and both share the boundary.
    pub fn new(
        driving_system: impl Into<String>,
        transducer: impl Into<String>,
        v2a: LinearLaw,
        p2a: LinearLaw,
        segments: [EqualizationSegment; 2],
    ) -> Result<Self, EquipmentError> {
        let combination = Self {
            driving_system: driving_system.into(),
            transducer: transducer.into(),
            v2a,
            p2a,
            segments,
        };
        combination.validate_segments()?;
        Ok(combination)
    }

    pub(crate) fn validate_segments(&self) -> Result<(), EquipmentError> {
        let [low, high] = self.segments.map(|s| s.range());
        if !low.low_inclusive()
            || high.low_inclusive()
            || low.low() > low.high()
            || high.low() > high.high()
            || low.high() != high.low()
        {
            return Err(EquipmentError::NonContiguousSegments(low, high));
        }
        Ok(())
    }

    /// Returns the focus range `[low, high]` covered by the equalization segments \[mm\].
    pub fn covered_focus_range(&self) -> (f64, f64) {
        (self.segments[0].range().low(), self.segments[1].range().high())
    }

    /// Checks whether the pressure law carries a calibration.
    ///
    /// Some combinations are only calibrated for voltage and ship an all-zero pressure law.
    pub fn is_pressure_calibrated(&self) -> bool {
        self.p2a.a != 0.0
    }
}
