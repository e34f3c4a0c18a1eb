mod error;
mod law;
mod polynomial;
mod range;

pub use error::CalibrationError;
pub use law::LinearLaw;
pub use polynomial::Quintic;
pub use range::{EqualizationSegment, FocusRange};

use crate::equipment::EquipmentCombination;

/// Conversion factor from \[MPa\] to \[Pa\].
pub const PA_PER_MPA: f64 = 1e6;

impl EquipmentCombination {
    /// Evaluates the equalization factor for the focal depth `focus_mm` w.r.t. the exit plane.
    ///
    /// The low segment claims `low <= focus <= high` and the high segment claims
    /// `low < focus <= high`, so a shared boundary belongs to the low segment.
    pub fn equalization_factor(&self, focus_mm: f64) -> Result<f64, CalibrationError> {
        self.segments()
            .iter()
            .find(|seg| seg.range().contains(focus_mm))
            .map(|seg| seg.eval(focus_mm))
            .ok_or(CalibrationError::FocusOutOfRange {
                focus: focus_mm,
                low: self.segments()[0].range(),
                high: self.segments()[1].range(),
            })
    }

    /// Converts the maximum pressure in free water \[MPa\] to the generator amplitude \[%\].
    pub fn amplitude_from_pressure(
        &self,
        press_mpa: f64,
        focus_mm: f64,
    ) -> Result<f64, CalibrationError> {
        let eq_factor = self.nonzero_equalization_factor(focus_mm)?;
        Ok(self.p2a().eval(press_mpa * PA_PER_MPA / eq_factor))
    }

    /// Converts the generator amplitude \[%\] to the maximum pressure in free water \[MPa\].
    pub fn pressure_from_amplitude(
        &self,
        ampl_pct: f64,
        focus_mm: f64,
    ) -> Result<f64, CalibrationError> {
        let eq_factor = self.equalization_factor(focus_mm)?;
        let press_pa = self.p2a().inverse(ampl_pct)? * eq_factor;
        Ok(press_pa / PA_PER_MPA)
    }

    /// Converts the generator amplitude \[%\] to the voltage \[V\].
    ///
    /// An amplitude of zero always maps to zero volts.
    pub fn voltage_from_amplitude(&self, ampl_pct: f64) -> Result<f64, CalibrationError> {
        if ampl_pct == 0.0 {
            return Ok(0.0);
        }
        self.v2a().inverse(ampl_pct)
    }

    /// Converts the voltage \[V\] to the generator amplitude \[%\].
    pub fn amplitude_from_voltage(&self, volt: f64) -> f64 {
        self.v2a().eval(volt)
    }

    fn nonzero_equalization_factor(&self, focus_mm: f64) -> Result<f64, CalibrationError> {
        match self.equalization_factor(focus_mm)? {
            v if v == 0.0 => Err(CalibrationError::ZeroEqualization(focus_mm)),
            v => Ok(v),
        }
    }
}
