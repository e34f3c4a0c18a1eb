use derive_more::Display;
use derive_new::new;

use super::CalibrationError;

/// A first order law `y = a * x + b`.
#[derive(new, Clone, Copy, PartialEq, Debug, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display("y = {a} * x + {b}")]
pub struct LinearLaw {
    /// 1st order coefficient.
    pub a: f64,
    /// 0th order coefficient.
    pub b: f64,
}

impl LinearLaw {
    /// Evaluates `a * x + b`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.a * x + self.b
    }

    /// Solves `y = a * x + b` for `x`.
    pub fn inverse(&self, y: f64) -> Result<f64, CalibrationError> {
        if self.a == 0.0 {
            return Err(CalibrationError::DegenerateLaw(*self));
        }
        Ok((y - self.b) / self.a)
    }
}
