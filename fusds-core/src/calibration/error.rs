use thiserror::Error;

use super::{FocusRange, LinearLaw};

/// An error produced by the calibration model.
#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum CalibrationError {
    /// The focal depth is covered by neither calibration segment.
    #[error("Focus ({focus} mm) is out of the calibrated range ({low} or {high})")]
    FocusOutOfRange {
        /// The requested focal depth w.r.t. the exit plane \[mm\].
        focus: f64,
        /// The range of the low segment.
        low: FocusRange,
        /// The range of the high segment.
        high: FocusRange,
    },
    /// The linear law has a zero slope and cannot be inverted.
    #[error("Linear law ({0}) cannot be inverted")]
    DegenerateLaw(LinearLaw),
    /// The equalization factor evaluates to zero.
    #[error("Equalization factor at focus ({0} mm) is zero")]
    ZeroEqualization(f64),
}
