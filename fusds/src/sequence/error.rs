use fusds_core::{
    calibration::CalibrationError, equipment::EquipmentError, ramp::RampError,
    steering::SteeringError,
};
use thiserror::Error;

use super::{Field, TimingError};

/// An error produced by a sequence transition.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum SequenceError {
    /// Equipment lookup failed.
    #[error("{0}")]
    Equipment(#[from] EquipmentError),
    /// Calibration failed.
    #[error("{0}")]
    Calibration(#[from] CalibrationError),
    /// Steering failed.
    #[error("{0}")]
    Steering(#[from] SteeringError),
    /// Ramp generation failed.
    #[error("{0}")]
    Ramp(#[from] RampError),
    /// Inconsistent pulse timing.
    #[error("{0}")]
    Timing(#[from] TimingError),
    /// The focus is out of the range of the transducer.
    #[error("Focus ({focus} mm) is out of range [{min}, {max}]")]
    FocusOutOfRange {
        /// The requested focus w.r.t. the exit plane \[mm\].
        focus: f64,
        /// Minimum focus of the transducer \[mm\].
        min: f64,
        /// Maximum focus of the transducer \[mm\].
        max: f64,
    },
    /// The value is negative, not finite or out of range.
    #[error("Invalid {field}: {value}")]
    InvalidValue {
        /// The field.
        field: Field,
        /// The rejected value.
        value: f64,
    },
}
