use thiserror::Error;

use crate::calibration::FocusRange;

/// An error produced by the equipment registry.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum EquipmentError {
    /// No driving system with the serial is registered.
    #[error("Driving system ({0}) is not found")]
    DrivingSystemNotFound(String),
    /// No transducer with the serial is registered.
    #[error("Transducer ({0}) is not found")]
    TransducerNotFound(String),
    /// The registry has no active driving system.
    #[error("No active driving system is registered")]
    NoActiveDrivingSystem,
    /// The registry has no active transducer.
    #[error("No active transducer is registered")]
    NoActiveTransducer,
    /// Two records share a serial.
    #[error("Serial ({0}) is registered twice")]
    DuplicateSerial(String),
    /// Two combinations share the same key.
    #[error("Combination of {0} and {1} is registered twice")]
    DuplicateCombination(String, String),
    /// The equalization segments are not `[low, boundary]` followed by `(boundary, high]`.
    #[error("Equalization segments {0} and {1} are not contiguous")]
    NonContiguousSegments(FocusRange, FocusRange),
    /// The equalization segments do not cover the focus range of the transducer.
    #[error("Equalization segments cover [{covered_low}, {covered_high}] but transducer ({transducer}) requires [{min_focus}, {max_focus}]")]
    UncoveredFocusRange {
        /// Serial of the transducer.
        transducer: String,
        /// Lower bound covered by the segments \[mm\].
        covered_low: f64,
        /// Upper bound covered by the segments \[mm\].
        covered_high: f64,
        /// Minimum focus of the transducer \[mm\].
        min_focus: f64,
        /// Maximum focus of the transducer \[mm\].
        max_focus: f64,
    },
    /// The focus range of a transducer is empty or not finite.
    #[error("Focus range [{1}, {2}] of transducer ({0}) is invalid")]
    InvalidFocusRange(String, f64, f64),
}
