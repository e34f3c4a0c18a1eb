use fusds_core::{
    calibration::CalibrationError, equipment::EquipmentError, ramp::RampError,
    steering::SteeringError,
};
use thiserror::Error;

use crate::{
    driver::DriverError,
    sequence::{SequenceError, TimingError},
};

/// An error produced by this crate.
#[derive(Error, Debug, PartialEq)]
pub enum FusError {
    /// Invalid equipment configuration.
    #[error("{0}")]
    Equipment(EquipmentError),
    /// Calibration failed.
    #[error("{0}")]
    Calibration(CalibrationError),
    /// Steering failed.
    #[error("{0}")]
    Steering(SteeringError),
    /// Ramp generation failed.
    #[error("{0}")]
    Ramp(RampError),
    /// A sequence transition was rejected.
    #[error("{0}")]
    Sequence(SequenceError),
    /// Inconsistent pulse timing.
    #[error("{0}")]
    Timing(TimingError),
    /// The driver failed.
    #[error("{0}")]
    Driver(DriverError),
}

macro_rules! impl_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for FusError {
                fn from(e: $ty) -> Self {
                    FusError::$variant(e)
                }
            }
        )*
    };
}

impl_from!(
    Equipment(EquipmentError),
    Calibration(CalibrationError),
    Steering(SteeringError),
    Ramp(RampError),
    Sequence(SequenceError),
    Timing(TimingError),
    Driver(DriverError),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from() {
        assert_eq!(
            FusError::Equipment(EquipmentError::NoActiveTransducer),
            EquipmentError::NoActiveTransducer.into()
        );
        assert_eq!(
            FusError::Driver(DriverError::new("not connected".to_owned())),
            DriverError::new("not connected".to_owned()).into()
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            "Steering table has no row at focus (46 mm)",
            FusError::from(SteeringError::TableRowNotFound(46.0)).to_string()
        );
    }
}
