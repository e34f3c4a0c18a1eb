mod error;
mod plan;
mod recorder;

pub use error::DriverError;
pub use plan::SequencePlan;
pub use recorder::Recorder;

use fusds_core::equipment::{DrivingSystemKind, DrivingSystemSpec};

use crate::Sequence;

/// A trait that provides the interface with a driving system.
pub trait Driver {
    /// The family of driving systems this driver talks to.
    #[must_use]
    fn kind(&self) -> DrivingSystemKind;

    /// Connects to the driving system.
    fn connect(&mut self, driving_system: &DrivingSystemSpec) -> Result<(), DriverError>;

    /// Sends the parameters of a sequence.
    fn send_sequence(&mut self, sequence: &Sequence) -> Result<(), DriverError>;

    /// Executes the sequences sent so far.
    fn execute_sequence(&mut self) -> Result<(), DriverError>;

    /// Disconnects from the driving system.
    fn disconnect(&mut self) -> Result<(), DriverError>;

    /// Checks if the driver is connected.
    #[must_use]
    fn is_connected(&self) -> bool;
}

impl Driver for Box<dyn Driver> {
    fn kind(&self) -> DrivingSystemKind {
        self.as_ref().kind()
    }

    fn connect(&mut self, driving_system: &DrivingSystemSpec) -> Result<(), DriverError> {
        self.as_mut().connect(driving_system)
    }

    fn send_sequence(&mut self, sequence: &Sequence) -> Result<(), DriverError> {
        self.as_mut().send_sequence(sequence)
    }

    fn execute_sequence(&mut self) -> Result<(), DriverError> {
        self.as_mut().execute_sequence()
    }

    fn disconnect(&mut self) -> Result<(), DriverError> {
        self.as_mut().disconnect()
    }

    fn is_connected(&self) -> bool {
        self.as_ref().is_connected()
    }
}
