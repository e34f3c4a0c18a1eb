mod dephasing;
mod error;
mod focus;
mod table;

pub use dephasing::Dephasing;
pub use error::SteeringError;
pub use focus::Focus;
pub use table::{PhaseTable, SteeringTable, TableSteering};
