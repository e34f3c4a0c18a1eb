mod combination;
mod driving_system;
mod error;
mod registry;
mod transducer;

pub use combination::EquipmentCombination;
pub use driving_system::{DrivingSystemKind, DrivingSystemSpec};
pub use error::EquipmentError;
#[cfg(feature = "serde")]
pub use registry::Catalog;
pub use registry::{EquipmentRegistry, EquipmentRegistryBuilder};
pub use transducer::TransducerSpec;
