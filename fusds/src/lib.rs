#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Sequence parameter engine for focused ultrasound driving systems.
//!
//! A [`Sequence`] is created from an [`EquipmentRegistry`] and keeps every derived parameter
//! consistent with the last accepted input. A [`Driver`] consumes the sequence.
//!
//! ```
//! use std::sync::Arc;
//!
//! use fusds::prelude::*;
//!
//! # fn main() -> Result<(), FusError> {
//! let registry = EquipmentRegistry::builder()
//!     .driving_system(
//!         DrivingSystemSpec::new("IGT-32-ch_comb_1x10-ch", "IGT 32 ch.", DrivingSystemKind::Igt, 10, "")
//!             .with_transducers(["IS_PCD15287_01001"]),
//!     )
//!     .transducer(
//!         TransducerSpec::new("IS_PCD15287_01001", "Imasonic 10 ch.", "Imasonic", 10, 300. * kHz)
//!             .with_geometry(75.0, 9.7)
//!             .with_focus_range(7.0, 92.0),
//!     )
//!     .build()?;
//!
//! let mut seq = Sequence::new(Arc::new(registry))?;
//! seq.set_focus(40.0)?;
//! let update = seq.set_amplitude(30.0)?;
//! assert_eq!(Some(30.0), seq.power().amplitude());
//! assert!(!update.warnings().is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! [`EquipmentRegistry`]: fusds_core::equipment::EquipmentRegistry
//! [`Driver`]: crate::driver::Driver

/// Drivers of driving systems.
pub mod driver;
/// Error types.
pub mod error;
/// Commonly used types.
pub mod prelude;
/// Sequence parameters.
pub mod sequence;

pub use fusds_core;

pub use sequence::Sequence;
