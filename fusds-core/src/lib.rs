#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Core types and calculations for focused ultrasound driving systems.
//!
//! Everything in this crate is synchronous and free of I/O. Equipment records are read from an
//! [`EquipmentRegistry`], calibration laws are evaluated on an [`EquipmentCombination`], phases
//! are calculated by the beam [`steering`] engine and ramp envelopes by the [`ramp`] generator.
//!
//! [`EquipmentRegistry`]: crate::equipment::EquipmentRegistry
//! [`EquipmentCombination`]: crate::equipment::EquipmentCombination

/// Polynomial and linear calibration laws.
pub mod calibration;
/// Common constants and unit types.
pub mod common;
/// Equipment records and the registry.
pub mod equipment;
/// Geometry of transducer elements.
pub mod geometry;
/// Ramp envelope generator.
pub mod ramp;
/// Beam steering engine.
pub mod steering;

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        calibration::{CalibrationError, EqualizationSegment, FocusRange, LinearLaw, Quintic},
        common::{deg, kHz, mm, rad, Angle, Freq, Hz},
        equipment::{
            DrivingSystemKind, DrivingSystemSpec, EquipmentCombination, EquipmentError,
            EquipmentRegistry, EquipmentRegistryBuilder, TransducerSpec,
        },
        geometry::{Element, ElementArray, Point3, Vector3},
        ramp::{Ramp, RampEnvelope, RampError, RampShape},
        steering::{Dephasing, Focus, PhaseTable, SteeringError, SteeringTable, TableSteering},
    };

    #[cfg(feature = "serde")]
    pub use crate::equipment::Catalog;
}
