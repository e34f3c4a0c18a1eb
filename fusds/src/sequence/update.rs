use derive_more::Display;
use fusds_core::equipment::DrivingSystemKind;
use getset::Getters;

use super::PowerKind;

/// A parameter of a [`Sequence`](super::Sequence).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
#[allow(missing_docs)]
pub enum Field {
    #[display("driving system")]
    DrivingSystem,
    #[display("transducer")]
    Transducer,
    #[display("operating frequency")]
    OperatingFrequency,
    #[display("focus")]
    Focus,
    #[display("chosen power")]
    ChosenPower,
    #[display("global power")]
    GlobalPower,
    #[display("pressure")]
    Pressure,
    #[display("voltage")]
    Voltage,
    #[display("amplitude")]
    Amplitude,
    #[display("dephasing")]
    Dephasing,
}

impl From<PowerKind> for Field {
    fn from(kind: PowerKind) -> Self {
        match kind {
            PowerKind::GlobalPower => Field::GlobalPower,
            PowerKind::Pressure => Field::Pressure,
            PowerKind::Voltage => Field::Voltage,
            PowerKind::Amplitude => Field::Amplitude,
        }
    }
}

/// A non-fatal condition reported by a sequence transition.
#[derive(Clone, PartialEq, Debug, Display)]
pub enum SequenceWarning {
    /// The driving system family does not accept the representation.
    #[display("Setting {power} is not supported by {kind} driving systems")]
    UnsupportedPower {
        /// The rejected representation.
        power: PowerKind,
        /// Family of the selected driving system.
        kind: DrivingSystemKind,
    },
    /// No calibration record exists, so only the amplitude can be set.
    #[display("No calibration exists for {driving_system} and {transducer}, only the amplitude can be set")]
    NoCombination {
        /// Serial of the driving system.
        driving_system: String,
        /// Serial of the transducer.
        transducer: String,
    },
    /// The calibration record has no pressure calibration.
    #[display("Pressure is not calibrated for {driving_system} and {transducer}")]
    PressureUncalibrated {
        /// Serial of the driving system.
        driving_system: String,
        /// Serial of the transducer.
        transducer: String,
    },
    /// The driving system does not list the transducer as compatible.
    #[display("Transducer {transducer} is not listed as compatible with {driving_system}")]
    IncompatibleEquipment {
        /// Serial of the driving system.
        driving_system: String,
        /// Serial of the transducer.
        transducer: String,
    },
    /// The chosen representation cannot be expressed anymore and was unset.
    #[display("The {_0} cannot be expressed with the selected equipment and is unset")]
    PowerUnset(PowerKind),
    /// The phase override does not fit the new transducer and was dropped.
    #[display("Phase override of {actual} phases does not fit {elements} elements and is dropped")]
    DephasingDropped {
        /// Number of phases in the override.
        actual: usize,
        /// Number of elements of the transducer.
        elements: usize,
    },
}

/// Result of a committed sequence transition.
#[derive(Clone, PartialEq, Debug, Default, Getters)]
#[getset(get = "pub")]
pub struct Update {
    /// Fields holding a new value.
    recomputed: Vec<Field>,
    /// Fields that became unset.
    invalidated: Vec<Field>,
    /// Non-fatal warnings.
    warnings: Vec<SequenceWarning>,
}

impl Update {
    pub(crate) fn new(warnings: Vec<SequenceWarning>) -> Self {
        Self {
            recomputed: Vec::new(),
            invalidated: Vec::new(),
            warnings,
        }
    }

    pub(crate) fn track(&mut self, field: Field, changed: bool, set: bool) {
        match (changed, set) {
            (false, _) => {}
            (true, true) => self.recomputed.push(field),
            (true, false) => self.invalidated.push(field),
        }
    }

    /// Checks whether the transition changed nothing.
    pub fn is_unchanged(&self) -> bool {
        self.recomputed.is_empty() && self.invalidated.is_empty()
    }
}
