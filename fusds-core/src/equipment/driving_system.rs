use derive_more::Display;
use getset::{CopyGetters, Getters};

/// Manufacturer family of a driving system.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrivingSystemKind {
    /// IGT (Image Guided Therapy) generators.
    #[display("IGT")]
    Igt,
    /// Sonic Concepts transducer power output systems.
    #[display("Sonic Concepts")]
    SonicConcepts,
}

/// A record of a driving system.
#[derive(Clone, PartialEq, Debug, Getters, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrivingSystemSpec {
    /// Serial number.
    #[getset(get = "pub")]
    serial: String,
    /// Display name.
    #[getset(get = "pub")]
    name: String,
    /// Manufacturer family.
    #[getset(get_copy = "pub")]
    kind: DrivingSystemKind,
    /// Number of available channels.
    #[getset(get_copy = "pub")]
    channels: usize,
    /// Opaque connection descriptor, e.g., a serial port.
    #[getset(get = "pub")]
    connection: String,
    /// Serials of the compatible transducers.
    #[getset(get = "pub")]
    transducers: Vec<String>,
    /// Whether the driving system is available for use.
    #[getset(get_copy = "pub")]
    active: bool,
}

impl DrivingSystemSpec {
    /// Creates a new active [`DrivingSystemSpec`] without compatible transducers.
    pub fn new(
        serial: impl Into<String>,
        name: impl Into<String>,
        kind: DrivingSystemKind,
        channels: usize,
        connection: impl Into<String>,
    ) -> Self {
        Self {
            serial: serial.into(),
            name: name.into(),
            kind,
            channels,
            connection: connection.into(),
            transducers: Vec::new(),
            active: true,
        }
    }

    /// Sets the compatible transducers.
    pub fn with_transducers(self, transducers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            transducers: transducers.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Sets whether the driving system is available for use.
    pub fn with_active(self, active: bool) -> Self {
        Self { active, ..self }
    }

    /// Checks whether the transducer is listed as compatible.
    pub fn is_compatible_with(&self, transducer: &str) -> bool {
        self.transducers.iter().any(|t| t == transducer)
    }
}
