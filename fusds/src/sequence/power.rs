use derive_more::Display;
use fusds_core::equipment::DrivingSystemKind;
use getset::CopyGetters;

/// Representation of the intensity of a sequence.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerKind {
    /// Global power \[W\].
    #[display("global power [W]")]
    GlobalPower,
    /// Maximum pressure in free water \[MPa\].
    #[display("pressure [MPa]")]
    Pressure,
    /// Voltage \[V\].
    #[display("voltage [V]")]
    Voltage,
    /// Generator amplitude \[%\].
    #[display("amplitude [%]")]
    Amplitude,
}

impl PowerKind {
    /// Checks whether drivers of the family accept this representation.
    ///
    /// Pressure and voltage additionally need a calibration record.
    pub const fn is_supported_by(self, kind: DrivingSystemKind) -> bool {
        matches!(
            (self, kind),
            (PowerKind::GlobalPower, DrivingSystemKind::SonicConcepts)
                | (
                    PowerKind::Pressure | PowerKind::Voltage | PowerKind::Amplitude,
                    DrivingSystemKind::Igt
                )
        )
    }
}

/// Intensity of a sequence in every representation.
///
/// At most one representation is chosen; the others are either derived from it or unset.
#[derive(Clone, Copy, PartialEq, Debug, Default, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[getset(get_copy = "pub")]
pub struct Power {
    /// The representation set by the user.
    chosen: Option<PowerKind>,
    /// Global power \[W\].
    global_power: Option<f64>,
    /// Maximum pressure in free water \[MPa\].
    pressure: Option<f64>,
    /// Voltage \[V\].
    voltage: Option<f64>,
    /// Generator amplitude \[%\].
    amplitude: Option<f64>,
}

impl Power {
    pub(crate) const UNSET: Self = Self {
        chosen: None,
        global_power: None,
        pressure: None,
        voltage: None,
        amplitude: None,
    };

    pub(crate) const fn global(global_power: f64) -> Self {
        Self {
            chosen: Some(PowerKind::GlobalPower),
            global_power: Some(global_power),
            ..Self::UNSET
        }
    }

    pub(crate) const fn igt(
        chosen: PowerKind,
        pressure: Option<f64>,
        voltage: Option<f64>,
        amplitude: Option<f64>,
    ) -> Self {
        Self {
            chosen: Some(chosen),
            global_power: None,
            pressure,
            voltage,
            amplitude,
        }
    }

    /// Returns the value of a representation.
    pub const fn get(&self, kind: PowerKind) -> Option<f64> {
        match kind {
            PowerKind::GlobalPower => self.global_power,
            PowerKind::Pressure => self.pressure,
            PowerKind::Voltage => self.voltage,
            PowerKind::Amplitude => self.amplitude,
        }
    }

    /// Returns the chosen representation and its value.
    pub fn chosen_value(&self) -> Option<(PowerKind, f64)> {
        self.chosen.and_then(|kind| self.get(kind).map(|v| (kind, v)))
    }

    pub(crate) fn with_chosen(self, chosen: PowerKind) -> Self {
        Self {
            chosen: Some(chosen),
            ..self
        }
    }
}
