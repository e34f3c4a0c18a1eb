use derive_more::Display;

/// Shape of a pulse ramp.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RampShape {
    /// No ramp.
    #[default]
    Rectangular,
    /// Linear ramp.
    Linear,
    /// Tukey window ramp.
    Tukey,
}
