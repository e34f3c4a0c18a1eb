use thiserror::Error;

/// An error produced by the beam steering engine.
#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum SteeringError {
    /// The element array has no element.
    #[error("Element array is empty")]
    EmptyArray,
    /// The number of frequencies is neither one nor the number of elements.
    #[error("Number of frequencies ({actual}) must be 1 or the number of elements ({elements})")]
    FrequencyCountMismatch {
        /// Number of given frequencies.
        actual: usize,
        /// Number of elements.
        elements: usize,
    },
    /// A frequency is zero, negative or not finite.
    #[error("Frequency ({0} Hz) must be positive and finite")]
    InvalidFrequency(f64),
    /// The length of the phase override list differs from the number of elements.
    #[error("Number of override phases ({actual}) must be equal to the number of elements ({elements})")]
    OverrideLengthMismatch {
        /// Number of given phases.
        actual: usize,
        /// Number of elements.
        elements: usize,
    },
    /// The dephasing degree is out of `(0, 360]`.
    #[error("Dephasing degree ({0}°) is out of range (0, 360]")]
    DephasingOutOfRange(f64),
    /// The steering table has no row at the focus.
    #[error("Steering table has no row at focus ({0} mm)")]
    TableRowNotFound(f64),
    /// The steering table row is shorter than the number of channels.
    #[error("Steering table row at focus ({focus} mm) has {actual} phases but {channels} channels are required")]
    TableRowTooShort {
        /// Focus of the row \[mm\].
        focus: f64,
        /// Number of phases in the row.
        actual: usize,
        /// Number of channels.
        channels: usize,
    },
}
