use getset::{CopyGetters, Getters};

use crate::common::Freq;

/// A record of a transducer.
#[derive(Clone, PartialEq, Debug, Getters, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransducerSpec {
    /// Serial number.
    #[getset(get = "pub")]
    serial: String,
    /// Display name.
    #[getset(get = "pub")]
    name: String,
    /// Manufacturer.
    #[getset(get = "pub")]
    manufacturer: String,
    /// Number of elements.
    #[getset(get_copy = "pub")]
    elements: usize,
    /// Fundamental frequency.
    #[getset(get_copy = "pub")]
    fund_freq: Freq,
    /// Natural focus \[mm\].
    #[getset(get_copy = "pub")]
    natural_focus: f64,
    /// Distance from the exit plane to the first element \[mm\].
    #[getset(get_copy = "pub")]
    exit_distance: f64,
    /// Minimum focus w.r.t. the exit plane \[mm\].
    #[getset(get_copy = "pub")]
    min_focus: f64,
    /// Maximum focus w.r.t. the exit plane \[mm\].
    #[getset(get_copy = "pub")]
    max_focus: f64,
    /// Opaque reference to the steering data.
    #[getset(get = "pub")]
    steering_reference: String,
    /// Whether the transducer is available for use.
    #[getset(get_copy = "pub")]
    active: bool,
}

impl TransducerSpec {
    /// Creates a new active [`TransducerSpec`].
    ///
    /// The focus range defaults to the natural focus only and the steering reference is empty.
    pub fn new(
        serial: impl Into<String>,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        elements: usize,
        fund_freq: Freq,
    ) -> Self {
        Self {
            serial: serial.into(),
            name: name.into(),
            manufacturer: manufacturer.into(),
            elements,
            fund_freq,
            natural_focus: 0.0,
            exit_distance: 0.0,
            min_focus: 0.0,
            max_focus: 0.0,
            steering_reference: String::new(),
            active: true,
        }
    }

    /// Sets the natural focus and the exit plane distance in \[mm\].
    pub fn with_geometry(self, natural_focus: f64, exit_distance: f64) -> Self {
        Self {
            natural_focus,
            exit_distance,
            ..self
        }
    }

    /// Sets the focus range w.r.t. the exit plane in \[mm\].
    pub fn with_focus_range(self, min_focus: f64, max_focus: f64) -> Self {
        Self {
            min_focus,
            max_focus,
            ..self
        }
    }

    /// Sets the reference to the steering data.
    pub fn with_steering_reference(self, steering_reference: impl Into<String>) -> Self {
        Self {
            steering_reference: steering_reference.into(),
            ..self
        }
    }

    /// Sets whether the transducer is available for use.
    pub fn with_active(self, active: bool) -> Self {
        Self { active, ..self }
    }

    /// Converts a focus w.r.t. the exit plane into a focus w.r.t. the bowl center \[mm\].
    pub fn focus_wrt_bowl(&self, focus_wrt_exit: f64) -> f64 {
        focus_wrt_exit + self.exit_distance
    }

    /// Checks whether the focus w.r.t. the exit plane lies in `[min_focus, max_focus]`.
    pub fn is_focus_in_range(&self, focus_wrt_exit: f64) -> bool {
        (self.min_focus..=self.max_focus).contains(&focus_wrt_exit)
    }

    pub(crate) fn has_valid_focus_range(&self) -> bool {
        self.min_focus.is_finite() && self.max_focus.is_finite() && self.min_focus <= self.max_focus
    }
}
