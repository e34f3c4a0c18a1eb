use derive_more::Display;
use getset::CopyGetters;

/// Trigger mode of a sequence.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriggerMode {
    /// No trigger output.
    #[default]
    #[display("none")]
    None,
    /// Emits a trigger at the start of the whole sequence.
    #[display("trigger sequence")]
    Sequence,
    /// Emits a trigger at the start of every pulse train repetition.
    #[display("trigger one pulse train repetition")]
    OnePulseTrainRepetition,
}

/// Trigger settings of a sequence.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[getset(get_copy = "pub")]
pub struct Trigger {
    /// Trigger mode.
    mode: TriggerMode,
    /// Number of triggers.
    count: usize,
}

impl Trigger {
    /// Creates a new [`Trigger`].
    pub const fn new(mode: TriggerMode, count: usize) -> Self {
        Self { mode, count }
    }
}
