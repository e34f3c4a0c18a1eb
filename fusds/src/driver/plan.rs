use fusds_core::{
    common::{Angle, Freq},
    geometry::ElementArray,
    ramp::RampEnvelope,
};
use getset::{CopyGetters, Getters};

use crate::{
    error::FusError,
    sequence::{Power, Trigger, TimingPlan},
    Sequence,
};

/// Everything a driving system needs to emit a sequence.
#[derive(Clone, PartialEq, Debug, Getters, CopyGetters)]
pub struct SequencePlan {
    /// Buffer index.
    #[getset(get_copy = "pub")]
    seq_number: usize,
    /// Operating frequency.
    #[getset(get_copy = "pub")]
    oper_freq: Freq,
    /// Intensity.
    #[getset(get_copy = "pub")]
    power: Power,
    /// Phases of the elements, if the element geometry is known.
    #[getset(get = "pub")]
    phases: Option<Vec<Angle>>,
    /// Ramp envelope of a pulse.
    #[getset(get = "pub")]
    ramp: Option<RampEnvelope>,
    /// Repetition counts and delays.
    #[getset(get_copy = "pub")]
    timing: TimingPlan,
    /// Trigger settings.
    #[getset(get_copy = "pub")]
    trigger: Trigger,
}

impl SequencePlan {
    /// Resolves the derived parameters of a sequence.
    pub fn new(sequence: &Sequence, elements: Option<&ElementArray>) -> Result<Self, FusError> {
        Ok(Self {
            seq_number: sequence.seq_number(),
            oper_freq: sequence.oper_freq(),
            power: sequence.power(),
            phases: elements.map(|e| sequence.phases(e)).transpose()?,
            ramp: sequence.ramp_envelope()?,
            timing: sequence.timing_plan()?,
            trigger: sequence.trigger(),
        })
    }
}
