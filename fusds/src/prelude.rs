pub use fusds_core::prelude::*;

pub use crate::{
    driver::{Driver, DriverError, Recorder, SequencePlan},
    error::FusError,
    sequence::{
        Field, Power, PowerKind, Sequence, SequenceError, SequenceWarning, Timing, TimingError,
        TimingPlan, Trigger, TriggerMode, Update,
    },
};
