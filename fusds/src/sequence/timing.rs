use std::time::Duration;

use derive_more::Display;
use fusds_core::{
    common::{
        DEFAULT_PULSE_DURATION, DEFAULT_PULSE_REP_INTERVAL, DEFAULT_PULSE_TRAIN_DURATION,
        DEFAULT_PULSE_TRAIN_REP_DURATION, DEFAULT_PULSE_TRAIN_REP_INTERVAL,
    },
    ramp::{Ramp, RampShape},
};
use getset::CopyGetters;
use thiserror::Error;

/// Pulse timing of a sequence.
#[derive(Clone, Copy, PartialEq, Debug, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[getset(get_copy = "pub")]
pub struct Timing {
    /// Pulse duration.
    pulse_duration: Duration,
    /// Pulse repetition interval.
    pulse_rep_interval: Duration,
    /// Pulse train duration.
    pulse_train_duration: Duration,
    /// Pulse train repetition interval.
    pulse_train_rep_interval: Duration,
    /// Duration of the block of pulse train repetitions.
    pulse_train_rep_duration: Duration,
    /// Ramp shape.
    ramp_shape: RampShape,
    /// Ramp duration.
    ramp_duration: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            pulse_duration: DEFAULT_PULSE_DURATION,
            pulse_rep_interval: DEFAULT_PULSE_REP_INTERVAL,
            pulse_train_duration: DEFAULT_PULSE_TRAIN_DURATION,
            pulse_train_rep_interval: DEFAULT_PULSE_TRAIN_REP_INTERVAL,
            pulse_train_rep_duration: DEFAULT_PULSE_TRAIN_REP_DURATION,
            ramp_shape: RampShape::Rectangular,
            ramp_duration: Duration::ZERO,
        }
    }
}

impl Timing {
    /// Sets the pulse duration.
    pub fn with_pulse_duration(self, pulse_duration: Duration) -> Self {
        Self {
            pulse_duration,
            ..self
        }
    }

    /// Sets the pulse repetition interval.
    pub fn with_pulse_rep_interval(self, pulse_rep_interval: Duration) -> Self {
        Self {
            pulse_rep_interval,
            ..self
        }
    }

    /// Sets the pulse train duration.
    pub fn with_pulse_train_duration(self, pulse_train_duration: Duration) -> Self {
        Self {
            pulse_train_duration,
            ..self
        }
    }

    /// Sets the pulse train repetition interval.
    pub fn with_pulse_train_rep_interval(self, pulse_train_rep_interval: Duration) -> Self {
        Self {
            pulse_train_rep_interval,
            ..self
        }
    }

    /// Sets the duration of the block of pulse train repetitions.
    pub fn with_pulse_train_rep_duration(self, pulse_train_rep_duration: Duration) -> Self {
        Self {
            pulse_train_rep_duration,
            ..self
        }
    }

    /// Sets the ramp.
    pub fn with_ramp(self, ramp_shape: RampShape, ramp_duration: Duration) -> Self {
        Self {
            ramp_shape,
            ramp_duration,
            ..self
        }
    }

    /// Returns the ramp of a pulse.
    pub const fn ramp(&self) -> Ramp {
        Ramp::new(self.ramp_shape, self.ramp_duration)
    }

    /// Derives the repetition counts and delays.
    pub fn plan(&self) -> Result<TimingPlan, TimingError> {
        [
            (TimingField::PulseDuration, self.pulse_duration),
            (TimingField::PulseRepInterval, self.pulse_rep_interval),
            (TimingField::PulseTrainDuration, self.pulse_train_duration),
            (TimingField::PulseTrainRepInterval, self.pulse_train_rep_interval),
            (TimingField::PulseTrainRepDuration, self.pulse_train_rep_duration),
        ]
        .into_iter()
        .find(|(_, d)| d.is_zero())
        .map_or(Ok(()), |(field, _)| Err(TimingError::Zero(field)))?;

        if self.pulse_duration > self.pulse_rep_interval {
            return Err(TimingError::PulseLongerThanInterval {
                pulse: self.pulse_duration,
                interval: self.pulse_rep_interval,
            });
        }
        if self.pulse_train_duration > self.pulse_train_rep_interval {
            return Err(TimingError::TrainLongerThanInterval {
                train: self.pulse_train_duration,
                interval: self.pulse_train_rep_interval,
            });
        }
        if self.ramp_shape != RampShape::Rectangular && self.ramp_duration > self.pulse_duration {
            return Err(TimingError::RampLongerThanPulse {
                ramp: self.ramp_duration,
                pulse: self.pulse_duration,
            });
        }

        let pulses_per_train =
            (self.pulse_train_duration.as_nanos() / self.pulse_rep_interval.as_nanos()) as usize;
        if pulses_per_train == 0 {
            return Err(TimingError::EmptyTrain {
                train: self.pulse_train_duration,
                interval: self.pulse_rep_interval,
            });
        }
        let train_repetitions = (self.pulse_train_rep_duration.as_nanos()
            / self.pulse_train_rep_interval.as_nanos()) as usize;
        if train_repetitions == 0 {
            return Err(TimingError::EmptyRepetition {
                duration: self.pulse_train_rep_duration,
                interval: self.pulse_train_rep_interval,
            });
        }

        Ok(TimingPlan {
            pulses_per_train,
            pulse_off: round_to_tenth_ms(self.pulse_rep_interval - self.pulse_duration),
            train_repetitions,
            train_delay: self.pulse_train_rep_interval - self.pulse_train_duration,
        })
    }
}

fn round_to_tenth_ms(d: Duration) -> Duration {
    const TENTH_MS_NS: u128 = 100_000;
    let ns = (d.as_nanos() + TENTH_MS_NS / 2) / TENTH_MS_NS * TENTH_MS_NS;
    Duration::from_nanos(ns as u64)
}

/// Repetition counts and delays derived from a [`Timing`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[getset(get_copy = "pub")]
pub struct TimingPlan {
    /// Number of pulses in a pulse train.
    pulses_per_train: usize,
    /// Time between the end of a pulse and the start of the next one, rounded to 0.1 ms.
    pulse_off: Duration,
    /// Number of pulse train repetitions.
    train_repetitions: usize,
    /// Time between the end of a pulse train and the start of the next one.
    train_delay: Duration,
}

/// A duration field of [`Timing`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
#[allow(missing_docs)]
pub enum TimingField {
    #[display("pulse duration")]
    PulseDuration,
    #[display("pulse repetition interval")]
    PulseRepInterval,
    #[display("pulse train duration")]
    PulseTrainDuration,
    #[display("pulse train repetition interval")]
    PulseTrainRepInterval,
    #[display("pulse train repetition duration")]
    PulseTrainRepDuration,
}

/// An error produced by the timing plan.
#[derive(Error, Debug, PartialEq, Clone, Copy)]
#[allow(missing_docs)]
pub enum TimingError {
    #[error("The {0} must not be zero")]
    Zero(TimingField),
    #[error("Pulse duration ({pulse:?}) exceeds the pulse repetition interval ({interval:?})")]
    PulseLongerThanInterval { pulse: Duration, interval: Duration },
    #[error("Pulse train duration ({train:?}) exceeds the pulse train repetition interval ({interval:?})")]
    TrainLongerThanInterval { train: Duration, interval: Duration },
    #[error("Ramp duration ({ramp:?}) exceeds the pulse duration ({pulse:?})")]
    RampLongerThanPulse { ramp: Duration, pulse: Duration },
    #[error("Pulse train duration ({train:?}) is shorter than the pulse repetition interval ({interval:?})")]
    EmptyTrain { train: Duration, interval: Duration },
    #[error("Pulse train repetition duration ({duration:?}) is shorter than the pulse train repetition interval ({interval:?})")]
    EmptyRepetition {
        duration: Duration,
        interval: Duration,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn us(v: u64) -> Duration {
        Duration::from_micros(v)
    }

    #[test]
    fn default_plan() -> anyhow::Result<()> {
        let plan = Timing::default().plan()?;
        assert_eq!(1, plan.pulses_per_train());
        assert_eq!(us(199_800), plan.pulse_off());
        assert_eq!(1, plan.train_repetitions());
        assert_eq!(Duration::ZERO, plan.train_delay());
        Ok(())
    }

    #[rstest::rstest]
    #[case(5, ms(5), 3, ms(30), ms(5), ms(10), ms(50), ms(80), ms(250))]
    #[case(20, ms(30), 40, ms(1000), ms(20), ms(50), ms(1000), ms(2000), ms(80_000))]
    #[case(3, us(7_100), 2, ms(10), us(2_940), ms(10), ms(30), ms(40), ms(100))]
    #[allow(clippy::too_many_arguments)]
    fn plan(
        #[case] pulses_per_train: usize,
        #[case] pulse_off: Duration,
        #[case] train_repetitions: usize,
        #[case] train_delay: Duration,
        #[case] pulse_duration: Duration,
        #[case] pulse_rep_interval: Duration,
        #[case] pulse_train_duration: Duration,
        #[case] pulse_train_rep_interval: Duration,
        #[case] pulse_train_rep_duration: Duration,
    ) -> anyhow::Result<()> {
        let plan = Timing::default()
            .with_pulse_duration(pulse_duration)
            .with_pulse_rep_interval(pulse_rep_interval)
            .with_pulse_train_duration(pulse_train_duration)
            .with_pulse_train_rep_interval(pulse_train_rep_interval)
            .with_pulse_train_rep_duration(pulse_train_rep_duration)
            .plan()?;
        assert_eq!(pulses_per_train, plan.pulses_per_train());
        assert_eq!(pulse_off, plan.pulse_off());
        assert_eq!(train_repetitions, plan.train_repetitions());
        assert_eq!(train_delay, plan.train_delay());
        Ok(())
    }

    #[rstest::rstest]
    #[case(us(1_300), us(1_250))]
    #[case(us(1_300), us(1_299))]
    #[case(us(1_200), us(1_249))]
    #[case(Duration::ZERO, us(49))]
    fn rounding(#[case] expect: Duration, #[case] d: Duration) {
        assert_eq!(expect, round_to_tenth_ms(d));
    }

    #[rstest::rstest]
    #[case(TimingError::Zero(TimingField::PulseDuration), Timing::default().with_pulse_duration(Duration::ZERO))]
    #[case(TimingError::Zero(TimingField::PulseTrainRepDuration), Timing::default().with_pulse_train_rep_duration(Duration::ZERO))]
    #[case(
        TimingError::PulseLongerThanInterval { pulse: ms(30), interval: ms(20) },
        Timing::default().with_pulse_duration(ms(30)).with_pulse_rep_interval(ms(20))
    )]
    #[case(
        TimingError::TrainLongerThanInterval { train: ms(300), interval: ms(200) },
        Timing::default().with_pulse_train_duration(ms(300))
    )]
    #[case(
        TimingError::RampLongerThanPulse { ramp: ms(1), pulse: us(250) },
        Timing::default().with_ramp(RampShape::Linear, ms(1))
    )]
    #[case(
        TimingError::EmptyTrain { train: ms(100), interval: ms(200) },
        Timing::default().with_pulse_train_duration(ms(100))
    )]
    #[case(
        TimingError::EmptyRepetition { duration: ms(100), interval: ms(200) },
        Timing::default().with_pulse_train_rep_duration(ms(100))
    )]
    fn invalid(#[case] expect: TimingError, #[case] timing: Timing) {
        assert_eq!(Err(expect), timing.plan());
    }

    #[test]
    fn rectangular_ramp_is_not_checked() -> anyhow::Result<()> {
        Timing::default()
            .with_ramp(RampShape::Rectangular, ms(1))
            .plan()?;
        Ok(())
    }
}
