mod angle;
mod freq;

use std::time::Duration;

pub use std::f64::consts::PI;

pub use angle::*;
pub use freq::*;

/// meter
pub const METER: f64 = 1.0;

/// millimeter
pub const MILLIMETER: f64 = METER / 1000.0;

/// \[㎜\]
#[allow(non_upper_case_globals)]
pub const mm: f64 = MILLIMETER;

/// The speed of sound in water in \[m/s\]
pub const SOUND_SPEED_WATER: f64 = 1500.0 * METER;

/// The finest temporal step of a pulse ramp supported by IGT generators.
pub const RAMP_RESOLUTION_MIN: Duration = Duration::from_micros(5);

/// The maximum number of steps of a pulse ramp supported by IGT generators.
pub const RAMP_STEPS_MAX: usize = 1023;

/// The maximum percentage used for amplitude and attenuation values.
pub const PERCENT_MAX: f64 = 100.0;

/// Default pulse duration.
pub const DEFAULT_PULSE_DURATION: Duration = Duration::from_micros(250);

/// Default pulse repetition interval.
pub const DEFAULT_PULSE_REP_INTERVAL: Duration = Duration::from_millis(200);

/// Default pulse train duration.
pub const DEFAULT_PULSE_TRAIN_DURATION: Duration = Duration::from_millis(200);

/// Default pulse train repetition interval.
pub const DEFAULT_PULSE_TRAIN_REP_INTERVAL: Duration = Duration::from_millis(200);

/// Default pulse train repetition block duration.
pub const DEFAULT_PULSE_TRAIN_REP_DURATION: Duration = Duration::from_millis(200);
