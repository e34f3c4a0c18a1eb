use thiserror::Error;

/// An error produced by the ramp envelope generator.
#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum RampError {
    /// The step resolution is zero.
    #[error("Ramp resolution must not be zero")]
    ZeroResolution,
    /// The step ceiling is zero.
    #[error("Maximum number of ramp steps must not be zero")]
    ZeroMaxSteps,
    /// The step ceiling does not fit the step counter of the generator.
    #[error("Maximum number of ramp steps ({0}) exceeds {max}", max = u32::MAX)]
    TooManySteps(usize),
}
