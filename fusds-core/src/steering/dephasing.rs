use crate::common::Angle;

use super::SteeringError;

const FULL_CYCLE_DEG: f64 = 360.0;

/// Deterministic phase overlay applied after steering.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dephasing {
    /// No overlay.
    #[default]
    None,
    /// Adds `δ * k` to the `k`-th element of each cycle of `round(360° / δ)` elements.
    ///
    /// `δ` must be in `(0°, 360°]`; zero is equivalent to [`Dephasing::None`].
    Cycle(Angle),
    /// Replaces the computed phases element by element.
    Override(Vec<Angle>),
}

impl Dephasing {
    /// Checks the overlay against the number of elements.
    pub fn validate(&self, elements: usize) -> Result<(), SteeringError> {
        match self {
            Self::None => Ok(()),
            Self::Cycle(delta) => cycle_len(*delta).map(|_| ()),
            Self::Override(phases) if phases.len() != elements => {
                Err(SteeringError::OverrideLengthMismatch {
                    actual: phases.len(),
                    elements,
                })
            }
            Self::Override(_) => Ok(()),
        }
    }

    /// Applies the overlay to the computed phases.
    ///
    /// Offsets are not wrapped into `[0°, 360°)`.
    pub fn apply(&self, mut phases: Vec<Angle>) -> Result<Vec<Angle>, SteeringError> {
        self.validate(phases.len())?;
        match self {
            Self::None => {}
            Self::Cycle(delta) => {
                if let Some(n) = cycle_len(*delta)? {
                    phases
                        .iter_mut()
                        .enumerate()
                        .for_each(|(i, p)| *p = *p + *delta * (i % n) as f64);
                }
            }
            Self::Override(overridden) => {
                tracing::info!("Phases are overridden: {:?}", overridden);
                phases.clone_from(overridden);
            }
        }
        Ok(phases)
    }
}

fn cycle_len(delta: Angle) -> Result<Option<usize>, SteeringError> {
    let degree = delta.degree();
    if degree == 0.0 {
        return Ok(None);
    }
    if !(degree > 0.0 && degree <= FULL_CYCLE_DEG + 1e-9) {
        return Err(SteeringError::DephasingOutOfRange(degree));
    }
    Ok(Some(((FULL_CYCLE_DEG / degree).round() as usize).max(1)))
}
