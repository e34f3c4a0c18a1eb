use std::collections::BTreeMap;

use crate::common::Angle;

use super::{Dephasing, SteeringError};

/// A provider of vendor steering phases per focal depth.
pub trait SteeringTable {
    /// Returns the phases at the focal depth in tenths of a millimeter.
    fn row(&self, focus_dmm: i64) -> Option<&[Angle]>;
}

/// Converts a focal depth \[mm\] into the row key of a [`SteeringTable`].
fn row_key(focus: f64) -> i64 {
    (focus * 10.0).round() as i64
}

/// An in-memory [`SteeringTable`].
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PhaseTable {
    rows: BTreeMap<i64, Vec<Angle>>,
}

impl PhaseTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row at the focal depth \[mm\], rounded to 0.1 mm.
    pub fn with_row(mut self, focus: f64, phases: impl IntoIterator<Item = Angle>) -> Self {
        self.rows.insert(row_key(focus), phases.into_iter().collect());
        self
    }
}

impl SteeringTable for PhaseTable {
    fn row(&self, focus_dmm: i64) -> Option<&[Angle]> {
        self.rows.get(&focus_dmm).map(Vec::as_slice)
    }
}

/// Steering by lookup in a [`SteeringTable`].
#[derive(Clone, PartialEq, Debug)]
pub struct TableSteering {
    focus: f64,
    channels: usize,
    dephasing: Dephasing,
}

impl TableSteering {
    /// Creates a new [`TableSteering`] at the focal depth \[mm\] for the number of channels.
    pub const fn new(focus: f64, channels: usize) -> Self {
        Self {
            focus,
            channels,
            dephasing: Dephasing::None,
        }
    }

    /// set dephasing overlay
    pub fn with_dephasing(self, dephasing: Dephasing) -> Self {
        Self { dephasing, ..self }
    }

    /// Looks up the phases of the first `channels` columns and applies the dephasing overlay.
    pub fn calc(&self, table: &impl SteeringTable) -> Result<Vec<Angle>, SteeringError> {
        let focus = row_key(self.focus) as f64 / 10.0;
        let row = table
            .row(row_key(self.focus))
            .ok_or(SteeringError::TableRowNotFound(focus))?;
        if row.len() < self.channels {
            return Err(SteeringError::TableRowTooShort {
                focus,
                actual: row.len(),
                channels: self.channels,
            });
        }
        let phases = self.dephasing.apply(row[..self.channels].to_vec())?;

        tracing::debug!("Phases from steering table at focus {} mm: {:?}", focus, phases);

        Ok(phases)
    }
}
