use fusds_core::{
    equipment::{DrivingSystemKind, DrivingSystemSpec},
    geometry::ElementArray,
};

use super::{Driver, DriverError, SequencePlan};
use crate::Sequence;

/// A [`Driver`] that records the sequences sent to it instead of talking to hardware.
#[derive(Debug)]
pub struct Recorder {
    kind: DrivingSystemKind,
    elements: Option<ElementArray>,
    connected: Option<String>,
    plans: Vec<SequencePlan>,
    executions: usize,
}

impl Recorder {
    /// Creates a new [`Recorder`] for a family of driving systems.
    pub const fn new(kind: DrivingSystemKind) -> Self {
        Self {
            kind,
            elements: None,
            connected: None,
            plans: Vec::new(),
            executions: 0,
        }
    }

    /// Sets the element geometry used to calculate phases.
    pub fn with_elements(self, elements: ElementArray) -> Self {
        Self {
            elements: Some(elements),
            ..self
        }
    }

    /// Serial of the connected driving system.
    pub fn connected(&self) -> Option<&str> {
        self.connected.as_deref()
    }

    /// Plans sent since the last connection, ordered by buffer index.
    pub fn plans(&self) -> &[SequencePlan] {
        &self.plans
    }

    /// The most recently sent plan.
    pub fn last_plan(&self) -> Option<&SequencePlan> {
        self.plans.last()
    }

    /// Number of executions.
    pub const fn executions(&self) -> usize {
        self.executions
    }

    fn ensure_connected(&self) -> Result<&str, DriverError> {
        self.connected()
            .ok_or_else(|| DriverError::new("Driver is not connected".to_owned()))
    }
}

impl Driver for Recorder {
    fn kind(&self) -> DrivingSystemKind {
        self.kind
    }

    fn connect(&mut self, driving_system: &DrivingSystemSpec) -> Result<(), DriverError> {
        if driving_system.kind() != self.kind {
            return Err(DriverError::new(format!(
                "{} driver cannot connect to {} driving system ({})",
                self.kind,
                driving_system.kind(),
                driving_system.serial()
            )));
        }
        tracing::info!(
            "Connected to {} [{}]",
            driving_system.name(),
            driving_system.serial()
        );
        self.connected = Some(driving_system.serial().clone());
        self.plans.clear();
        Ok(())
    }

    fn send_sequence(&mut self, sequence: &Sequence) -> Result<(), DriverError> {
        let serial = self.ensure_connected()?;
        if sequence.driving_system().serial() != serial {
            return Err(DriverError::new(format!(
                "Sequence {} is set up for {}, but {} is connected",
                sequence.seq_number(),
                sequence.driving_system().serial(),
                serial
            )));
        }
        let plan = SequencePlan::new(sequence, self.elements.as_ref())
            .map_err(|e| DriverError::new(e.to_string()))?;
        tracing::debug!("Sequence {} sent: {:?}", plan.seq_number(), plan);

        match self
            .plans
            .binary_search_by_key(&plan.seq_number(), SequencePlan::seq_number)
        {
            Ok(i) => self.plans[i] = plan,
            Err(i) => self.plans.insert(i, plan),
        }
        Ok(())
    }

    fn execute_sequence(&mut self) -> Result<(), DriverError> {
        self.ensure_connected()?;
        if self.plans.is_empty() {
            return Err(DriverError::new("No sequence has been sent".to_owned()));
        }
        self.executions += 1;
        tracing::info!("Executing {} sequence(s)", self.plans.len());
        Ok(())
    }

    fn disconnect(&mut self) -> Result<(), DriverError> {
        if let Some(serial) = self.connected.take() {
            tracing::info!("Disconnected from {}", serial);
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected.is_some()
    }
}
