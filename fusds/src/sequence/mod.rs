mod error;
mod power;
mod timing;
mod trigger;
mod update;

use std::{fmt, sync::Arc};

pub use error::SequenceError;
pub use power::{Power, PowerKind};
pub use timing::{Timing, TimingError, TimingField, TimingPlan};
pub use trigger::{Trigger, TriggerMode};
pub use update::{Field, SequenceWarning, Update};

use fusds_core::{
    common::{Angle, Freq, PERCENT_MAX},
    equipment::{DrivingSystemSpec, EquipmentCombination, EquipmentRegistry, TransducerSpec},
    geometry::ElementArray,
    ramp::RampEnvelope,
    steering::{Dephasing, Focus, SteeringTable, TableSteering},
};
use getset::{CopyGetters, Getters};

/// Parameters of a sonication sequence.
///
/// The intensity is set through exactly one [`PowerKind`]; every other representation is derived
/// from it through the calibration of the selected equipment. Each setter is transactional: on
/// error the sequence is left untouched.
#[derive(Clone, Debug, Getters, CopyGetters)]
pub struct Sequence {
    /// The registry the equipment is selected from.
    #[getset(get = "pub")]
    registry: Arc<EquipmentRegistry>,
    /// Buffer index used by drivers holding multiple sequences.
    #[getset(get_copy = "pub")]
    seq_number: usize,
    /// Selected driving system.
    #[getset(get = "pub")]
    driving_system: DrivingSystemSpec,
    /// Selected transducer.
    #[getset(get = "pub")]
    transducer: TransducerSpec,
    /// Calibration of the selected equipment, if registered.
    #[getset(get = "pub")]
    combination: Option<EquipmentCombination>,
    /// Operating frequency.
    #[getset(get_copy = "pub")]
    oper_freq: Freq,
    /// Focus w.r.t. the exit plane \[mm\].
    #[getset(get_copy = "pub")]
    focus: f64,
    /// Intensity.
    #[getset(get_copy = "pub")]
    power: Power,
    /// Dephasing overlay.
    #[getset(get = "pub")]
    dephasing: Dephasing,
    /// Pulse timing.
    #[getset(get_copy = "pub")]
    timing: Timing,
    /// Trigger settings.
    #[getset(get_copy = "pub")]
    trigger: Trigger,
}

impl Sequence {
    /// Creates a new [`Sequence`] with the first active driving system and transducer.
    ///
    /// The operating frequency is the fundamental frequency of the transducer and the focus is its
    /// minimum focus. No intensity is set.
    pub fn new(registry: Arc<EquipmentRegistry>) -> Result<Self, SequenceError> {
        let driving_system = registry.default_driving_system()?.clone();
        let transducer = registry.default_transducer()?.clone();
        let combination = registry
            .lookup_combination(driving_system.serial(), transducer.serial())
            .cloned();
        if !registry.is_compatible(driving_system.serial(), transducer.serial()) {
            tracing::warn!(
                "{}",
                SequenceWarning::IncompatibleEquipment {
                    driving_system: driving_system.serial().clone(),
                    transducer: transducer.serial().clone(),
                }
            );
        }
        Ok(Self {
            oper_freq: transducer.fund_freq(),
            focus: transducer.min_focus(),
            registry,
            seq_number: 0,
            driving_system,
            transducer,
            combination,
            power: Power::UNSET,
            dephasing: Dephasing::None,
            timing: Timing::default(),
            trigger: Trigger::default(),
        })
    }

    /// Sets the buffer index.
    pub fn with_seq_number(self, seq_number: usize) -> Self {
        Self { seq_number, ..self }
    }

    /// Focus w.r.t. the bowl center \[mm\].
    pub fn focus_wrt_bowl(&self) -> f64 {
        self.transducer.focus_wrt_bowl(self.focus)
    }

    /// Selects a driving system and recomputes the intensity.
    pub fn set_driving_system(&mut self, serial: &str) -> Result<Update, SequenceError> {
        let driving_system = self.registry.lookup_driving_system(serial)?.clone();
        self.transition(|seq, warnings| {
            seq.driving_system = driving_system;
            seq.resolve_equipment(warnings)
        })
    }

    /// Selects a transducer and recomputes the intensity.
    ///
    /// The operating frequency is reset to the fundamental frequency of the transducer and the
    /// focus to its minimum focus.
    pub fn set_transducer(&mut self, serial: &str) -> Result<Update, SequenceError> {
        let transducer = self.registry.lookup_transducer(serial)?.clone();
        self.transition(|seq, warnings| {
            seq.oper_freq = transducer.fund_freq();
            seq.focus = transducer.min_focus();
            seq.transducer = transducer;
            if let Dephasing::Override(phases) = &seq.dephasing {
                if phases.len() != seq.transducer.elements() {
                    warnings.push(SequenceWarning::DephasingDropped {
                        actual: phases.len(),
                        elements: seq.transducer.elements(),
                    });
                    seq.dephasing = Dephasing::None;
                }
            }
            seq.resolve_equipment(warnings)
        })
    }

    /// Sets the operating frequency.
    pub fn set_oper_freq(&mut self, oper_freq: Freq) -> Result<Update, SequenceError> {
        if !oper_freq.is_valid() {
            return Err(SequenceError::InvalidValue {
                field: Field::OperatingFrequency,
                value: oper_freq.hz(),
            });
        }
        self.transition(|seq, _| {
            seq.oper_freq = oper_freq;
            Ok(())
        })
    }

    /// Sets the focus w.r.t. the exit plane \[mm\].
    ///
    /// The pressure is held constant and the voltage and amplitude are recomputed.
    pub fn set_focus(&mut self, focus: f64) -> Result<Update, SequenceError> {
        if !self.transducer.is_focus_in_range(focus) {
            return Err(SequenceError::FocusOutOfRange {
                focus,
                min: self.transducer.min_focus(),
                max: self.transducer.max_focus(),
            });
        }
        self.transition(|seq, warnings| {
            seq.focus = focus;
            seq.recompute_power(warnings)
        })
    }

    /// Sets the global power \[W\]. Only Sonic Concepts driving systems accept it.
    pub fn set_global_power(&mut self, global_power: f64) -> Result<Update, SequenceError> {
        self.set_power(PowerKind::GlobalPower, global_power)
    }

    /// Sets the maximum pressure in free water \[MPa\]. Only IGT driving systems with a
    /// pressure calibration accept it.
    pub fn set_pressure(&mut self, pressure: f64) -> Result<Update, SequenceError> {
        self.set_power(PowerKind::Pressure, pressure)
    }

    /// Sets the voltage \[V\]. Only IGT driving systems with a calibration accept it.
    pub fn set_voltage(&mut self, voltage: f64) -> Result<Update, SequenceError> {
        self.set_power(PowerKind::Voltage, voltage)
    }

    /// Sets the generator amplitude \[%\]. Only IGT driving systems accept it.
    ///
    /// Without a calibration only the amplitude is stored.
    pub fn set_amplitude(&mut self, amplitude: f64) -> Result<Update, SequenceError> {
        self.set_power(PowerKind::Amplitude, amplitude)
    }

    /// Sets the dephasing overlay.
    pub fn set_dephasing(&mut self, dephasing: Dephasing) -> Result<Update, SequenceError> {
        dephasing.validate(self.transducer.elements())?;
        self.transition(|seq, _| {
            seq.dephasing = dephasing;
            Ok(())
        })
    }

    /// Sets the pulse timing.
    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    /// Sets the trigger.
    pub fn set_trigger(&mut self, trigger: Trigger) {
        self.trigger = trigger;
    }

    /// Calculates the phases of the elements with the time-of-flight model.
    pub fn phases(&self, elements: &ElementArray) -> Result<Vec<Angle>, SequenceError> {
        Ok(
            Focus::on_axis(self.transducer.natural_focus(), self.focus_wrt_bowl())
                .with_dephasing(self.dephasing.clone())
                .calc(elements, &[self.oper_freq])?,
        )
    }

    /// Looks up the phases of the elements in a vendor steering table.
    ///
    /// One column is taken per transducer element, not per channel of the driving system, so a
    /// driving system with spare channels never reads past the transducer's columns.
    pub fn table_phases(&self, table: &impl SteeringTable) -> Result<Vec<Angle>, SequenceError> {
        Ok(TableSteering::new(self.focus, self.transducer.elements())
            .with_dephasing(self.dephasing.clone())
            .calc(table)?)
    }

    /// Calculates the ramp envelope of a pulse.
    pub fn ramp_envelope(&self) -> Result<Option<RampEnvelope>, SequenceError> {
        Ok(self.timing.ramp().calc()?)
    }

    /// Derives the repetition counts and delays.
    pub fn timing_plan(&self) -> Result<TimingPlan, SequenceError> {
        Ok(self.timing.plan()?)
    }

    fn set_power(&mut self, kind: PowerKind, value: f64) -> Result<Update, SequenceError> {
        let max = if kind == PowerKind::Amplitude {
            PERCENT_MAX
        } else {
            f64::INFINITY
        };
        if !(value.is_finite() && (0.0..=max).contains(&value)) {
            return Err(SequenceError::InvalidValue {
                field: kind.into(),
                value,
            });
        }
        self.transition(|seq, warnings| {
            if let Some(power) = seq.derive_power(kind, value, warnings)? {
                seq.power = power;
            }
            Ok(())
        })
    }

    fn transition(
        &mut self,
        f: impl FnOnce(&mut Self, &mut Vec<SequenceWarning>) -> Result<(), SequenceError>,
    ) -> Result<Update, SequenceError> {
        let mut next = self.clone();
        let mut warnings = Vec::new();
        f(&mut next, &mut warnings)?;

        warnings.iter().for_each(|w| tracing::warn!("{}", w));
        let update = diff(self, &next, warnings);
        if !update.is_unchanged() {
            tracing::info!(
                "Sequence {} updated: {:?}, unset: {:?}",
                next.seq_number,
                update.recomputed(),
                update.invalidated()
            );
        }

        *self = next;
        Ok(update)
    }

    fn resolve_equipment(&mut self, warnings: &mut Vec<SequenceWarning>) -> Result<(), SequenceError> {
        let (ds, tran) = (self.driving_system.serial(), self.transducer.serial());
        self.combination = self.registry.lookup_combination(ds, tran).cloned();
        if !self.registry.is_compatible(ds, tran) {
            warnings.push(SequenceWarning::IncompatibleEquipment {
                driving_system: ds.clone(),
                transducer: tran.clone(),
            });
        }
        self.recompute_power(warnings)
    }

    /// Recomputes the intensity after a change of focus or equipment.
    ///
    /// A known pressure is the held quantity; otherwise the chosen representation is the source.
    /// Fails if the held pressure needs an amplitude outside `[0, 100]` %.
    fn recompute_power(&mut self, warnings: &mut Vec<SequenceWarning>) -> Result<(), SequenceError> {
        let Some((chosen, value)) = self.power.chosen_value() else {
            self.power = Power::UNSET;
            return Ok(());
        };

        let held = match self.power.pressure() {
            Some(pressure) if chosen != PowerKind::GlobalPower => self
                .derive_power(PowerKind::Pressure, pressure, &mut Vec::new())?
                .map(|p| p.with_chosen(chosen)),
            _ => None,
        };
        let derived = match held {
            Some(p) => Some(p),
            None => self.derive_power(chosen, value, warnings)?,
        };

        self.power = derived.unwrap_or_else(|| {
            warnings.push(SequenceWarning::PowerUnset(chosen));
            Power::UNSET
        });
        Ok(())
    }

    /// Derives every representation from `value` of `kind`.
    ///
    /// Returns `None` if the selected equipment cannot express `kind`, and an error if the derived
    /// amplitude leaves `[0, 100]` %.
    fn derive_power(
        &self,
        kind: PowerKind,
        value: f64,
        warnings: &mut Vec<SequenceWarning>,
    ) -> Result<Option<Power>, SequenceError> {
        let ds_kind = self.driving_system.kind();
        if !kind.is_supported_by(ds_kind) {
            warnings.push(SequenceWarning::UnsupportedPower {
                power: kind,
                kind: ds_kind,
            });
            return Ok(None);
        }

        let combination = match (kind, &self.combination) {
            (PowerKind::GlobalPower, _) => return Ok(Some(Power::global(value))),
            (_, Some(combination)) => combination,
            (_, None) => {
                warnings.push(SequenceWarning::NoCombination {
                    driving_system: self.driving_system.serial().clone(),
                    transducer: self.transducer.serial().clone(),
                });
                return Ok((kind == PowerKind::Amplitude)
                    .then(|| Power::igt(kind, None, None, Some(value))));
            }
        };

        let (pressure, voltage, amplitude) = match kind {
            PowerKind::Pressure => {
                if !combination.is_pressure_calibrated() {
                    warnings.push(self.uncalibrated());
                    return Ok(None);
                }
                let amplitude = combination.amplitude_from_pressure(value, self.focus)?;
                (
                    Some(value),
                    combination.voltage_from_amplitude(amplitude)?,
                    amplitude,
                )
            }
            PowerKind::Voltage => {
                let amplitude = combination.amplitude_from_voltage(value);
                (
                    self.pressure_from(combination, amplitude, warnings)?,
                    value,
                    amplitude,
                )
            }
            _ => (
                self.pressure_from(combination, value, warnings)?,
                combination.voltage_from_amplitude(value)?,
                value,
            ),
        };

        if !(0.0..=PERCENT_MAX).contains(&amplitude) {
            return Err(SequenceError::InvalidValue {
                field: Field::Amplitude,
                value: amplitude,
            });
        }

        tracing::debug!(
            "Derived from {} = {}: pressure {:?} MPa, voltage {} V, amplitude {} %",
            kind,
            value,
            pressure,
            voltage,
            amplitude
        );

        Ok(Some(Power::igt(
            kind,
            pressure,
            Some(voltage),
            Some(amplitude),
        )))
    }

    fn pressure_from(
        &self,
        combination: &EquipmentCombination,
        amplitude: f64,
        warnings: &mut Vec<SequenceWarning>,
    ) -> Result<Option<f64>, SequenceError> {
        if !combination.is_pressure_calibrated() {
            warnings.push(self.uncalibrated());
            return Ok(None);
        }
        Ok(Some(
            combination.pressure_from_amplitude(amplitude, self.focus)?,
        ))
    }

    fn uncalibrated(&self) -> SequenceWarning {
        SequenceWarning::PressureUncalibrated {
            driving_system: self.driving_system.serial().clone(),
            transducer: self.transducer.serial().clone(),
        }
    }
}

fn diff(old: &Sequence, new: &Sequence, warnings: Vec<SequenceWarning>) -> Update {
    let mut update = Update::new(warnings);
    update.track(
        Field::DrivingSystem,
        old.driving_system.serial() != new.driving_system.serial(),
        true,
    );
    update.track(
        Field::Transducer,
        old.transducer.serial() != new.transducer.serial(),
        true,
    );
    update.track(
        Field::OperatingFrequency,
        old.oper_freq != new.oper_freq,
        true,
    );
    update.track(Field::Focus, old.focus != new.focus, true);
    update.track(
        Field::ChosenPower,
        old.power.chosen() != new.power.chosen(),
        new.power.chosen().is_some(),
    );
    [
        PowerKind::GlobalPower,
        PowerKind::Pressure,
        PowerKind::Voltage,
        PowerKind::Amplitude,
    ]
    .into_iter()
    .for_each(|kind| {
        let (o, n) = (old.power.get(kind), new.power.get(kind));
        update.track(kind.into(), o != n, n.is_some());
    });
    update.track(Field::Dephasing, old.dephasing != new.dephasing, true);
    update
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map_or_else(|| "-".to_owned(), |v| format!("{v:.3}"))
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sequence {}", self.seq_number)?;
        writeln!(
            f,
            "Driving system: {} [{}]",
            self.driving_system.name(),
            self.driving_system.serial()
        )?;
        writeln!(
            f,
            "Transducer: {} [{}]",
            self.transducer.name(),
            self.transducer.serial()
        )?;
        writeln!(f, "Operating frequency [kHz]: {}", self.oper_freq.khz())?;
        writeln!(
            f,
            "Focal depth [mm]: {} (w.r.t. bowl: {})",
            self.focus,
            self.focus_wrt_bowl()
        )?;
        match self.power.chosen() {
            Some(kind) => writeln!(f, "Chosen power: {kind}")?,
            None => writeln!(f, "Chosen power: -")?,
        }
        writeln!(f, "Global power [W]: {}", fmt_opt(self.power.global_power()))?;
        writeln!(f, "Pressure [MPa]: {}", fmt_opt(self.power.pressure()))?;
        writeln!(f, "Voltage [V]: {}", fmt_opt(self.power.voltage()))?;
        writeln!(f, "Amplitude [%]: {}", fmt_opt(self.power.amplitude()))?;
        writeln!(f, "Dephasing: {:?}", self.dephasing)?;
        writeln!(
            f,
            "Pulse duration: {:?}, pulse repetition interval: {:?}",
            self.timing.pulse_duration(),
            self.timing.pulse_rep_interval()
        )?;
        writeln!(
            f,
            "Pulse train duration: {:?}, pulse train repetition interval: {:?}, repetition duration: {:?}",
            self.timing.pulse_train_duration(),
            self.timing.pulse_train_rep_interval(),
            self.timing.pulse_train_rep_duration()
        )?;
        writeln!(
            f,
            "Ramp: {} ({:?})",
            self.timing.ramp_shape(),
            self.timing.ramp_duration()
        )?;
        write!(
            f,
            "Trigger: {} (count: {})",
            self.trigger.mode(),
            self.trigger.count()
        )
    }
}
