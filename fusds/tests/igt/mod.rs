use std::time::Duration;

use fusds::prelude::*;

use crate::fixture::*;

#[test]
fn pressure_to_recorder() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut seq = Sequence::new(registry.clone())?;
    seq.set_focus(40.0)?;
    seq.set_pressure(0.5)?;
    seq.set_timing(
        Timing::default()
            .with_pulse_duration(Duration::from_millis(20))
            .with_pulse_rep_interval(Duration::from_millis(50))
            .with_pulse_train_duration(Duration::from_millis(1000))
            .with_pulse_train_rep_interval(Duration::from_millis(2000))
            .with_pulse_train_rep_duration(Duration::from_millis(80_000))
            .with_ramp(RampShape::Linear, Duration::from_millis(10)),
    );
    seq.set_trigger(Trigger::new(TriggerMode::OnePulseTrainRepetition, 40));

    let mut driver = Recorder::new(DrivingSystemKind::Igt).with_elements(bowl());
    driver.connect(registry.lookup_driving_system(IGT_128)?)?;
    driver.send_sequence(&seq)?;
    driver.execute_sequence()?;
    driver.disconnect()?;

    let plan = driver
        .last_plan()
        .ok_or(anyhow::anyhow!("no plan recorded"))?;
    assert_eq!(Some(PowerKind::Pressure), plan.power().chosen());
    assert_eq!(Some(0.5), plan.power().pressure());

    let phases = plan
        .phases()
        .as_ref()
        .ok_or(anyhow::anyhow!("no phases"))?;
    assert_eq!(10, phases.len());
    phases.iter().for_each(|p| {
        approx::assert_abs_diff_eq!(phases[0].degree(), p.degree(), epsilon = 1e-6);
    });

    let ramp = plan.ramp().as_ref().ok_or(anyhow::anyhow!("no ramp"))?;
    assert_eq!(1023, ramp.len());
    assert_eq!(Some(&100), ramp.ramp_down().last());
    assert_eq!(Some(&0), ramp.ramp_up().last());

    assert_eq!(20, plan.timing().pulses_per_train());
    assert_eq!(Duration::from_millis(30), plan.timing().pulse_off());
    assert_eq!(40, plan.timing().train_repetitions());
    assert_eq!(Duration::from_millis(1000), plan.timing().train_delay());
    assert_eq!(40, plan.trigger().count());
    Ok(())
}

#[test]
fn equipment_round_trip_keeps_pressure() -> anyhow::Result<()> {
    let mut seq = Sequence::new(registry()?)?;
    seq.set_focus(30.0)?;
    seq.set_amplitude(40.0)?;
    let power = seq.power();

    seq.set_driving_system(IGT_32)?;
    assert_eq!(Some(PowerKind::Amplitude), seq.power().chosen());
    assert_eq!(None, seq.power().pressure());

    seq.set_driving_system(IGT_128)?;
    assert_eq!(Some(PowerKind::Amplitude), seq.power().chosen());
    approx::assert_abs_diff_eq!(
        power.amplitude().unwrap(),
        seq.power().amplitude().unwrap(),
        epsilon = 1e-9
    );
    approx::assert_abs_diff_eq!(
        power.pressure().unwrap(),
        seq.power().pressure().unwrap(),
        epsilon = 1e-9
    );
    Ok(())
}

#[test]
fn focus_sweep_keeps_chosen_kind() -> anyhow::Result<()> {
    let mut seq = Sequence::new(registry()?)?;
    seq.set_voltage(4.0)?;
    let pressure = seq.power().pressure().unwrap();

    let mut focus = seq.transducer().min_focus();
    while focus <= seq.transducer().max_focus() {
        seq.set_focus(focus)?;
        assert_eq!(Some(PowerKind::Voltage), seq.power().chosen());
        approx::assert_abs_diff_eq!(pressure, seq.power().pressure().unwrap(), epsilon = 1e-9);
        focus += 5.0;
    }
    Ok(())
}

#[test]
fn focus_rejected_when_held_pressure_exceeds_full_amplitude() -> anyhow::Result<()> {
    let mut seq = Sequence::new(registry()?)?;
    seq.set_voltage(12.0)?;
    let power = seq.power();

    assert!(matches!(
        seq.set_focus(17.7),
        Err(SequenceError::InvalidValue {
            field: Field::Amplitude,
            ..
        })
    ));
    assert_eq!(7.0, seq.focus());
    assert_eq!(power, seq.power());
    Ok(())
}

#[test]
fn dephased_phases() -> anyhow::Result<()> {
    let mut seq = Sequence::new(registry()?)?;
    seq.set_dephasing(Dephasing::Cycle(90.0 * deg))?;

    let phases = seq.phases(&bowl())?;
    let base = phases[0].degree();
    phases.iter().enumerate().for_each(|(i, p)| {
        approx::assert_abs_diff_eq!(base + 90.0 * (i % 4) as f64, p.degree(), epsilon = 1e-6);
    });
    Ok(())
}
