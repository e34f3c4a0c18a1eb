use fusds::prelude::*;

use crate::fixture::*;

#[test]
fn global_power_to_recorder() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut seq = Sequence::new(registry.clone())?;
    seq.set_driving_system(SC_4)?;
    let update = seq.set_transducer(CTX_250)?;
    assert!(update.warnings().is_empty());
    assert_eq!(15.9, seq.focus());
    assert!(seq.combination().is_none());

    let update = seq.set_amplitude(20.0)?;
    assert_eq!(1, update.warnings().len());
    assert_eq!(None, seq.power().amplitude());

    seq.set_global_power(12.5)?;
    assert_eq!(Some(12.5), seq.power().global_power());

    let mut driver = Recorder::new(DrivingSystemKind::SonicConcepts);
    assert!(driver
        .connect(registry.lookup_driving_system(IGT_128)?)
        .is_err());
    driver.connect(registry.lookup_driving_system(SC_4)?)?;
    driver.send_sequence(&seq)?;
    driver.execute_sequence()?;

    let plan = driver
        .last_plan()
        .ok_or(anyhow::anyhow!("no plan recorded"))?;
    assert_eq!(Some(PowerKind::GlobalPower), plan.power().chosen());
    assert_eq!(None, plan.phases().as_ref());
    assert_eq!(None, plan.ramp().as_ref());
    Ok(())
}

#[test]
fn table_steering() -> anyhow::Result<()> {
    let mut seq = Sequence::new(registry()?)?;
    seq.set_driving_system(SC_4)?;
    seq.set_transducer(CTX_250)?;
    seq.set_focus(20.04)?;

    let table = PhaseTable::new()
        .with_row(15.9, [0.0 * deg, 0.0 * deg, 0.0 * deg, 0.0 * deg])
        .with_row(20.0, [0.0 * deg, 120.0 * deg, 240.0 * deg, 0.0 * deg]);
    let phases = seq.table_phases(&table)?;
    assert_eq!(vec![0.0 * deg, 120.0 * deg], phases);

    seq.set_focus(30.0)?;
    assert_eq!(
        Err(SequenceError::Steering(SteeringError::TableRowNotFound(30.0))),
        seq.table_phases(&table)
    );
    Ok(())
}
