use fusds::prelude::*;

mod fixture;
mod igt;
mod sonic_concepts;

use fixture::*;

#[test]
fn catalog_builds_registry() -> anyhow::Result<()> {
    let registry = registry()?;

    assert_eq!(IGT_128, registry.default_driving_system()?.serial());
    assert_eq!(IMASONIC_10, registry.default_transducer()?.serial());
    assert_eq!(3, registry.active_driving_systems().count());
    assert_eq!(3, registry.active_transducers().count());
    assert!(registry.is_compatible(SC_4, CTX_250));
    assert!(!registry.is_compatible(SC_4, IMASONIC_10));

    let ds = registry.lookup_driving_system("105-010")?;
    assert_eq!(DrivingSystemKind::SonicConcepts, ds.kind());
    assert_eq!("COM8", ds.connection());
    assert!(!ds.active());

    let combination = registry
        .lookup_combination(IGT_128, IMASONIC_10)
        .ok_or(anyhow::anyhow!("combination not found"))?;
    assert!(combination.is_pressure_calibrated());
    assert!(!registry
        .lookup_combination(IGT_128, "IS_PCD15473_01001")
        .ok_or(anyhow::anyhow!("combination not found"))?
        .is_pressure_calibrated());
    assert!(registry.lookup_combination(IGT_32, IMASONIC_10).is_none());
    Ok(())
}

#[test]
fn catalog_with_gap_is_rejected() -> anyhow::Result<()> {
    let mut catalog = catalog()?;
    let combination = catalog.combinations.remove(0);
    let [low, high] = *combination.segments();
    catalog.combinations.push(EquipmentCombination::new(
        combination.driving_system().clone(),
        combination.transducer().clone(),
        combination.v2a(),
        combination.p2a(),
        [
            EqualizationSegment::new(FocusRange::closed(8.0, 17.7), low.poly()),
            high,
        ],
    )?);

    assert!(matches!(
        EquipmentRegistry::try_from(catalog),
        Err(EquipmentError::UncoveredFocusRange { .. })
    ));
    Ok(())
}

#[test]
fn catalog_with_unknown_transducer_is_rejected() -> anyhow::Result<()> {
    let mut catalog = catalog()?;
    catalog.transducers.retain(|t| t.serial() != IMASONIC_10);
    assert_eq!(
        Err(EquipmentError::TransducerNotFound(IMASONIC_10.to_owned())),
        EquipmentRegistry::try_from(catalog).map(|_| ())
    );
    Ok(())
}

#[test]
fn catalog_with_open_low_segment_is_rejected() {
    let json = include_str!("fixture/catalog.json").replacen(
        r#""low": 7.0, "high": 17.7, "low_inclusive": true"#,
        r#""low": 7.0, "high": 17.7, "low_inclusive": false"#,
        1,
    );
    let catalog: Catalog = serde_json::from_str(&json).unwrap();
    assert!(matches!(
        EquipmentRegistry::try_from(catalog),
        Err(EquipmentError::NonContiguousSegments(..))
    ));
}
