use std::collections::{HashMap, HashSet};

use super::{DrivingSystemSpec, EquipmentCombination, EquipmentError, TransducerSpec};

/// Read-only registry of driving systems, transducers and their calibration records.
///
/// Records keep their registration order, so the first active record is the default.
#[derive(Clone, Debug, Default)]
pub struct EquipmentRegistry {
    driving_systems: Vec<DrivingSystemSpec>,
    transducers: Vec<TransducerSpec>,
    ds_index: HashMap<String, usize>,
    tran_index: HashMap<String, usize>,
    combinations: HashMap<(String, String), EquipmentCombination>,
}

impl EquipmentRegistry {
    /// Creates a new [`EquipmentRegistryBuilder`].
    pub fn builder() -> EquipmentRegistryBuilder {
        EquipmentRegistryBuilder::default()
    }

    /// Looks up a driving system by serial.
    pub fn lookup_driving_system(&self, serial: &str) -> Result<&DrivingSystemSpec, EquipmentError> {
        self.ds_index
            .get(serial)
            .map(|&i| &self.driving_systems[i])
            .ok_or_else(|| EquipmentError::DrivingSystemNotFound(serial.to_owned()))
    }

    /// Looks up a transducer by serial.
    pub fn lookup_transducer(&self, serial: &str) -> Result<&TransducerSpec, EquipmentError> {
        self.tran_index
            .get(serial)
            .map(|&i| &self.transducers[i])
            .ok_or_else(|| EquipmentError::TransducerNotFound(serial.to_owned()))
    }

    /// Looks up the calibration record of a driving system and transducer pair.
    pub fn lookup_combination(
        &self,
        driving_system: &str,
        transducer: &str,
    ) -> Option<&EquipmentCombination> {
        self.combinations
            .get(&(driving_system.to_owned(), transducer.to_owned()))
    }

    /// Returns the active driving systems in registration order.
    pub fn active_driving_systems(&self) -> impl Iterator<Item = &DrivingSystemSpec> {
        self.driving_systems.iter().filter(|ds| ds.active())
    }

    /// Returns the active transducers in registration order.
    pub fn active_transducers(&self) -> impl Iterator<Item = &TransducerSpec> {
        self.transducers.iter().filter(|tran| tran.active())
    }

    /// Returns the first active driving system.
    pub fn default_driving_system(&self) -> Result<&DrivingSystemSpec, EquipmentError> {
        self.active_driving_systems()
            .next()
            .ok_or(EquipmentError::NoActiveDrivingSystem)
    }

    /// Returns the first active transducer.
    pub fn default_transducer(&self) -> Result<&TransducerSpec, EquipmentError> {
        self.active_transducers()
            .next()
            .ok_or(EquipmentError::NoActiveTransducer)
    }

    /// Checks whether the driving system lists the transducer as compatible.
    pub fn is_compatible(&self, driving_system: &str, transducer: &str) -> bool {
        self.lookup_driving_system(driving_system)
            .is_ok_and(|ds| ds.is_compatible_with(transducer))
    }
}

/// Builder of [`EquipmentRegistry`].
#[derive(Clone, Debug, Default)]
pub struct EquipmentRegistryBuilder {
    driving_systems: Vec<DrivingSystemSpec>,
    transducers: Vec<TransducerSpec>,
    combinations: Vec<EquipmentCombination>,
}

impl EquipmentRegistryBuilder {
    /// Adds a driving system.
    pub fn driving_system(mut self, ds: DrivingSystemSpec) -> Self {
        self.driving_systems.push(ds);
        self
    }

    /// Adds a transducer.
    pub fn transducer(mut self, tran: TransducerSpec) -> Self {
        self.transducers.push(tran);
        self
    }

    /// Adds a calibration record.
    pub fn combination(mut self, combination: EquipmentCombination) -> Self {
        self.combinations.push(combination);
        self
    }

    /// Validates the records and builds the registry.
    ///
    /// # Errors
    ///
    /// Fails if a serial is registered twice, a combination refers to an unknown record, or the
    /// equalization segments of a combination are not contiguous or do not cover the focus range
    /// of the transducer.
    pub fn build(self) -> Result<EquipmentRegistry, EquipmentError> {
        let ds_index = index(self.driving_systems.iter().map(|ds| ds.serial()))?;
        let tran_index = index(self.transducers.iter().map(|tran| tran.serial()))?;

        if let Some(tran) = self
            .transducers
            .iter()
            .find(|tran| !tran.has_valid_focus_range())
        {
            return Err(EquipmentError::InvalidFocusRange(
                tran.serial().clone(),
                tran.min_focus(),
                tran.max_focus(),
            ));
        }

        let mut combinations = HashMap::with_capacity(self.combinations.len());
        for combination in self.combinations {
            if !ds_index.contains_key(combination.driving_system()) {
                return Err(EquipmentError::DrivingSystemNotFound(
                    combination.driving_system().clone(),
                ));
            }
            let tran = tran_index
                .get(combination.transducer())
                .map(|&i| &self.transducers[i])
                .ok_or_else(|| {
                    EquipmentError::TransducerNotFound(combination.transducer().clone())
                })?;
            combination.validate_segments()?;

            let (covered_low, covered_high) = combination.covered_focus_range();
            if covered_low > tran.min_focus() || covered_high < tran.max_focus() {
                return Err(EquipmentError::UncoveredFocusRange {
                    transducer: tran.serial().clone(),
                    covered_low,
                    covered_high,
                    min_focus: tran.min_focus(),
                    max_focus: tran.max_focus(),
                });
            }

            let key = (
                combination.driving_system().clone(),
                combination.transducer().clone(),
            );
            if combinations.contains_key(&key) {
                return Err(EquipmentError::DuplicateCombination(key.0, key.1));
            }
            combinations.insert(key, combination);
        }

        tracing::debug!(
            "Equipment registry built: {} driving systems, {} transducers, {} combinations",
            self.driving_systems.len(),
            self.transducers.len(),
            combinations.len()
        );

        Ok(EquipmentRegistry {
            driving_systems: self.driving_systems,
            transducers: self.transducers,
            ds_index,
            tran_index,
            combinations,
        })
    }
}

fn index<'a>(
    serials: impl IntoIterator<Item = &'a String>,
) -> Result<HashMap<String, usize>, EquipmentError> {
    let mut seen = HashSet::new();
    serials
        .into_iter()
        .enumerate()
        .map(|(i, serial)| {
            if !seen.insert(serial) {
                return Err(EquipmentError::DuplicateSerial(serial.clone()));
            }
            Ok((serial.clone(), i))
        })
        .collect()
}

/// Equipment catalog as handed over by a catalog loader.
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    /// Driving systems.
    #[serde(default)]
    pub driving_systems: Vec<DrivingSystemSpec>,
    /// Transducers.
    #[serde(default)]
    pub transducers: Vec<TransducerSpec>,
    /// Calibration records.
    #[serde(default)]
    pub combinations: Vec<EquipmentCombination>,
}

#[cfg(feature = "serde")]
impl TryFrom<Catalog> for EquipmentRegistry {
    type Error = EquipmentError;

    fn try_from(catalog: Catalog) -> Result<Self, Self::Error> {
        let Catalog {
            driving_systems,
            transducers,
            combinations,
        } = catalog;
        EquipmentRegistryBuilder {
            driving_systems,
            transducers,
            combinations,
        }
        .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        calibration::{EqualizationSegment, FocusRange, LinearLaw, Quintic},
        common::kHz,
        equipment::DrivingSystemKind,
    };

    fn igt() -> DrivingSystemSpec {
        DrivingSystemSpec::new(
            "IGT-128-ch_comb_2x10-ch",
            "IGT 128 ch. combined 2x10 ch.",
            DrivingSystemKind::Igt,
            20,
            "",
        )
        .with_transducers(["IS_PCD15287_01001"])
    }

    fn sc() -> DrivingSystemSpec {
        DrivingSystemSpec::new(
            "203-035",
            "Sonic Concepts 4 ch. [203-035]",
            DrivingSystemKind::SonicConcepts,
            4,
            "COM7",
        )
        .with_transducers(["CTX-250-009"])
    }

    fn imasonic() -> TransducerSpec {
        TransducerSpec::new("IS_PCD15287_01001", "Imasonic 10 ch.", "Imasonic", 10, 300. * kHz)
            .with_geometry(75.0, 9.7)
            .with_focus_range(7.0, 92.0)
    }

    fn ctx() -> TransducerSpec {
        TransducerSpec::new("CTX-250-009", "CTX-250 2 ch.", "Sonic Concepts", 2, 250. * kHz)
            .with_focus_range(15.9, 46.0)
    }

    fn combination(low: f64, boundary: f64, high: f64) -> EquipmentCombination {
        let poly = Quintic::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        EquipmentCombination::new(
            "IGT-128-ch_comb_2x10-ch",
            "IS_PCD15287_01001",
            LinearLaw::new(6.1122, -0.4917),
            LinearLaw::new(8.34e-5, -3.79e-2),
            [
                EqualizationSegment::new(FocusRange::closed(low, boundary), poly),
                EqualizationSegment::new(FocusRange::left_open(boundary, high), poly),
            ],
        )
        .unwrap()
    }

    fn registry() -> EquipmentRegistry {
        EquipmentRegistry::builder()
            .driving_system(igt().with_active(false))
            .driving_system(sc())
            .transducer(imasonic())
            .transducer(ctx())
            .combination(combination(7.0, 17.7, 92.0))
            .build()
            .unwrap()
    }

    #[test]
    fn lookup() -> anyhow::Result<()> {
        let registry = registry();
        assert_eq!(&sc(), registry.lookup_driving_system("203-035")?);
        assert_eq!(&ctx(), registry.lookup_transducer("CTX-250-009")?);
        assert!(registry
            .lookup_combination("IGT-128-ch_comb_2x10-ch", "IS_PCD15287_01001")
            .is_some());
        assert!(registry
            .lookup_combination("203-035", "CTX-250-009")
            .is_none());
        Ok(())
    }

    #[test]
    fn lookup_not_found() {
        let registry = registry();
        assert_eq!(
            Err(EquipmentError::DrivingSystemNotFound("105-010".to_owned())),
            registry.lookup_driving_system("105-010")
        );
        assert_eq!(
            Err(EquipmentError::TransducerNotFound("CTX-500-001".to_owned())),
            registry.lookup_transducer("CTX-500-001")
        );
    }

    #[test]
    fn defaults() -> anyhow::Result<()> {
        let registry = registry();
        assert_eq!(
            "IGT-128-ch_comb_2x10-ch",
            registry.default_driving_system()?.serial()
        );
        assert!(registry.is_compatible("203-035", "CTX-250-009"));
        assert_eq!("IS_PCD15287_01001", registry.default_transducer()?.serial());
        assert_eq!(1, registry.active_driving_systems().count());
        assert_eq!(2, registry.active_transducers().count());
        Ok(())
    }

    #[test]
    fn no_active() {
        let registry = EquipmentRegistry::builder()
            .driving_system(sc().with_active(false))
            .build()
            .unwrap();
        assert_eq!(
            Err(EquipmentError::NoActiveDrivingSystem),
            registry.default_driving_system()
        );
        assert_eq!(
            Err(EquipmentError::NoActiveTransducer),
            registry.default_transducer()
        );
    }

    #[rstest::rstest]
    #[case(true, "203-035", "CTX-250-009")]
    #[case(false, "203-035", "IS_PCD15287_01001")]
    #[case(true, "IGT-128-ch_comb_2x10-ch", "IS_PCD15287_01001")]
    #[case(false, "105-010", "CTX-250-009")]
    fn is_compatible(#[case] expect: bool, #[case] ds: &str, #[case] tran: &str) {
        assert_eq!(expect, registry().is_compatible(ds, tran));
    }

    #[test]
    fn duplicate_serial() {
        assert_eq!(
            Err(EquipmentError::DuplicateSerial("203-035".to_owned())),
            EquipmentRegistry::builder()
                .driving_system(sc())
                .driving_system(sc())
                .build()
                .map(|_| ())
        );
    }

    #[test]
    fn duplicate_combination() {
        assert_eq!(
            Err(EquipmentError::DuplicateCombination(
                "IGT-128-ch_comb_2x10-ch".to_owned(),
                "IS_PCD15287_01001".to_owned()
            )),
            EquipmentRegistry::builder()
                .driving_system(igt())
                .transducer(imasonic())
                .combination(combination(7.0, 17.7, 92.0))
                .combination(combination(7.0, 17.7, 92.0))
                .build()
                .map(|_| ())
        );
    }

    #[test]
    fn unknown_reference() {
        assert_eq!(
            Err(EquipmentError::TransducerNotFound(
                "IS_PCD15287_01001".to_owned()
            )),
            EquipmentRegistry::builder()
                .driving_system(igt())
                .combination(combination(7.0, 17.7, 92.0))
                .build()
                .map(|_| ())
        );
        assert_eq!(
            Err(EquipmentError::DrivingSystemNotFound(
                "IGT-128-ch_comb_2x10-ch".to_owned()
            )),
            EquipmentRegistry::builder()
                .transducer(imasonic())
                .combination(combination(7.0, 17.7, 92.0))
                .build()
                .map(|_| ())
        );
    }

    #[rstest::rstest]
    #[case(7.5, 17.7, 92.0)]
    #[case(7.0, 17.7, 91.0)]
    fn uncovered_focus_range(#[case] low: f64, #[case] boundary: f64, #[case] high: f64) {
        assert_eq!(
            Err(EquipmentError::UncoveredFocusRange {
                transducer: "IS_PCD15287_01001".to_owned(),
                covered_low: low,
                covered_high: high,
                min_focus: 7.0,
                max_focus: 92.0,
            }),
            EquipmentRegistry::builder()
                .driving_system(igt())
                .transducer(imasonic())
                .combination(combination(low, boundary, high))
                .build()
                .map(|_| ())
        );
    }

    #[test]
    fn invalid_focus_range() {
        assert_eq!(
            Err(EquipmentError::InvalidFocusRange(
                "IS_PCD15287_01001".to_owned(),
                92.0,
                7.0
            )),
            EquipmentRegistry::builder()
                .transducer(imasonic().with_focus_range(92.0, 7.0))
                .build()
                .map(|_| ())
        );
    }

    #[test]
    fn send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EquipmentRegistry>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn catalog() -> anyhow::Result<()> {
        let catalog = Catalog {
            driving_systems: vec![igt(), sc()],
            transducers: vec![imasonic(), ctx()],
            combinations: vec![combination(7.0, 17.7, 92.0)],
        };
        let json = serde_json::to_string(&catalog)?;
        let registry = EquipmentRegistry::try_from(serde_json::from_str::<Catalog>(&json)?)?;
        let tran = registry.lookup_transducer("IS_PCD15287_01001")?;
        assert_eq!(10, tran.elements());
        approx::assert_abs_diff_eq!(9.7, tran.exit_distance(), epsilon = 1e-12);
        assert_eq!("203-035", registry.default_driving_system()?.serial());
        assert!(registry
            .lookup_combination("IGT-128-ch_comb_2x10-ch", "IS_PCD15287_01001")
            .is_some());
        Ok(())
    }
}
