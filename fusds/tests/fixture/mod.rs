use std::sync::Arc;

use fusds::prelude::*;

pub const IGT_128: &str = "IGT-128-ch_comb_2x10-ch";
pub const IGT_32: &str = "IGT-32-ch_comb_1x10-ch";
pub const SC_4: &str = "203-035";
pub const IMASONIC_10: &str = "IS_PCD15287_01001";
pub const CTX_250: &str = "CTX-250-009";

pub fn catalog() -> anyhow::Result<Catalog> {
    Ok(serde_json::from_str(include_str!("catalog.json"))?)
}

pub fn registry() -> anyhow::Result<Arc<EquipmentRegistry>> {
    Ok(Arc::new(EquipmentRegistry::try_from(catalog()?)?))
}

/// Positions of the elements of a 10 element bowl with a radius of 75 mm, in millimeters.
pub fn bowl() -> ElementArray {
    ElementArray::from_mm((0..10).map(|i| {
        let theta: f64 = 0.3;
        let phi = 2.0 * std::f64::consts::PI * i as f64 / 10.0;
        [
            75.0 * theta.sin() * phi.cos(),
            75.0 * theta.sin() * phi.sin(),
            75.0 * theta.cos(),
        ]
    }))
}
