use super::{Element, Point3, Vector3};

use crate::common::MILLIMETER;

/// The ordered elements of a phased-array transducer.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementArray {
    elements: Vec<Element>,
}

impl ElementArray {
    /// Creates a new [`ElementArray`] from element positions in meters.
    #[must_use]
    pub fn new(positions: impl IntoIterator<Item = Point3>) -> Self {
        Self {
            elements: positions
                .into_iter()
                .enumerate()
                .map(|(idx, p)| {
                    let mut el = Element::new(p);
                    el.idx = idx;
                    el
                })
                .collect(),
        }
    }

    /// Creates a new [`ElementArray`] from `(x, y, z)` coordinates in millimeters, the unit used
    /// by transducer definition files.
    #[must_use]
    pub fn from_mm(coords: impl IntoIterator<Item = [f64; 3]>) -> Self {
        Self::new(
            coords
                .into_iter()
                .map(|[x, y, z]| Point3::new(x, y, z) * MILLIMETER),
        )
    }

    /// Gets the number of elements.
    #[must_use]
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// Gets the geometric center of the elements.
    #[must_use]
    pub fn center(&self) -> Point3 {
        if self.elements.is_empty() {
            return Point3::origin();
        }
        Point3::from(
            self.elements
                .iter()
                .map(|el| el.position().coords)
                .sum::<Vector3>()
                / self.elements.len() as f64,
        )
    }
}

impl std::ops::Deref for ElementArray {
    type Target = [Element];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}
