use super::Point3;

/// A single element of a phased-array transducer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Element {
    pub(crate) idx: usize,
    position: Point3,
}

impl Element {
    /// Creates a new [`Element`].
    ///
    /// The position is given in meters with the origin at the natural focal point and the Z axis
    /// pointing toward the transducer.
    #[must_use]
    pub const fn new(position: Point3) -> Self {
        Self { idx: 0, position }
    }

    /// Gets the index of the element, which is also its channel number.
    #[must_use]
    pub const fn idx(&self) -> usize {
        self.idx
    }

    /// Gets the position of the element.
    #[must_use]
    pub const fn position(&self) -> Point3 {
        self.position
    }
}
