use derive_more::Display;
use getset::CopyGetters;

use super::Quintic;

/// A focus range with an inclusive upper bound and an inclusive or exclusive lower bound.
#[derive(Clone, Copy, PartialEq, Debug, Display, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display("{}{low}, {high}]", if *low_inclusive { "[" } else { "(" })]
#[getset(get_copy = "pub")]
pub struct FocusRange {
    /// Lower bound \[mm\].
    low: f64,
    /// Upper bound \[mm\], always inclusive.
    high: f64,
    /// Whether `low` itself belongs to the range.
    low_inclusive: bool,
}

impl FocusRange {
    /// Creates `[low, high]`.
    #[must_use]
    pub const fn closed(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            low_inclusive: true,
        }
    }

    /// Creates `(low, high]`.
    #[must_use]
    pub const fn left_open(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            low_inclusive: false,
        }
    }

    /// Checks whether `focus` belongs to the range.
    #[must_use]
    pub fn contains(&self, focus: f64) -> bool {
        let above_low = if self.low_inclusive {
            self.low <= focus
        } else {
            self.low < focus
        };
        above_low && focus <= self.high
    }
}

/// A focus-range-gated polynomial mapping focal depth to an equalization factor.
#[derive(Clone, Copy, PartialEq, Debug, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[getset(get_copy = "pub")]
pub struct EqualizationSegment {
    /// Range of focal depths covered by this segment.
    range: FocusRange,
    /// Polynomial of the equalization factor.
    poly: Quintic,
}

impl EqualizationSegment {
    /// Creates a new [`EqualizationSegment`].
    #[must_use]
    pub const fn new(range: FocusRange, poly: Quintic) -> Self {
        Self { range, poly }
    }

    /// Evaluates the polynomial without checking the range.
    #[must_use]
    pub fn eval(&self, focus: f64) -> f64 {
        self.poly.eval(focus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(true, FocusRange::closed(7.0, 17.7), 7.0)]
    #[case(true, FocusRange::closed(7.0, 17.7), 17.7)]
    #[case(false, FocusRange::closed(7.0, 17.7), 17.71)]
    #[case(false, FocusRange::left_open(17.7, 92.0), 17.7)]
    #[case(true, FocusRange::left_open(17.7, 92.0), 17.71)]
    #[case(true, FocusRange::left_open(17.7, 92.0), 92.0)]
    #[case(false, FocusRange::left_open(17.7, 92.0), 92.01)]
    fn contains(#[case] expect: bool, #[case] range: FocusRange, #[case] focus: f64) {
        assert_eq!(expect, range.contains(focus));
    }

    #[test]
    fn display() {
        assert_eq!("[7, 17.7]", FocusRange::closed(7.0, 17.7).to_string());
        assert_eq!("(17.7, 92]", FocusRange::left_open(17.7, 92.0).to_string());
    }
}
