use derive_more::Deref;

/// A polynomial of order five, `a0 + a1*x + a2*x^2 + a3*x^3 + a4*x^4 + a5*x^5`.
#[derive(Clone, Copy, PartialEq, Debug, Deref)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Quintic([f64; 6]);

impl Quintic {
    /// Creates a new [`Quintic`] from the coefficients in ascending order.
    #[must_use]
    pub const fn new(coeffs: [f64; 6]) -> Self {
        Self(coeffs)
    }

    /// Evaluates the polynomial at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.0.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }
}
