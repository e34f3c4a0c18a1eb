use super::SOUND_SPEED_WATER;

/// \[Hz\]
pub struct Hz;

/// \[kHz\]
#[allow(non_camel_case_types)]
pub struct kHz;

/// Frequency, stored in Hz.
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Freq {
    hz: f64,
}

impl Freq {
    /// Returns the frequency in Hz.
    pub const fn hz(&self) -> f64 {
        self.hz
    }

    /// Returns the frequency in kHz.
    pub fn khz(&self) -> f64 {
        self.hz / 1e3
    }

    /// Checks whether the frequency is finite and positive.
    pub fn is_valid(&self) -> bool {
        self.hz.is_finite() && self.hz > 0.0
    }

    /// Wavelength in water \[m\].
    pub fn wavelength(&self) -> f64 {
        SOUND_SPEED_WATER / self.hz
    }
}

impl std::fmt::Debug for Freq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Hz", self.hz)
    }
}

impl std::ops::Mul<Hz> for f64 {
    type Output = Freq;

    fn mul(self, _rhs: Hz) -> Self::Output {
        Freq { hz: self }
    }
}

impl std::ops::Mul<kHz> for f64 {
    type Output = Freq;

    fn mul(self, _rhs: kHz) -> Self::Output {
        Freq { hz: self * 1e3 }
    }
}
