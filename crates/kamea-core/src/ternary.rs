use std::fmt;
use std::str::FromStr;

use crate::constants::MAX_WIDTH;
use crate::error::{DomainError, Result};
use crate::transform;
use crate::trit::Trit;

/// A ternary numeral of arbitrary width, most significant digit first.
///
/// Leading zeros are significant: "0012" and "12" are different
/// numerals for the same decimal value. Width is capped at
/// [`MAX_WIDTH`] so every decimal fits in u64 arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ternary {
    digits: Vec<Trit>,
}

impl Ternary {
    pub fn from_digits(digits: Vec<Trit>) -> Result<Self> {
        if digits.len() > MAX_WIDTH {
            return Err(DomainError::WidthTooLarge {
                width: digits.len(),
            });
        }
        Ok(Self { digits })
    }

    /// Construction for digit vectors whose width the caller has
    /// already bounded.
    pub(crate) fn from_digits_unchecked(digits: Vec<Trit>) -> Self {
        Self { digits }
    }

    /// Encode `value` as exactly `width` digits, zero padded on the left.
    pub fn encode(value: u64, width: usize) -> Result<Self> {
        if width > MAX_WIDTH {
            return Err(DomainError::WidthTooLarge { width });
        }
        if value >= 3u64.pow(width as u32) {
            return Err(DomainError::ValueOutOfRange { value, width });
        }
        let mut digits = vec![Trit::Zero; width];
        let mut rest = value;
        for slot in digits.iter_mut().rev() {
            *slot = match rest % 3 {
                0 => Trit::Zero,
                1 => Trit::One,
                _ => Trit::Two,
            };
            rest /= 3;
        }
        Ok(Self { digits })
    }

    /// Decimal value of the numeral.
    pub fn decode(&self) -> u64 {
        self.digits
            .iter()
            .fold(0u64, |acc, t| acc * 3 + u64::from(t.value()))
    }

    pub fn digits(&self) -> &[Trit] {
        &self.digits
    }

    pub fn width(&self) -> usize {
        self.digits.len()
    }

    /// Digit-wise conrune at the same width.
    pub fn conrune(&self) -> Ternary {
        Ternary {
            digits: transform::conrune(&self.digits),
        }
    }

    /// Digit order flipped at the same width.
    pub fn reversal(&self) -> Ternary {
        Ternary {
            digits: transform::reversal(&self.digits),
        }
    }

    /// Conrune and reversal composed.
    pub fn conrune_reversal(&self) -> Ternary {
        Ternary {
            digits: transform::conrune_reversal(&self.digits),
        }
    }
}

impl fmt::Display for Ternary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for trit in &self.digits {
            write!(f, "{}", trit.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Ternary {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .chars()
            .map(Trit::try_from)
            .collect::<Result<Vec<_>>>()?;
        Self::from_digits(digits)
    }
}

impl serde::Serialize for Ternary {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Ternary {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
