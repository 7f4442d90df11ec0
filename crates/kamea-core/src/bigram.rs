use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DITRUNE_WIDTH;
use crate::ditrune::Ditrune;
use crate::error::{DomainError, Result};
use crate::trit::Trit;

/// An ordered digit pair. `first` is the higher-order digit, so the
/// decimal value runs 0..=8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bigram {
    pub first: Trit,
    pub second: Trit,
}

impl Bigram {
    pub fn new(first: Trit, second: Trit) -> Self {
        Self { first, second }
    }

    pub fn from_decimal(value: u8) -> Result<Self> {
        if value > 8 {
            return Err(DomainError::ValueOutOfRange {
                value: u64::from(value),
                width: 2,
            });
        }
        let (first, second) = split_pair(value);
        Ok(Self { first, second })
    }

    pub fn decimal(self) -> u8 {
        self.first.value() * 3 + self.second.value()
    }
}

/// The three positional pairs of a Ditrune, named for how far each
/// sits from the ends: outer is (d1, d6), middle is (d2, d5), inner
/// is (d3, d4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bigrams {
    pub outer: Bigram,
    pub middle: Bigram,
    pub inner: Bigram,
}

impl Bigrams {
    pub fn of(ditrune: Ditrune) -> Self {
        let d = ditrune.digits();
        Self {
            outer: Bigram::new(d[0], d[5]),
            middle: Bigram::new(d[1], d[4]),
            inner: Bigram::new(d[2], d[3]),
        }
    }

    /// Same extraction over a raw digit slice, which must hold exactly
    /// six digits.
    pub fn from_digits(digits: &[Trit]) -> Result<Self> {
        if digits.len() != DITRUNE_WIDTH {
            return Err(DomainError::WrongLength {
                expected: DITRUNE_WIDTH,
                actual: digits.len(),
            });
        }
        Ok(Self {
            outer: Bigram::new(digits[0], digits[5]),
            middle: Bigram::new(digits[1], digits[4]),
            inner: Bigram::new(digits[2], digits[3]),
        })
    }

    pub fn locator(&self) -> KameaLocator {
        KameaLocator {
            region: self.inner.decimal(),
            area: self.middle.decimal(),
            cell: self.outer.decimal(),
        }
    }
}

/// Where a Ditrune lands in the 9-region, 9-area, 9-cell Kamea
/// hierarchy: region from the inner bigram, area from the middle,
/// cell from the outer. Displays as "region-area-cell".
///
/// Fields stay below 9, so converting back to a Ditrune is total and
/// the locator is a lossless alternate coordinate for all 729 values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KameaLocator {
    region: u8,
    area: u8,
    cell: u8,
}

impl KameaLocator {
    pub fn new(region: u8, area: u8, cell: u8) -> Result<Self> {
        for part in [region, area, cell] {
            if part > 8 {
                return Err(DomainError::ValueOutOfRange {
                    value: u64::from(part),
                    width: 2,
                });
            }
        }
        Ok(Self { region, area, cell })
    }

    pub fn of(ditrune: Ditrune) -> Self {
        Bigrams::of(ditrune).locator()
    }

    pub fn region(&self) -> u8 {
        self.region
    }

    pub fn area(&self) -> u8 {
        self.area
    }

    pub fn cell(&self) -> u8 {
        self.cell
    }

    /// Rebuild the Ditrune this locator addresses.
    pub fn to_ditrune(&self) -> Ditrune {
        let (d3, d4) = split_pair(self.region);
        let (d2, d5) = split_pair(self.area);
        let (d1, d6) = split_pair(self.cell);
        Ditrune::from_digits([d1, d2, d3, d4, d5, d6])
    }
}

/// Splits a two-digit decimal (0..=8) back into its ternary pair.
fn split_pair(value: u8) -> (Trit, Trit) {
    let of = |v: u8| match v {
        0 => Trit::Zero,
        1 => Trit::One,
        _ => Trit::Two,
    };
    (of(value / 3), of(value % 3))
}

impl fmt::Display for KameaLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.region, self.area, self.cell)
    }
}

impl FromStr for KameaLocator {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 {
            return Err(DomainError::WrongLength {
                expected: 3,
                actual: parts.len(),
            });
        }
        let mut values = [0u8; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| DomainError::InvalidDigit {
                digit: part.chars().next().unwrap_or('-'),
            })?;
        }
        Self::new(values[0], values[1], values[2])
    }
}

impl serde::Serialize for KameaLocator {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for KameaLocator {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
