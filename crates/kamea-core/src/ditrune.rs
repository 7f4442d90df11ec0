use std::fmt;
use std::str::FromStr;

use crate::constants::{DITRUNE_COUNT, DITRUNE_WIDTH};
use crate::error::{DomainError, Result};
use crate::ternary::Ternary;
use crate::trit::Trit;

/// A six-digit ternary value, the unit the Kamea engine works over.
///
/// Exactly 729 exist. The fixed width keeps the type Copy and makes
/// every transform on it total, so none of these methods return
/// Result. Ordering is digit-lexicographic, which at fixed width is
/// the numeric order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ditrune([Trit; DITRUNE_WIDTH]);

impl Ditrune {
    pub fn from_digits(digits: [Trit; DITRUNE_WIDTH]) -> Self {
        Self(digits)
    }

    pub fn from_decimal(decimal: u16) -> Result<Self> {
        if usize::from(decimal) >= DITRUNE_COUNT {
            return Err(DomainError::ValueOutOfRange {
                value: u64::from(decimal),
                width: DITRUNE_WIDTH,
            });
        }
        Ok(Self::of_decimal(decimal))
    }

    /// Callers guarantee `decimal < DITRUNE_COUNT`.
    pub(crate) fn of_decimal(decimal: u16) -> Self {
        let mut digits = [Trit::Zero; DITRUNE_WIDTH];
        let mut rest = decimal;
        for slot in digits.iter_mut().rev() {
            *slot = match rest % 3 {
                0 => Trit::Zero,
                1 => Trit::One,
                _ => Trit::Two,
            };
            rest /= 3;
        }
        Self(digits)
    }

    /// All 729 Ditrunes in ascending decimal order.
    pub fn all() -> impl Iterator<Item = Ditrune> {
        (0..DITRUNE_COUNT as u16).map(Self::of_decimal)
    }

    pub fn decimal(self) -> u16 {
        self.0
            .iter()
            .fold(0u16, |acc, t| acc * 3 + u16::from(t.value()))
    }

    pub fn digits(self) -> [Trit; DITRUNE_WIDTH] {
        self.0
    }

    /// Digit-wise conrune. Involution.
    pub fn conrune(self) -> Self {
        Self(self.0.map(Trit::conrune))
    }

    /// Digit order flipped. Involution.
    pub fn reversal(self) -> Self {
        let mut digits = self.0;
        digits.reverse();
        Self(digits)
    }

    /// Conrune and reversal composed; the two commute.
    pub fn conrune_reversal(self) -> Self {
        self.conrune().reversal()
    }

    pub fn to_ternary(self) -> Ternary {
        Ternary::from_digits_unchecked(self.0.to_vec())
    }

    pub fn from_ternary(numeral: &Ternary) -> Result<Self> {
        let actual = numeral.width();
        if actual != DITRUNE_WIDTH {
            return Err(DomainError::WrongLength {
                expected: DITRUNE_WIDTH,
                actual,
            });
        }
        let mut digits = [Trit::Zero; DITRUNE_WIDTH];
        digits.copy_from_slice(numeral.digits());
        Ok(Self(digits))
    }
}

impl fmt::Display for Ditrune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for trit in &self.0 {
            write!(f, "{}", trit.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Ditrune {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .chars()
            .map(Trit::try_from)
            .collect::<Result<Vec<_>>>()?;
        let actual = digits.len();
        let digits: [Trit; DITRUNE_WIDTH] =
            digits.try_into().map_err(|_| DomainError::WrongLength {
                expected: DITRUNE_WIDTH,
                actual,
            })?;
        Ok(Self(digits))
    }
}

impl serde::Serialize for Ditrune {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Ditrune {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_fixture() {
        let d: Ditrune = "102201".parse().unwrap();
        assert_eq!(d.decimal(), 316);
        assert_eq!(Ditrune::from_decimal(316).unwrap(), d);
    }

    #[test]
    fn test_decimal_round_trips_for_all() {
        for (expected, d) in Ditrune::all().enumerate() {
            assert_eq!(usize::from(d.decimal()), expected);
        }
    }

    #[test]
    fn test_ordering_follows_decimal() {
        let all: Vec<Ditrune> = Ditrune::all().collect();
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_from_decimal_rejects_730() {
        assert!(Ditrune::from_decimal(729).is_err());
        assert!(Ditrune::from_decimal(u16::MAX).is_err());
    }

    #[test]
    fn test_conrune_fixture() {
        let d: Ditrune = "102201".parse().unwrap();
        assert_eq!(d.conrune().to_string(), "201102");
        assert_eq!(d.conrune().decimal(), 524);
    }

    #[test]
    fn test_transforms_are_involutions_for_all() {
        for d in Ditrune::all() {
            assert_eq!(d.conrune().conrune(), d);
            assert_eq!(d.reversal().reversal(), d);
            assert_eq!(d.conrune_reversal().conrune_reversal(), d);
        }
    }

    #[test]
    fn test_conrune_and_reversal_commute() {
        for d in Ditrune::all() {
            assert_eq!(d.conrune().reversal(), d.reversal().conrune());
        }
    }

    #[test]
    fn test_parse_requires_exactly_six_digits() {
        assert_eq!(
            "10220".parse::<Ditrune>(),
            Err(DomainError::WrongLength {
                expected: 6,
                actual: 5
            })
        );
        assert!("1022011".parse::<Ditrune>().is_err());
        assert!("10220x".parse::<Ditrune>().is_err());
    }

    #[test]
    fn test_ternary_conversion() {
        let d: Ditrune = "102201".parse().unwrap();
        let t = d.to_ternary();
        assert_eq!(t.decode(), 316);
        assert_eq!(Ditrune::from_ternary(&t).unwrap(), d);

        let short = Ternary::encode(5, 4).unwrap();
        assert!(Ditrune::from_ternary(&short).is_err());
    }

    #[test]
    fn test_json_round_trips_as_string() {
        let d: Ditrune = "102201".parse().unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"102201\"");
        assert_eq!(serde_json::from_str::<Ditrune>(&json).unwrap(), d);
    }
}
