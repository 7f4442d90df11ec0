use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A single base-3 digit.
///
/// The conrune map swaps One and Two and fixes Zero. It is its own
/// inverse, and every value-level transform in the crate is built by
/// applying it digit by digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Trit {
    Zero,
    One,
    Two,
}

impl Trit {
    /// All three digits in numeric order.
    pub const ALL: [Trit; 3] = [Trit::Zero, Trit::One, Trit::Two];

    /// Numeric value, 0..=2.
    pub fn value(self) -> u8 {
        match self {
            Trit::Zero => 0,
            Trit::One => 1,
            Trit::Two => 2,
        }
    }

    /// The conrune image: 0 -> 0, 1 -> 2, 2 -> 1.
    pub fn conrune(self) -> Trit {
        match self {
            Trit::Zero => Trit::Zero,
            Trit::One => Trit::Two,
            Trit::Two => Trit::One,
        }
    }

    /// Digit character, '0' through '2'.
    pub fn to_char(self) -> char {
        match self {
            Trit::Zero => '0',
            Trit::One => '1',
            Trit::Two => '2',
        }
    }
}

impl TryFrom<u8> for Trit {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Trit::Zero),
            1 => Ok(Trit::One),
            2 => Ok(Trit::Two),
            _ => Err(DomainError::InvalidDigit {
                digit: (b'0' + value.min(9)) as char,
            }),
        }
    }
}

impl TryFrom<char> for Trit {
    type Error = DomainError;

    fn try_from(digit: char) -> Result<Self, Self::Error> {
        match digit {
            '0' => Ok(Trit::Zero),
            '1' => Ok(Trit::One),
            '2' => Ok(Trit::Two),
            _ => Err(DomainError::InvalidDigit { digit }),
        }
    }
}

impl From<Trit> for u8 {
    fn from(trit: Trit) -> u8 {
        trit.value()
    }
}

impl std::fmt::Display for Trit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conrune_is_an_involution() {
        for trit in Trit::ALL {
            assert_eq!(trit.conrune().conrune(), trit);
        }
    }

    #[test]
    fn test_conrune_fixes_zero_and_swaps_one_two() {
        assert_eq!(Trit::Zero.conrune(), Trit::Zero);
        assert_eq!(Trit::One.conrune(), Trit::Two);
        assert_eq!(Trit::Two.conrune(), Trit::One);
    }

    #[test]
    fn test_char_round_trip() {
        for trit in Trit::ALL {
            assert_eq!(Trit::try_from(trit.to_char()).unwrap(), trit);
        }
    }

    #[test]
    fn test_rejects_non_ternary_input() {
        assert!(Trit::try_from('3').is_err());
        assert!(Trit::try_from('x').is_err());
        assert!(Trit::try_from(7u8).is_err());
    }
}
