use std::fmt;

/// Everything that can go wrong while encoding, decoding, or mapping
/// ternary values. All variants carry the offending input so callers
/// can report it without re-deriving context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// A character outside `0`, `1`, `2` in a ternary string.
    InvalidDigit { digit: char },
    /// A digit sequence whose length does not match what the operation needs.
    WrongLength { expected: usize, actual: usize },
    /// A decimal value too large for the requested digit width.
    ValueOutOfRange { value: u64, width: usize },
    /// A conrune differential outside what `width` balanced digits can hold.
    DifferentialOutOfRange { differential: i64, width: usize },
    /// A requested width beyond what fits in 64-bit arithmetic.
    WidthTooLarge { width: usize },
    /// A Cartesian coordinate outside the grid's half-extent.
    OutOfGrid { x: i32, y: i32, half_extent: i32 },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidDigit { digit } => {
                write!(f, "invalid ternary digit {digit:?} (expected 0, 1, or 2)")
            }
            DomainError::WrongLength { expected, actual } => {
                write!(f, "expected {expected} digits, got {actual}")
            }
            DomainError::ValueOutOfRange { value, width } => {
                write!(f, "value {value} does not fit in {width} ternary digits")
            }
            DomainError::DifferentialOutOfRange {
                differential,
                width,
            } => {
                write!(
                    f,
                    "differential {differential} is not representable in {width} balanced ternary digits"
                )
            }
            DomainError::WidthTooLarge { width } => {
                write!(f, "width {width} exceeds the supported maximum")
            }
            DomainError::OutOfGrid { x, y, half_extent } => {
                write!(f, "coordinate ({x}, {y}) lies outside half-extent {half_extent}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type Result<T> = std::result::Result<T, DomainError>;
