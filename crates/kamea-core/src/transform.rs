use crate::trit::Trit;

/// Digit-wise conrune: [`Trit::conrune`] applied at every position.
/// Involution at any width.
pub fn conrune(digits: &[Trit]) -> Vec<Trit> {
    digits.iter().map(|t| t.conrune()).collect()
}

/// Digit order flipped end to end. Involution at any width.
pub fn reversal(digits: &[Trit]) -> Vec<Trit> {
    digits.iter().rev().copied().collect()
}

/// Conrune and reversal composed. The two commute, so the result does
/// not depend on application order.
pub fn conrune_reversal(digits: &[Trit]) -> Vec<Trit> {
    let mut out = conrune(digits);
    out.reverse();
    out
}
