use std::collections::HashMap;

use crate::constants::{DITRUNE_COUNT, MAX_WIDTH};
use crate::ditrune::Ditrune;
use crate::error::{DomainError, Result};
use crate::ternary::Ternary;
use crate::trit::Trit;

/// The value paired with `value` under digit-wise conrune at `width`.
/// Applying it twice gets the original back.
pub fn conrune_partner(value: u64, width: usize) -> Result<u64> {
    Ok(Ternary::encode(value, width)?.conrune().decode())
}

/// How far `value` sits from its conrune partner: value minus partner.
/// Positive means the value dominates its partner, zero only for
/// values made entirely of 0 digits.
pub fn signed_differential(value: u64, width: usize) -> Result<i64> {
    let partner = conrune_partner(value, width)?;
    // Subtract in u64 first; width-40 values exceed i64 but their
    // differentials never do.
    Ok(if value >= partner {
        (value - partner) as i64
    } else {
        -((partner - value) as i64)
    })
}

/// The differential's magnitude, for callers that only care about
/// distance.
pub fn abs_differential(value: u64, width: usize) -> Result<u64> {
    Ok(signed_differential(value, width)?.unsigned_abs())
}

/// Largest differential any `width`-digit value can produce,
/// (3^width - 1) / 2. The all-twos numeral attains it.
pub fn max_differential(width: usize) -> Result<i64> {
    if width > MAX_WIDTH {
        return Err(DomainError::WidthTooLarge { width });
    }
    // 3^40 fits u64 but not i64; the halved bound fits both.
    Ok(((3u64.pow(width as u32) - 1) / 2) as i64)
}

/// Recover the unique conrune pair a differential came from.
///
/// The differential's balanced ternary digits (0, +1, -1) map to
/// ternary digits (0, 1, 2) of the first value; the second is its
/// conrune partner. The returned pair `(a, b)` satisfies
/// `b - a == differential`, so `b` reproduces the input under
/// [`signed_differential`] and negating the input swaps the pair.
pub fn from_differential(differential: i64, width: usize) -> Result<(u64, u64)> {
    let bound = max_differential(width)?;
    if differential.unsigned_abs() > bound as u64 {
        return Err(DomainError::DifferentialOutOfRange {
            differential,
            width,
        });
    }

    let mut digits = vec![Trit::Zero; width];
    let mut rest = differential;
    for slot in digits.iter_mut().rev() {
        *slot = match rest.rem_euclid(3) {
            0 => Trit::Zero,
            1 => Trit::One,
            // Balanced digit -1, written as ternary 2 with a carry.
            _ => {
                rest += 3;
                Trit::Two
            }
        };
        rest = rest.div_euclid(3);
    }

    let first = Ternary::from_digits_unchecked(digits);
    let second = first.conrune();
    Ok((first.decode(), second.decode()))
}

/// Precomputed differential lookup across all 729 Ditrunes.
///
/// Every Ditrune produces a distinct differential, so the map has one
/// entry per value and resolves a differential to its pair in O(1).
pub struct DifferentialIndex {
    by_differential: HashMap<i64, (Ditrune, Ditrune)>,
}

impl DifferentialIndex {
    pub fn build() -> Self {
        let mut by_differential = HashMap::with_capacity(DITRUNE_COUNT);
        for ditrune in Ditrune::all() {
            let partner = ditrune.conrune();
            let differential =
                i64::from(ditrune.decimal()) - i64::from(partner.decimal());
            by_differential.insert(differential, (partner, ditrune));
        }
        let entries = by_differential.len();
        tracing::debug!("differential index built: {entries} entries");
        Self { by_differential }
    }

    /// The pair `(a, b)` with `b - a == differential`, if any width-6
    /// value produces it.
    pub fn pair_for(&self, differential: i64) -> Option<(Ditrune, Ditrune)> {
        self.by_differential.get(&differential).copied()
    }

    pub fn len(&self) -> usize {
        self.by_differential.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_differential.is_empty()
    }

    /// All differentials in ascending order.
    pub fn differentials(&self) -> Vec<i64> {
        let mut keys: Vec<i64> = self.by_differential.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Every entry in ascending differential order, for browse views.
    pub fn pairs(&self) -> Vec<(i64, (Ditrune, Ditrune))> {
        let mut entries: Vec<(i64, (Ditrune, Ditrune))> = self
            .by_differential
            .iter()
            .map(|(&differential, &pair)| (differential, pair))
            .collect();
        entries.sort_unstable_by_key(|(differential, _)| *differential);
        entries
    }
}

impl Default for DifferentialIndex {
    fn default() -> Self {
        Self::build()
    }
}
