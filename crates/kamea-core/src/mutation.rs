use serde::{Deserialize, Serialize};

use crate::constants::MAX_MUTATIONS;
use crate::ditrune::Ditrune;

/// One nuclear mutation: the digits contract toward the core,
/// (d1, d2, d3, d4, d5, d6) becoming (d2, d3, d4, d3, d4, d5).
///
/// Two applications always land on the alternating state built from
/// d3 and d4, so every chain settles within two steps.
pub fn mutate(ditrune: Ditrune) -> Ditrune {
    let d = ditrune.digits();
    Ditrune::from_digits([d[1], d[2], d[3], d[2], d[3], d[4]])
}

/// Where a mutation chain settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// The chain's attractor, always one of the nine alternating
    /// states.
    pub prime: Ditrune,
    /// Mutations applied before the attractor first appeared.
    pub steps: u8,
    /// True when the attractor belongs to a two-cycle rather than
    /// sitting still under mutation.
    pub cycle_detected: bool,
}

/// Follow mutations from `start` until a state repeats.
///
/// A fixed point resolves to itself; a two-cycle resolves to whichever
/// of its members the chain reached first. The walk keeps the visited
/// states in order so the attractor's first-appearance index gives the
/// step count.
pub fn resolve(start: Ditrune) -> Resolution {
    let mut seen = vec![start];
    let mut current = start;
    for _ in 0..MAX_MUTATIONS {
        let next = mutate(current);
        if next == current {
            return Resolution {
                prime: current,
                steps: (seen.len() - 1) as u8,
                cycle_detected: false,
            };
        }
        if let Some(first_seen) = seen.iter().position(|&state| state == next) {
            return Resolution {
                prime: next,
                steps: first_seen as u8,
                cycle_detected: true,
            };
        }
        seen.push(next);
        current = next;
    }
    // Unreachable while mutate contracts to an alternating state in
    // two steps.
    Resolution {
        prime: current,
        steps: (seen.len() - 1) as u8,
        cycle_detected: false,
    }
}
