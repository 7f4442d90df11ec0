use serde::{Deserialize, Serialize};

use crate::ditrune::Ditrune;
use crate::mutation::{self, Resolution};

/// How a Ditrune relates to its family's attractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// An attractor itself, zero mutations away.
    Prime,
    /// One mutation from the attractor.
    Composite,
    /// Two mutations from the attractor.
    Concurrent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prime => "prime",
            Self::Composite => "composite",
            Self::Concurrent => "concurrent",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "prime" => Self::Prime,
            "composite" => Self::Composite,
            _ => Self::Concurrent,
        }
    }
}

/// Family assignment for a single Ditrune.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// 0..=8, the attractor's rank among the nine.
    pub family_id: u8,
    pub prime: Ditrune,
    pub role: Role,
    /// Mutations from the value to the attractor, at most two.
    pub mutation_distance: u8,
}

/// Classify one Ditrune by walking its mutation chain.
pub fn classify(ditrune: Ditrune) -> Classification {
    let Resolution { prime, steps, .. } = mutation::resolve(ditrune);
    Classification {
        family_id: family_id_of(prime),
        prime,
        role: match steps {
            0 => Role::Prime,
            1 => Role::Composite,
            _ => Role::Concurrent,
        },
        mutation_distance: steps,
    }
}

/// Attractors rank by decimal value, and for an alternating state that
/// order is already decided by the leading digit pair.
fn family_id_of(prime: Ditrune) -> u8 {
    let digits = prime.digits();
    digits[0].value() * 3 + digits[1].value()
}

/// Classification of every Ditrune, indexed by decimal, plus the nine
/// attractors in family order.
///
/// Building scans all 729 values once. Hold one and share it when
/// classifying in bulk; nothing in it ever changes afterward.
pub struct FamilyTable {
    entries: Vec<Classification>,
    primes: Vec<Ditrune>,
}

impl FamilyTable {
    pub fn build() -> Self {
        let entries: Vec<Classification> = Ditrune::all().map(classify).collect();
        let primes: Vec<Ditrune> = entries
            .iter()
            .filter(|c| c.role == Role::Prime)
            .map(|c| c.prime)
            .collect();
        let attractors = primes.len();
        tracing::debug!("family table built: {} entries, {attractors} attractors", entries.len());
        Self { entries, primes }
    }

    pub fn get(&self, ditrune: Ditrune) -> &Classification {
        &self.entries[usize::from(ditrune.decimal())]
    }

    /// The nine attractors in family-id order.
    pub fn primes(&self) -> &[Ditrune] {
        &self.primes
    }

    /// Members of one family in ascending decimal order.
    pub fn members(&self, family_id: u8) -> impl Iterator<Item = Ditrune> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.family_id == family_id)
            .map(|(decimal, _)| Ditrune::of_decimal(decimal as u16))
    }

    pub fn family_size(&self, family_id: u8) -> usize {
        self.members(family_id).count()
    }

    /// How many of the 729 values carry `role`.
    pub fn role_count(&self, role: Role) -> usize {
        self.entries.iter().filter(|c| c.role == role).count()
    }
}

impl Default for FamilyTable {
    fn default() -> Self {
        Self::build()
    }
}
