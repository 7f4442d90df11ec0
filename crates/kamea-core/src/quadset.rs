use serde::{Deserialize, Serialize};

use crate::grid::GridCoordinate;

/// The sign-symmetry class of a grid coordinate: the distinct points
/// among (x, y), (-x, -y), (-x, y), (x, -y).
///
/// Construction canonicalizes on absolute values, so every member of a
/// class builds the same value and derived equality is set equality.
/// Off-axis classes hold four points, on-axis classes two, the origin
/// only itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadset {
    Origin([GridCoordinate; 1]),
    AxisPair([GridCoordinate; 2]),
    Quad([GridCoordinate; 4]),
}

impl Quadset {
    /// The class containing `seed`.
    pub fn of(seed: GridCoordinate) -> Self {
        let ax = seed.x.saturating_abs();
        let ay = seed.y.saturating_abs();
        if ax == 0 && ay == 0 {
            Quadset::Origin([GridCoordinate::new(0, 0)])
        } else if ax == 0 {
            Quadset::AxisPair([GridCoordinate::new(0, ay), GridCoordinate::new(0, -ay)])
        } else if ay == 0 {
            Quadset::AxisPair([GridCoordinate::new(ax, 0), GridCoordinate::new(-ax, 0)])
        } else {
            Quadset::Quad([
                GridCoordinate::new(ax, ay),
                GridCoordinate::new(-ax, -ay),
                GridCoordinate::new(-ax, ay),
                GridCoordinate::new(ax, -ay),
            ])
        }
    }

    /// Distinct members in canonical order.
    pub fn members(&self) -> &[GridCoordinate] {
        match self {
            Quadset::Origin(m) => m,
            Quadset::AxisPair(m) => m,
            Quadset::Quad(m) => m,
        }
    }

    pub fn size(&self) -> usize {
        self.members().len()
    }

    pub fn contains(&self, coordinate: GridCoordinate) -> bool {
        self.members().contains(&coordinate)
    }

    /// Sum of `value` over the members.
    pub fn sum<F>(&self, value: F) -> i64
    where
        F: FnMut(GridCoordinate) -> i64,
    {
        self.members().iter().copied().map(value).sum()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::constants::HALF_EXTENT;

    #[test]
    fn test_every_member_builds_the_same_class() {
        let seeds = [(3, 5), (-3, -5), (-3, 5), (3, -5)];
        let classes: HashSet<Quadset> = seeds
            .iter()
            .map(|&(x, y)| Quadset::of(GridCoordinate::new(x, y)))
            .collect();
        assert_eq!(classes.len(), 1);
    }

    #[test]
    fn test_class_sizes() {
        assert_eq!(Quadset::of(GridCoordinate::new(0, 0)).size(), 1);
        assert_eq!(Quadset::of(GridCoordinate::new(0, 7)).size(), 2);
        assert_eq!(Quadset::of(GridCoordinate::new(-4, 0)).size(), 2);
        assert_eq!(Quadset::of(GridCoordinate::new(2, 1)).size(), 4);
    }

    #[test]
    fn test_seed_is_always_a_member() {
        for x in -3..=3 {
            for y in -3..=3 {
                let seed = GridCoordinate::new(x, y);
                assert!(Quadset::of(seed).contains(seed));
            }
        }
    }

    /// The classes partition the grid: every cell appears in exactly
    /// one distinct class, and the class sizes add up to the cell
    /// count.
    #[test]
    fn test_classes_partition_the_default_grid() {
        let mut classes = HashSet::new();
        for x in -HALF_EXTENT..=HALF_EXTENT {
            for y in -HALF_EXTENT..=HALF_EXTENT {
                classes.insert(Quadset::of(GridCoordinate::new(x, y)));
            }
        }
        assert_eq!(classes.len(), 196);

        let mut appearances: HashMap<GridCoordinate, usize> = HashMap::new();
        for class in &classes {
            for &member in class.members() {
                *appearances.entry(member).or_default() += 1;
            }
        }
        assert_eq!(appearances.len(), 729);
        assert!(appearances.values().all(|&n| n == 1));
    }

    #[test]
    fn test_sum_visits_each_member_once() {
        let lookup = |c: GridCoordinate| i64::from(c.x + 20) * i64::from(c.y + 20);

        let quad = Quadset::of(GridCoordinate::new(2, 3));
        assert_eq!(quad.sum(lookup), 1600);

        let pair = Quadset::of(GridCoordinate::new(0, 3));
        assert_eq!(pair.sum(lookup), 20 * 23 + 20 * 17);

        let origin = Quadset::of(GridCoordinate::new(0, 0));
        assert_eq!(origin.sum(lookup), 400);
    }
}
