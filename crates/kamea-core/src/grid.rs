use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

/// A Cartesian cell address on the Kamea grid. The origin sits at the
/// center, x grows rightward, y grows upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoordinate {
    pub x: i32,
    pub y: i32,
}

/// Rows (and columns) of the square grid spanned by `half_extent`.
pub fn grid_size(half_extent: i32) -> usize {
    if half_extent < 0 {
        return 0;
    }
    2 * half_extent as usize + 1
}

impl GridCoordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Row/column indices for storage order: row 0 is the top edge
    /// (y = half_extent), column 0 the left edge (x = -half_extent).
    pub fn to_row_col(self, half_extent: i32) -> Result<(usize, usize)> {
        if half_extent < 0
            || self.x < -half_extent
            || self.x > half_extent
            || self.y < -half_extent
            || self.y > half_extent
        {
            return Err(DomainError::OutOfGrid {
                x: self.x,
                y: self.y,
                half_extent,
            });
        }
        let row = (i64::from(half_extent) - i64::from(self.y)) as usize;
        let col = (i64::from(self.x) + i64::from(half_extent)) as usize;
        Ok((row, col))
    }

    /// Inverse of [`GridCoordinate::to_row_col`].
    pub fn from_row_col(row: usize, col: usize, half_extent: i32) -> Result<Self> {
        let size = grid_size(half_extent);
        if row >= size || col >= size {
            return Err(DomainError::OutOfGrid {
                x: (col as i64 - i64::from(half_extent))
                    .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
                y: (i64::from(half_extent) - row as i64)
                    .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
                half_extent,
            });
        }
        Ok(Self {
            x: (col as i64 - i64::from(half_extent)) as i32,
            y: (i64::from(half_extent) - row as i64) as i32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GRID_SIZE, HALF_EXTENT};

    #[test]
    fn test_origin_maps_to_center() {
        let (row, col) = GridCoordinate::new(0, 0).to_row_col(HALF_EXTENT).unwrap();
        assert_eq!((row, col), (13, 13));
    }

    #[test]
    fn test_corners() {
        let top_left = GridCoordinate::new(-HALF_EXTENT, HALF_EXTENT);
        assert_eq!(top_left.to_row_col(HALF_EXTENT).unwrap(), (0, 0));

        let bottom_right = GridCoordinate::new(HALF_EXTENT, -HALF_EXTENT);
        assert_eq!(bottom_right.to_row_col(HALF_EXTENT).unwrap(), (26, 26));
    }

    #[test]
    fn test_y_grows_upward() {
        let (low_row, _) = GridCoordinate::new(0, 5).to_row_col(HALF_EXTENT).unwrap();
        let (high_row, _) = GridCoordinate::new(0, -5).to_row_col(HALF_EXTENT).unwrap();
        assert!(low_row < high_row);
    }

    #[test]
    fn test_round_trip_covers_default_grid() {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let coord = GridCoordinate::from_row_col(row, col, HALF_EXTENT).unwrap();
                assert_eq!(coord.to_row_col(HALF_EXTENT).unwrap(), (row, col));
            }
        }
    }

    #[test]
    fn test_rejects_out_of_extent_coordinates() {
        assert_eq!(
            GridCoordinate::new(14, 0).to_row_col(HALF_EXTENT),
            Err(DomainError::OutOfGrid {
                x: 14,
                y: 0,
                half_extent: HALF_EXTENT
            })
        );
        assert!(GridCoordinate::new(0, -14).to_row_col(HALF_EXTENT).is_err());
        assert!(GridCoordinate::from_row_col(27, 0, HALF_EXTENT).is_err());
    }

    #[test]
    fn test_non_default_extent() {
        assert_eq!(grid_size(1), 3);
        let coord = GridCoordinate::new(1, -1);
        assert_eq!(coord.to_row_col(1).unwrap(), (2, 2));
        assert!(coord.to_row_col(0).is_err());
    }

    #[test]
    fn test_negative_extent_has_no_cells() {
        assert_eq!(grid_size(-1), 0);
        assert!(GridCoordinate::new(0, 0).to_row_col(-1).is_err());
        assert!(GridCoordinate::from_row_col(0, 0, -1).is_err());
    }
}
