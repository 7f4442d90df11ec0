/// Digit width of a Ditrune.
pub const DITRUNE_WIDTH: usize = 6;

/// Number of distinct Ditrunes (3^6).
pub const DITRUNE_COUNT: usize = 729;

/// Number of Ditrunal families.
pub const FAMILY_COUNT: usize = 9;

/// Members per family: 1 Prime, 8 Composites, 72 Concurrents.
pub const FAMILY_SIZE: usize = 81;

/// Half-extent of the standard Kamea grid; coordinates span [-13, 13].
pub const HALF_EXTENT: i32 = 13;

/// Rows (and columns) of the standard Kamea grid, 2 * HALF_EXTENT + 1.
pub const GRID_SIZE: usize = 27;

/// Hard cap on nuclear mutation steps. Chains settle within two
/// mutations.
pub const MAX_MUTATIONS: usize = 10;

/// Widest supported ternary encoding. 3^40 < 2^64, so decimals of
/// any supported width fit in u64 arithmetic.
pub const MAX_WIDTH: usize = 40;
