//! Kamea ternary transformation engine.
//!
//! Models six-digit base-3 values (Ditrunes) and the closed algebra
//! over them: conrune and reversal transforms, positional bigrams and
//! grid locators, conrune differentials with their balanced-ternary
//! inverse, and nuclear mutation chains that sort all 729 values into
//! nine families.
//!
//! Pure math with zero I/O; no opinions about transport or
//! persistence.

pub mod bigram;
pub mod constants;
pub mod differential;
pub mod ditrune;
pub mod error;
pub mod family;
pub mod grid;
pub mod mutation;
pub mod profile;
pub mod quadset;
pub mod ternary;
pub mod transform;
pub mod trit;

pub use bigram::{Bigram, Bigrams, KameaLocator};
pub use constants::{
    DITRUNE_COUNT, DITRUNE_WIDTH, FAMILY_COUNT, FAMILY_SIZE, GRID_SIZE, HALF_EXTENT,
    MAX_MUTATIONS, MAX_WIDTH,
};
pub use differential::{
    DifferentialIndex, abs_differential, conrune_partner, from_differential,
    max_differential, signed_differential,
};
pub use ditrune::Ditrune;
pub use error::{DomainError, Result};
pub use family::{Classification, FamilyTable, Role, classify};
pub use grid::{GridCoordinate, grid_size};
pub use mutation::{Resolution, mutate, resolve};
pub use profile::{DitruneProfile, TransformImage, export_json, import_json};
pub use quadset::Quadset;
pub use ternary::Ternary;
pub use trit::Trit;
